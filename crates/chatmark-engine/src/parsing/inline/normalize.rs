/// Rewrites underscore emphasis (`__bold__`, `_italic_`) to the asterisk
/// forms the tokenizer recognizes.
///
/// Not applied by [`tokenize`](crate::parsing::inline::tokenize): the app
/// has always fed raw message text to the tokenizer, so underscore emphasis
/// renders as plain text. Callers that want underscore support normalize
/// first, explicitly.
pub fn normalize_delimiters(text: &str) -> String {
    text.replace("__", "**").replace('_', "*")
}
