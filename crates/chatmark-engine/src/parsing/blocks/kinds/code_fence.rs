/// Fenced code block delimiter with owned constant.
///
/// A fence is any line whose trimmed content starts with three backticks;
/// the same test opens and closes a block, so fences toggle.
pub struct CodeFence;

impl CodeFence {
    /// The fence marker.
    pub const MARKER: &'static str = "```";

    /// Returns the trimmed info string if the line is a fence.
    ///
    /// On an opening fence the info string is the language tag (possibly
    /// empty); on a closing fence it is ignored by the builder.
    pub fn info(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::MARKER).map(str::trim)
    }
}
