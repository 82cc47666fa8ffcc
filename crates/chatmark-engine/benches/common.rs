// Bench helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_transcript(messages: usize) -> String {
    let base = "# Update\n\nShipping *tonight* with **no blockers**.\n\n- flip the flag\n- watch `error_rate`\n\n| check | status |\n|-------|--------|\n| build | ok |\n\n```sh\ndeploy --all\n```\n\n---\n\n";
    base.repeat(messages)
}

#[allow(dead_code)]
pub fn formatted_line() -> &'static str {
    "Shipping *tonight* with **no blockers** and `deploy --all` to follow."
}
