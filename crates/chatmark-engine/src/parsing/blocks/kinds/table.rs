/// Pipe-table row detection with owned constants.
pub struct PipeRow;

impl PipeRow {
    /// The cell delimiter.
    pub const PIPE: char = '|';

    /// Substring that marks the Markdown header-separator convention.
    pub const SEPARATOR: &'static str = "---";

    /// Returns the trimmed, non-empty cells if the line is a pipe row: the
    /// trimmed line must start with a pipe. Splitting on `|` and dropping
    /// cells that trim to empty handles leading and trailing pipes in one
    /// pass (interior empty cells are dropped too).
    pub fn cells(line: &str) -> Option<Vec<&str>> {
        if !line.trim().starts_with(Self::PIPE) {
            return None;
        }
        Some(
            line.split(Self::PIPE)
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .collect(),
        )
    }

    /// Separator rows are matched on the raw line as a substring, not a
    /// full-line equality. The builder honors the flag only after a header
    /// row exists, so it never collides with the horizontal-rule check.
    pub fn is_separator(line: &str) -> bool {
        line.contains(Self::SEPARATOR)
    }
}
