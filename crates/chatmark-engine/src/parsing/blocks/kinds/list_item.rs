/// Bullet and numbered list markers with owned constants.
pub struct ListMarker;

impl ListMarker {
    /// Accepted bullet characters. `•` shows up in text pasted from other
    /// chat apps.
    pub const BULLETS: [char; 3] = ['-', '*', '•'];

    /// Splits a bullet item into (indent, item text): leading whitespace,
    /// one marker, a single space, then the verbatim remainder. `indent`
    /// counts leading whitespace characters, not bytes.
    pub fn bullet(line: &str) -> Option<(usize, &str)> {
        let (indent, rest) = split_indent(line);
        let mut chars = rest.chars();
        if !Self::BULLETS.contains(&chars.next()?) {
            return None;
        }
        chars.as_str().strip_prefix(' ').map(|text| (indent, text))
    }

    /// Splits off a numbered marker: digits, then `.` or `)`, then a single
    /// space. Returns the verbatim remainder; indentation is not reported
    /// for numbered items.
    pub fn numbered(line: &str) -> Option<&str> {
        let (_, rest) = split_indent(line);
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            return None;
        }
        rest[digits..].strip_prefix(['.', ')'])?.strip_prefix(' ')
    }
}

/// Splits a line into (leading whitespace char count, remainder).
fn split_indent(line: &str) -> (usize, &str) {
    let mut count = 0;
    for (i, ch) in line.char_indices() {
        if !ch.is_whitespace() {
            return (count, &line[i..]);
        }
        count += 1;
    }
    (count, "")
}
