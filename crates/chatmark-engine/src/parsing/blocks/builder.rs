use super::classify::{LineClass, LineKind};
use super::types::Block;

/// What the builder is in the middle of accumulating, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LeafState<'a> {
    None,
    /// Inside an open code fence; lines buffer verbatim until the closing
    /// fence toggles the state off.
    Fence {
        language: &'a str,
        lines: Vec<&'a str>,
    },
    /// Inside a run of pipe rows.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Phase 2 of block parsing: folds classified lines into blocks.
pub struct BlockBuilder<'a> {
    leaf: LeafState<'a>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, lc: LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(lc);
            return;
        }

        match lc.kind {
            LineKind::Fence { info } => {
                self.flush_table();
                self.leaf = LeafState::Fence {
                    language: info,
                    lines: Vec::new(),
                };
            }
            LineKind::PipeRow { cells, separator } => self.push_pipe_row(&cells, separator),
            LineKind::Heading { level, text } => self.emit(Block::Heading {
                level,
                text: text.to_string(),
            }),
            LineKind::Rule => self.emit(Block::HorizontalRule),
            LineKind::Bullet { indent, text } => self.emit(Block::ListItem {
                text: text.to_string(),
                indent,
                ordered: false,
            }),
            LineKind::Numbered { text } => self.emit(Block::ListItem {
                text: text.to_string(),
                indent: 0,
                ordered: true,
            }),
            LineKind::Blank => self.emit(Block::Blank),
            LineKind::Text => self.emit(Block::Paragraph {
                text: lc.raw.to_string(),
            }),
        }
    }

    /// End of input. A pending table is finalized — "next line absent"
    /// terminates a run the same way a non-pipe-row line does. A pending
    /// fence is dropped: its closing fence was never seen.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_table();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, lc: LineClass<'a>) {
        if matches!(lc.kind, LineKind::Fence { .. }) {
            let prev = std::mem::replace(&mut self.leaf, LeafState::None);
            if let LeafState::Fence { language, lines } = prev {
                self.out.push(Block::CodeBlock {
                    language: language.to_string(),
                    text: lines.join("\n"),
                });
            }
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            // Raw zone: headings, lists, pipes and blanks all buffer as-is.
            lines.push(lc.raw);
        }
    }

    fn push_pipe_row(&mut self, cells: &[&str], separator: bool) {
        let cells: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
        if let LeafState::Table { rows, .. } = &mut self.leaf {
            if !separator {
                rows.push(cells);
            }
        } else {
            // First pipe row of a run always becomes the header row.
            self.leaf = LeafState::Table {
                headers: cells,
                rows: Vec::new(),
            };
        }
    }

    fn emit(&mut self, block: Block) {
        self.flush_table();
        self.out.push(block);
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Table { headers, rows } = prev {
            self.out.push(Block::Table { headers, rows });
        } else {
            self.leaf = prev; // put back a non-table leaf (an open fence)
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::classify;
    use super::*;

    fn build(lines: &[&'static str]) -> Vec<Block> {
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(classify(line));
        }
        builder.finish()
    }

    #[test]
    fn fence_state_beats_block_rules() {
        let blocks = build(&["```", "# not a heading", "- not a list", "```"]);
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: String::new(),
                text: "# not a heading\n- not a list".to_string(),
            }]
        );
    }

    #[test]
    fn fence_buffers_blank_lines_verbatim() {
        let blocks = build(&["```py", "a", "", "b", "```"]);
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: "py".to_string(),
                text: "a\n\nb".to_string(),
            }]
        );
    }

    #[test]
    fn empty_fenced_block() {
        let blocks = build(&["```", "```"]);
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: String::new(),
                text: String::new(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_emits_nothing() {
        let blocks = build(&["before", "```rust", "let x = 1;"]);
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "before".to_string()
            }]
        );
    }

    #[test]
    fn table_with_separator_and_termination() {
        let blocks = build(&["|A|B|", "|---|---|", "|1|2|", "after"]);
        assert_eq!(
            blocks,
            vec![
                Block::Table {
                    headers: vec!["A".to_string(), "B".to_string()],
                    rows: vec![vec!["1".to_string(), "2".to_string()]],
                },
                Block::Paragraph {
                    text: "after".to_string()
                },
            ]
        );
    }

    #[test]
    fn table_run_ending_at_input_end_is_emitted() {
        let blocks = build(&["|A|", "|1|"]);
        assert_eq!(
            blocks,
            vec![Block::Table {
                headers: vec!["A".to_string()],
                rows: vec![vec!["1".to_string()]],
            }]
        );
    }

    #[test]
    fn blank_line_terminates_a_table_run() {
        let blocks = build(&["|A|", "|1|", "", "|B|"]);
        assert_eq!(
            blocks,
            vec![
                Block::Table {
                    headers: vec!["A".to_string()],
                    rows: vec![vec!["1".to_string()]],
                },
                Block::Blank,
                Block::Table {
                    headers: vec!["B".to_string()],
                    rows: vec![],
                },
            ]
        );
    }

    #[test]
    fn headers_only_table() {
        let blocks = build(&["|solo|", "done"]);
        assert_eq!(
            blocks,
            vec![
                Block::Table {
                    headers: vec!["solo".to_string()],
                    rows: vec![],
                },
                Block::Paragraph {
                    text: "done".to_string()
                },
            ]
        );
    }

    #[test]
    fn fence_opening_terminates_a_table_run() {
        let blocks = build(&["|A|", "```", "x", "```"]);
        assert_eq!(
            blocks,
            vec![
                Block::Table {
                    headers: vec!["A".to_string()],
                    rows: vec![],
                },
                Block::CodeBlock {
                    language: String::new(),
                    text: "x".to_string(),
                },
            ]
        );
    }
}
