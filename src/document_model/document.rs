use super::node::Node;
use super::snapshot::DocumentSnapshot;
use crate::error::EditError;

/// A document owned by the host editor: an ordered tree of blocks plus a
/// version counter bumped on every successful mutation. Positions handed out
/// by a snapshot are only valid against the version they were captured from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Node>,
    version: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            version: 0,
        }
    }

    pub fn from_blocks(blocks: Vec<Node>) -> Self {
        Self { blocks, version: 0 }
    }

    /// Build a document with one paragraph per line of `content`.
    pub fn from_text(content: &str) -> Self {
        let blocks = content.split('\n').map(Node::paragraph).collect();
        Self { blocks, version: 0 }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn blocks(&self) -> &[Node] {
        &self.blocks
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot::capture(self.version, &self.blocks)
    }

    /// Concatenated text content, one line per top-level block.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let mut line = String::new();
            collect_text(block, &mut line);
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Overwrite the text at `[from, to)` with `text`.
    ///
    /// The range must fall inside a single text run of the current version
    /// and land on character boundaries; anything else is rejected. A
    /// successful edit bumps the version, invalidating outstanding positions.
    pub fn replace_range(&mut self, from: usize, to: usize, text: &str) -> Result<(), EditError> {
        if from > to {
            return Err(EditError::Rejected { from, to });
        }
        let mut position = 0;
        match try_replace(&mut self.blocks, &mut position, from, to, text) {
            Some(Ok(())) => {
                self.version += 1;
                Ok(())
            }
            Some(Err(err)) => Err(err),
            None => Err(EditError::Rejected { from, to }),
        }
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Block { children, .. } => {
            for child in children {
                collect_text(child, out);
            }
        }
        Node::Text(text) => out.push_str(text),
    }
}

fn try_replace(
    nodes: &mut [Node],
    position: &mut usize,
    from: usize,
    to: usize,
    text: &str,
) -> Option<Result<(), EditError>> {
    for node in nodes {
        match node {
            Node::Block { children, .. } => {
                *position += 1;
                if let Some(outcome) = try_replace(children, position, from, to, text) {
                    return Some(outcome);
                }
                *position += 1;
            }
            Node::Text(run) => {
                let start = *position;
                let end = start + run.len();
                if from >= start && to <= end {
                    let local_from = from - start;
                    let local_to = to - start;
                    if !run.is_char_boundary(local_from) || !run.is_char_boundary(local_to) {
                        return Some(Err(EditError::Rejected { from, to }));
                    }
                    run.replace_range(local_from..local_to, text);
                    return Some(Ok(()));
                }
                *position = end;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_range_in_paragraph() {
        let mut document = Document::from_text("Hello World");

        // Run starts at 1, so "World" sits at 7..12.
        document.replace_range(7, 12, "Prose").unwrap();
        assert_eq!(document.plain_text(), "Hello Prose");
        assert_eq!(document.version(), 1);
    }

    #[test]
    fn test_replace_range_changes_length() {
        let mut document = Document::from_text("ab cd");

        document.replace_range(1, 3, "lengthy").unwrap();
        assert_eq!(document.plain_text(), "lengthy cd");
    }

    #[test]
    fn test_replace_range_rejects_out_of_bounds() {
        let mut document = Document::from_text("short");

        let err = document.replace_range(3, 99, "x").unwrap_err();
        assert_eq!(err, EditError::Rejected { from: 3, to: 99 });
        assert_eq!(document.version(), 0);
    }

    #[test]
    fn test_replace_range_rejects_cross_run_span() {
        let mut document = Document::from_text("ab\ncd");

        // 1..6 covers the end of the first run and the start of the second.
        assert!(document.replace_range(1, 6, "x").is_err());
        assert_eq!(document.plain_text(), "ab\ncd");
    }

    #[test]
    fn test_replace_range_rejects_split_character() {
        let mut document = Document::from_text("héllo");

        // 'é' occupies bytes 2..4 of the run starting at 1.
        assert!(document.replace_range(3, 5, "x").is_err());
        assert_eq!(document.plain_text(), "héllo");
    }

    #[test]
    fn test_replace_range_multibyte_aligned() {
        let mut document = Document::from_text("héllo");

        document.replace_range(2, 4, "e").unwrap();
        assert_eq!(document.plain_text(), "hello");
    }

    #[test]
    fn test_version_bumps_only_on_success() {
        let mut document = Document::from_text("one two");

        assert!(document.replace_range(1, 4, "1").is_ok());
        assert!(document.replace_range(200, 201, "x").is_err());
        assert_eq!(document.version(), 1);
    }

    #[test]
    fn test_plain_text_joins_blocks() {
        let document = Document::from_blocks(vec![
            Node::heading("Chapter One"),
            Node::paragraph("It was a dark night."),
        ]);

        assert_eq!(document.plain_text(), "Chapter One\nIt was a dark night.");
    }
}
