use super::node::Node;

/// A contiguous run of text with its document-absolute start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub start: usize,
    pub text: String,
}

impl TextRun {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Whether `[from, to)` falls entirely inside this run.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        from >= self.start && to <= self.end()
    }
}

/// Read-only flattened view of a document at a single point in time.
///
/// Runs appear in depth-first traversal order with strictly increasing start
/// positions. Positions are byte offsets in a single linear coordinate space:
/// entering a block costs one position, leaving it costs one, and text
/// contributes its byte length. Byte offsets produced against a run are
/// always `char`-aligned, so a multi-byte character is never split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub version: u64,
    runs: Vec<TextRun>,
}

impl DocumentSnapshot {
    pub fn capture(version: u64, nodes: &[Node]) -> Self {
        let mut runs = Vec::new();
        let mut position = 0;
        collect_runs(nodes, &mut position, &mut runs);
        Self { version, runs }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Total length of text across all runs.
    pub fn text_len(&self) -> usize {
        self.runs.iter().map(|run| run.text.len()).sum()
    }

    /// The text at `[from, to)`, if the range lies inside a single run.
    pub fn slice(&self, from: usize, to: usize) -> Option<&str> {
        let run = self.runs.iter().find(|run| run.contains(from, to))?;
        run.text.get(from - run.start..to - run.start)
    }
}

fn collect_runs(nodes: &[Node], position: &mut usize, runs: &mut Vec<TextRun>) {
    for node in nodes {
        match node {
            Node::Block { children, .. } => {
                *position += 1;
                collect_runs(children, position, runs);
                *position += 1;
            }
            Node::Text(text) => {
                runs.push(TextRun {
                    start: *position,
                    text: text.clone(),
                });
                *position += text.len();
            }
        }
    }
}
