use std::sync::Arc;

use crate::document_model::{Document, DocumentSnapshot};
use crate::error::EditError;
use crate::search::DecorationSet;

/// One position-based edit, resolved against the document state in effect
/// when it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub from: usize,
    pub to: usize,
    pub text: String,
}

/// The collaborator interface the host editor provides to the engine.
///
/// The engine never mutates the document directly; every edit goes through
/// `replace_range`, which keeps the host's undo/redo and consistency
/// guarantees intact. The host may reject an edit whose range no longer
/// addresses live text.
pub trait EditorHost {
    /// Read-only snapshot of the current document.
    fn snapshot(&self) -> DocumentSnapshot;

    /// Overwrite the text at `[from, to)` with `text`.
    fn replace_range(&mut self, from: usize, to: usize, text: &str) -> Result<(), EditError>;

    /// Move the cursor/selection to `[from, to)` and scroll it into view.
    fn move_selection_into_view(&mut self, from: usize, to: usize);

    /// Re-render the highlight overlay.
    fn rerender(&mut self, decorations: Arc<DecorationSet>);

    /// Apply a batch of edits, reporting one outcome per edit.
    ///
    /// The default applies them sequentially in the given order; each edit's
    /// positions must be resolved against the document as it stands before
    /// that edit. Hosts with an atomic multi-edit transaction can override
    /// this with a single combined mutation.
    fn apply_edits(&mut self, edits: &[TextEdit]) -> Vec<Result<(), EditError>> {
        edits
            .iter()
            .map(|edit| self.replace_range(edit.from, edit.to, &edit.text))
            .collect()
    }
}

/// Minimal host over an owned [`Document`]. Embedders with a real editor
/// implement [`EditorHost`] themselves; this one backs the test suite and
/// headless use.
#[derive(Debug, Clone, Default)]
pub struct DocumentHost {
    pub document: Document,
    pub selection: Option<(usize, usize)>,
    pub decorations: Arc<DecorationSet>,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: None,
            decorations: Arc::new(DecorationSet::default()),
        }
    }
}

impl EditorHost for DocumentHost {
    fn snapshot(&self) -> DocumentSnapshot {
        self.document.snapshot()
    }

    fn replace_range(&mut self, from: usize, to: usize, text: &str) -> Result<(), EditError> {
        self.document.replace_range(from, to, text)
    }

    fn move_selection_into_view(&mut self, from: usize, to: usize) {
        self.selection = Some((from, to));
    }

    fn rerender(&mut self, decorations: Arc<DecorationSet>) {
        self.decorations = decorations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_host_applies_edit() {
        let mut host = DocumentHost::new(Document::from_text("old text"));

        host.replace_range(1, 4, "new").unwrap();
        assert_eq!(host.document.plain_text(), "new text");
    }

    #[test]
    fn test_document_host_records_selection() {
        let mut host = DocumentHost::new(Document::from_text("text"));

        host.move_selection_into_view(2, 5);
        assert_eq!(host.selection, Some((2, 5)));
    }

    #[test]
    fn test_apply_edits_reports_per_edit_outcomes() {
        let mut host = DocumentHost::new(Document::from_text("aa bb"));

        let edits = vec![
            TextEdit {
                from: 4,
                to: 6,
                text: "yy".to_string(),
            },
            TextEdit {
                from: 100,
                to: 102,
                text: "zz".to_string(),
            },
            TextEdit {
                from: 1,
                to: 3,
                text: "xx".to_string(),
            },
        ];
        let outcomes = host.apply_edits(&edits);

        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_err());
        assert!(outcomes[2].is_ok());
        assert_eq!(host.document.plain_text(), "xx yy");
    }
}
