use log::{debug, warn};

use super::engine::SearchEngine;
use crate::host::{EditorHost, TextEdit};

/// How a replacement operation went: how many edits the host applied and how
/// many it rejected as stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub applied: usize,
    pub rejected: usize,
}

impl SearchEngine {
    /// Replace the currently selected match with the replace term.
    ///
    /// No-op when there are no results. The recompute afterwards always
    /// rescans: the mutation may have changed text lengths, so every cached
    /// offset downstream of the edit is suspect. A rejected edit also
    /// rescans, since its results were stale to begin with.
    pub fn replace<H: EditorHost>(&mut self, host: &mut H) -> ReplaceOutcome {
        let Some(range) = self.state.selected_range() else {
            return ReplaceOutcome::default();
        };

        let replacement = self.state.replace_term.clone();
        let outcome = match host.replace_range(range.from, range.to, &replacement) {
            Ok(()) => ReplaceOutcome {
                applied: 1,
                rejected: 0,
            },
            Err(err) => {
                warn!("replace at {}..{} rejected: {err}", range.from, range.to);
                ReplaceOutcome {
                    applied: 0,
                    rejected: 1,
                }
            }
        };

        self.recompute(host, true);
        outcome
    }

    /// Replace every match with the replace term.
    ///
    /// Edits are issued from the highest-offset match down to the lowest.
    /// An edit strictly after a pending span cannot shift that span, so
    /// descending order keeps every remaining position valid even when the
    /// replacement changes the text length. A rejected edit is skipped and
    /// logged; the remaining lower-offset replacements are unaffected by the
    /// failed span and still go through.
    pub fn replace_all<H: EditorHost>(&mut self, host: &mut H) -> ReplaceOutcome {
        if self.state.results.is_empty() {
            return ReplaceOutcome::default();
        }

        let replacement = &self.state.replace_term;
        let edits: Vec<TextEdit> = self
            .state
            .results
            .iter()
            .rev()
            .map(|range| TextEdit {
                from: range.from,
                to: range.to,
                text: replacement.clone(),
            })
            .collect();

        let mut outcome = ReplaceOutcome::default();
        for (edit, result) in edits.iter().zip(host.apply_edits(&edits)) {
            match result {
                Ok(()) => outcome.applied += 1,
                Err(err) => {
                    warn!("replace at {}..{} rejected: {err}", edit.from, edit.to);
                    outcome.rejected += 1;
                }
            }
        }
        debug!(
            "replace_all: {} applied, {} rejected",
            outcome.applied, outcome.rejected
        );

        self.recompute(host, true);
        outcome
    }
}
