use super::matcher::{MatchRange, Pattern};
use super::options::SearchOptions;

/// Where the engine sits in its lifecycle: `Idle` with an empty term,
/// `Searching` once a term is set (even when it matches nothing). Replace
/// operations run synchronously inside `Searching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Idle,
    Searching,
}

/// The engine's exclusively-owned mutable state. One instance per editor;
/// nothing else writes to it.
///
/// Invariant: `selected_result` always lies in `[0, max(1, results.len()))`.
/// With no results it is pinned at 0 and has no referent.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub search_term: String,
    pub replace_term: String,
    pub options: SearchOptions,
    pub pattern: Option<Pattern>,
    pub results: Vec<MatchRange>,
    pub selected_result: usize,
}

impl SearchState {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            search_term: String::new(),
            replace_term: String::new(),
            options,
            pattern: None,
            results: Vec::new(),
            selected_result: 0,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        if self.search_term.is_empty() {
            EnginePhase::Idle
        } else {
            EnginePhase::Searching
        }
    }

    /// The currently selected match, if any result exists.
    pub fn selected_range(&self) -> Option<MatchRange> {
        self.results.get(self.selected_result).copied()
    }

    /// Pull `selected_result` back into range after the result list changed.
    pub fn clamp_selection(&mut self) {
        if self.results.is_empty() {
            self.selected_result = 0;
        } else if self.selected_result >= self.results.len() {
            self.selected_result = self.results.len() - 1;
        }
    }

    /// Drop everything back to `Idle`. Used when the host detaches.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.replace_term.clear();
        self.pattern = None;
        self.results.clear();
        self.selected_result = 0;
    }
}
