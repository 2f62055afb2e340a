use std::sync::Arc;

use log::debug;

use crate::error::SearchError;
use crate::host::EditorHost;
use crate::search::decorations::{RenderKey, ScanKey};
use crate::search::{matcher, DecorationSet, EnginePhase, SearchOptions, SearchState};

/// What a query-changing call hands back to the UI: the overlay to render
/// and how many matches it covers.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub decorations: Arc<DecorationSet>,
    pub result_count: usize,
}

/// The in-document search-and-replace engine.
///
/// One instance per editor; the engine owns the search/replace terms, the
/// match list, the selected index, and the decoration cache, and talks to
/// its host only through [`EditorHost`]. Recomputes are memoized: if the
/// document version, query, and selected index are all unchanged, the
/// previous `Arc<DecorationSet>` is returned as-is so the host can skip the
/// re-render.
pub struct SearchEngine {
    pub(crate) state: SearchState,
    pub(crate) decorations: Arc<DecorationSet>,
    pub(crate) render_key: Option<RenderKey>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            state: SearchState::new(options),
            decorations: Arc::new(DecorationSet::default()),
            render_key: None,
        }
    }

    /// Set the search term. On an invalid non-literal pattern the whole
    /// search state is left untouched (stale results stay highlighted) and
    /// the error is returned as a validation signal.
    pub fn set_search_term<H: EditorHost>(
        &mut self,
        host: &mut H,
        term: &str,
    ) -> Result<SearchSummary, SearchError> {
        self.apply_query(host, Some(term.to_string()), None)
    }

    pub fn set_replace_term<H: EditorHost>(&mut self, host: &mut H, term: &str) -> SearchSummary {
        self.state.replace_term = term.to_string();
        self.recompute(host, false);
        self.summary()
    }

    pub fn set_case_sensitive<H: EditorHost>(
        &mut self,
        host: &mut H,
        value: bool,
    ) -> Result<SearchSummary, SearchError> {
        let options = self.state.options.case_sensitive(value);
        self.apply_query(host, None, Some(options))
    }

    pub fn set_literal<H: EditorHost>(
        &mut self,
        host: &mut H,
        value: bool,
    ) -> Result<SearchSummary, SearchError> {
        let options = self.state.options.literal(value);
        self.apply_query(host, None, Some(options))
    }

    pub fn set_whole_word<H: EditorHost>(
        &mut self,
        host: &mut H,
        value: bool,
    ) -> Result<SearchSummary, SearchError> {
        let options = self.state.options.whole_word(value);
        self.apply_query(host, None, Some(options))
    }

    /// Host notification hook: call after every document mutation. The
    /// recompute is memoized, so an unrelated notification is cheap.
    pub fn document_changed<H: EditorHost>(&mut self, host: &mut H) -> SearchSummary {
        self.recompute(host, false);
        self.summary()
    }

    /// Advance the selection to the next match, wrapping at the end.
    /// No-op when there are no results.
    pub fn select_next_result<H: EditorHost>(&mut self, host: &mut H) {
        let count = self.state.results.len();
        if count == 0 {
            return;
        }
        self.state.selected_result = (self.state.selected_result + 1) % count;
        self.focus_selected(host);
    }

    /// Move the selection to the previous match, wrapping at the start.
    /// No-op when there are no results.
    pub fn select_previous_result<H: EditorHost>(&mut self, host: &mut H) {
        let count = self.state.results.len();
        if count == 0 {
            return;
        }
        self.state.selected_result = (self.state.selected_result + count - 1) % count;
        self.focus_selected(host);
    }

    /// Drop all engine-owned state. Called when the host detaches.
    pub fn reset(&mut self) {
        self.state.clear();
        self.decorations = Arc::new(DecorationSet::default());
        self.render_key = None;
    }

    pub fn result_count(&self) -> usize {
        self.state.results.len()
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_result
    }

    pub fn decorations(&self) -> Arc<DecorationSet> {
        Arc::clone(&self.decorations)
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    pub fn replace_term(&self) -> &str {
        &self.state.replace_term
    }

    pub fn options(&self) -> SearchOptions {
        self.state.options
    }

    pub fn phase(&self) -> EnginePhase {
        self.state.phase()
    }

    fn apply_query<H: EditorHost>(
        &mut self,
        host: &mut H,
        term: Option<String>,
        options: Option<SearchOptions>,
    ) -> Result<SearchSummary, SearchError> {
        let next_term = term.unwrap_or_else(|| self.state.search_term.clone());
        let next_options = options.unwrap_or(self.state.options);

        if next_term != self.state.search_term || next_options != self.state.options {
            // Compile before committing anything, so a malformed pattern
            // leaves the previous state (and its results) intact.
            let pattern = matcher::compile(&next_term, &next_options)?;
            self.state.search_term = next_term;
            self.state.options = next_options;
            self.state.pattern = pattern;
        }

        self.recompute(host, false);
        Ok(self.summary())
    }

    /// Bring results and overlay up to date with the host's document.
    ///
    /// `force` bypasses the memo and rescans unconditionally; used after
    /// mutations and rejected edits, where cached offsets must not survive.
    pub(crate) fn recompute<H: EditorHost>(&mut self, host: &mut H, force: bool) {
        let snapshot = host.snapshot();
        let scan_key = ScanKey {
            doc_version: snapshot.version,
            term: self.state.search_term.clone(),
            options: self.state.options,
        };

        let scan_is_current =
            !force && self.render_key.as_ref().is_some_and(|key| key.scan == scan_key);
        if !scan_is_current {
            self.state.results = match &self.state.pattern {
                Some(pattern) => matcher::scan(&snapshot, pattern),
                None => Vec::new(),
            };
            self.state.clamp_selection();
            debug!(
                "scan v{}: {} match(es) for {:?}",
                snapshot.version,
                self.state.results.len(),
                self.state.search_term
            );
        }

        let render_key = RenderKey {
            scan: scan_key,
            selected: self.state.selected_result,
        };
        if !force && self.render_key.as_ref() == Some(&render_key) {
            return;
        }

        self.decorations = Arc::new(DecorationSet::build(
            &self.state.results,
            self.state.selected_result,
        ));
        self.render_key = Some(render_key);
        host.rerender(Arc::clone(&self.decorations));
    }

    fn focus_selected<H: EditorHost>(&mut self, host: &mut H) {
        if let Some(range) = self.state.selected_range() {
            host.move_selection_into_view(range.from, range.to);
        }
        self.recompute(host, false);
    }

    pub(crate) fn summary(&self) -> SearchSummary {
        SearchSummary {
            decorations: Arc::clone(&self.decorations),
            result_count: self.state.results.len(),
        }
    }
}
