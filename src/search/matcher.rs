use regex::Regex;

use super::options::SearchOptions;
use crate::document_model::DocumentSnapshot;
use crate::error::SearchError;

/// A `[from, to)` span in the document's linear coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    pub from: usize,
    pub to: usize,
}

impl MatchRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// A compiled search pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

/// Compile `term` under `options`.
///
/// An empty term short-circuits to `None` without touching the regex engine.
/// In literal mode every metacharacter is escaped first, so the term matches
/// as exact text. Case-insensitive matching uses `(?i)` Unicode case folding,
/// which keeps multi-byte characters atomic.
pub fn compile(term: &str, options: &SearchOptions) -> Result<Option<Pattern>, SearchError> {
    if term.is_empty() {
        return Ok(None);
    }

    let mut source = if options.literal {
        regex::escape(term)
    } else {
        term.to_string()
    };
    if options.whole_word {
        source = format!(r"\b(?:{source})\b");
    }
    if !options.case_sensitive {
        source = format!("(?i){source}");
    }

    match Regex::new(&source) {
        Ok(regex) => Ok(Some(Pattern { regex })),
        Err(e) => Err(SearchError::InvalidPattern(e.to_string())),
    }
}

/// Find every match of `pattern` in the snapshot, in document order.
///
/// Each text run is scanned globally; matches never cross run boundaries.
/// Candidates whose matched text trims to nothing are dropped, so zero-width
/// and whitespace-only matches never reach the result list. Returned ranges
/// are sorted ascending by `from` and non-overlapping.
pub fn scan(snapshot: &DocumentSnapshot, pattern: &Pattern) -> Vec<MatchRange> {
    let mut results = Vec::new();
    for run in snapshot.runs() {
        for mat in pattern.regex.find_iter(&run.text) {
            if mat.as_str().trim().is_empty() {
                continue;
            }
            results.push(MatchRange::new(
                run.start + mat.start(),
                run.start + mat.end(),
            ));
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_model::Document;
    use proptest::prelude::*;

    fn literal() -> SearchOptions {
        SearchOptions::new().case_sensitive(true)
    }

    fn scan_text(content: &str, term: &str, options: &SearchOptions) -> Vec<MatchRange> {
        let document = Document::from_text(content);
        let pattern = compile(term, options).unwrap().unwrap();
        scan(&document.snapshot(), &pattern)
    }

    #[test]
    fn test_literal_scan_counts_occurrences() {
        let results = scan_text("cat cat cat", "cat", &literal());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], MatchRange::new(1, 4));
        assert_eq!(results[1], MatchRange::new(5, 8));
        assert_eq!(results[2], MatchRange::new(9, 12));
    }

    #[test]
    fn test_scan_matches_are_sorted_and_disjoint() {
        let results = scan_text("aaaa", "aa", &literal());

        assert_eq!(results.len(), 2);
        assert!(results[0].to <= results[1].from);
    }

    #[test]
    fn test_case_insensitive_matches_all_variants() {
        let options = SearchOptions::new();
        let results = scan_text("cat Cat CAT", "Cat", &options);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_case_sensitive_matches_exact_variant() {
        let results = scan_text("cat Cat CAT", "Cat", &literal());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0], MatchRange::new(5, 8));
    }

    #[test]
    fn test_literal_mode_escapes_metacharacters() {
        let results = scan_text("a.c abc", "a.c", &literal());
        assert_eq!(results, vec![MatchRange::new(1, 4)]);
    }

    #[test]
    fn test_regex_mode_matches_pattern() {
        let options = literal().literal(false);
        let results = scan_text("cat cot cut", "c[ao]t", &options);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let options = SearchOptions::new().literal(false);
        let err = compile("(unclosed", &options).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPattern(_)));
    }

    #[test]
    fn test_empty_term_short_circuits() {
        assert!(compile("", &SearchOptions::new()).unwrap().is_none());
    }

    #[test]
    fn test_whitespace_only_pattern_finds_nothing() {
        let results = scan_text("a b c", "   ", &literal());
        assert!(results.is_empty());

        let results = scan_text("a  b", " ", &literal());
        assert!(results.is_empty());
    }

    #[test]
    fn test_zero_width_regex_matches_are_dropped() {
        let options = literal().literal(false);
        let results = scan_text("bbb", "a*", &options);
        assert!(results.is_empty());
    }

    #[test]
    fn test_offsets_span_multiple_runs() {
        let results = scan_text("cat\nthe cat", "cat", &literal());

        // Second paragraph's run starts at 6: two block tokens past "cat".
        assert_eq!(results, vec![MatchRange::new(1, 4), MatchRange::new(10, 13)]);
    }

    #[test]
    fn test_match_never_splits_multibyte_character() {
        let results = scan_text("wörter wörter", "ö", &literal());

        assert_eq!(results.len(), 2);
        let document = Document::from_text("wörter wörter");
        let snapshot = document.snapshot();
        for range in results {
            assert_eq!(snapshot.slice(range.from, range.to), Some("ö"));
        }
    }

    #[test]
    fn test_case_folding_handles_non_ascii() {
        let options = SearchOptions::new();
        let results = scan_text("öl Öl", "öl", &options);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_whole_word_requires_boundaries() {
        let options = literal().whole_word(true);
        let results = scan_text("cat catalog concat", "cat", &options);
        assert_eq!(results, vec![MatchRange::new(1, 4)]);
    }

    proptest! {
        #[test]
        fn test_literal_scan_agrees_with_str_search(
            content in "[abc ]{0,40}",
            term in "[abc]{1,3}",
        ) {
            let document = Document::from_text(&content);
            let pattern = compile(&term, &literal()).unwrap().unwrap();
            let results = scan(&document.snapshot(), &pattern);

            let expected: Vec<usize> =
                content.match_indices(&term).map(|(i, _)| i + 1).collect();
            let found: Vec<usize> = results.iter().map(|r| r.from).collect();
            prop_assert_eq!(found, expected);

            let snapshot = document.snapshot();
            for range in &results {
                prop_assert_eq!(snapshot.slice(range.from, range.to), Some(term.as_str()));
            }
        }
    }
}
