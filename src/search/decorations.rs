use super::matcher::MatchRange;
use super::options::SearchOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Active,
    Inactive,
}

/// A renderable, non-owning annotation over one match range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub kind: HighlightKind,
}

/// The highlight overlay: one decoration per match, sorted, non-overlapping,
/// with exactly one tagged `Active` when non-empty. Derived wholesale from
/// `(document, search state)` and never mutated in place; the engine shares
/// it behind an `Arc` so an unchanged recompute hands back the identical
/// allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    pub fn build(results: &[MatchRange], selected: usize) -> Self {
        let decorations = results
            .iter()
            .enumerate()
            .map(|(index, range)| Decoration {
                from: range.from,
                to: range.to,
                kind: if index == selected {
                    HighlightKind::Active
                } else {
                    HighlightKind::Inactive
                },
            })
            .collect();
        Self { decorations }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations.iter()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn active(&self) -> Option<&Decoration> {
        self.decorations
            .iter()
            .find(|d| d.kind == HighlightKind::Active)
    }
}

/// Identity of one scan: recomputing with an equal key may reuse the cached
/// match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanKey {
    pub doc_version: u64,
    pub term: String,
    pub options: SearchOptions,
}

/// Identity of one rendered overlay: scan identity plus the active index.
/// Equal keys return the previous decoration set unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderKey {
    pub scan: ScanKey,
    pub selected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tags_selected_as_active() {
        let results = vec![
            MatchRange::new(0, 3),
            MatchRange::new(5, 8),
            MatchRange::new(10, 13),
        ];
        let set = DecorationSet::build(&results, 1);

        assert_eq!(set.len(), 3);
        let active = set.active().unwrap();
        assert_eq!((active.from, active.to), (5, 8));
        assert_eq!(
            set.iter().filter(|d| d.kind == HighlightKind::Active).count(),
            1
        );
    }

    #[test]
    fn test_build_empty_results() {
        let set = DecorationSet::build(&[], 0);
        assert!(set.is_empty());
        assert!(set.active().is_none());
    }

    #[test]
    fn test_decorations_preserve_order() {
        let results = vec![MatchRange::new(2, 4), MatchRange::new(6, 9)];
        let set = DecorationSet::build(&results, 0);

        let spans: Vec<(usize, usize)> = set.iter().map(|d| (d.from, d.to)).collect();
        assert_eq!(spans, vec![(2, 4), (6, 9)]);
    }
}
