/// Search subsystem - Pattern matching and overlay state
///
/// This module turns a search term into a compiled pattern, scans the
/// document snapshot for matches, and derives the highlight decoration set
/// the host renders over them.

pub mod decorations;
pub mod matcher;
pub mod options;
pub mod search_state;

// Re-export public interface
pub use decorations::{Decoration, DecorationSet, HighlightKind};
pub use matcher::{MatchRange, Pattern};
pub use options::SearchOptions;
pub use search_state::{EnginePhase, SearchState};
