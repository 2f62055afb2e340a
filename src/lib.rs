//! In-document search and replace for hierarchical prose documents.
//!
//! The engine scans a tree of text-bearing nodes for a (optionally
//! case-sensitive, optionally literal) pattern, maintains a highlight overlay
//! that stays consistent with live edits, navigates cyclically between
//! matches, and performs single or bulk replacement without corrupting the
//! positions of matches still pending. It runs synchronously on the host
//! editor's thread and touches the document only through the host's own
//! mutation primitive.

pub mod controller;
pub mod document_model;
pub mod error;
pub mod host;
pub mod search;

pub use controller::{ReplaceOutcome, SearchEngine, SearchSummary};
pub use document_model::{BlockKind, Document, DocumentSnapshot, Node, TextRun};
pub use error::{EditError, SearchError};
pub use host::{DocumentHost, EditorHost, TextEdit};
pub use search::{
    Decoration, DecorationSet, EnginePhase, HighlightKind, MatchRange, SearchOptions, SearchState,
};
