/// Document model subsystem - The document tree the engine searches
///
/// This module contains the hierarchical document representation consumed by
/// the search engine: block nodes carrying text runs, the flattened snapshot
/// with document-absolute positions, and the position-range replacement
/// primitive.

pub mod document;
pub mod node;
pub mod snapshot;

// Re-export main types for convenience
pub use document::Document;
pub use node::{BlockKind, Node};
pub use snapshot::{DocumentSnapshot, TextRun};
