use thiserror::Error;
use waterfall_layout::{IndexPath, LayoutError};

/// Errors produced while loading, editing or laying out a [`Collection`](crate::Collection).
#[derive(Debug, Error)]
pub enum Error {
    /// The layout could not be prepared.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A collection document could not be parsed or written.
    #[error("invalid collection document: {0}")]
    Json(#[from] serde_json::Error),
    /// A section index past the end of the collection.
    #[error("section {section} is out of bounds (collection has {count} sections)")]
    SectionOutOfBounds {
        /// The requested section.
        section: usize,
        /// Number of sections in the collection.
        count: usize,
    },
    /// An item index past the end of its section.
    #[error("item {index_path} is out of bounds (section has {count} items)")]
    ItemOutOfBounds {
        /// The requested item.
        index_path: IndexPath,
        /// Number of items in the section.
        count: usize,
    },
}
