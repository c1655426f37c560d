//! Waterfall (masonry) layout for sectioned collections.
//!
//! This crate turns a description of a collection, supplied by a
//! [`LayoutHost`], into one frame per item. It contains:
//!
//! - the [`LayoutHost`] trait the embedding UI implements to answer section,
//!   item and geometry queries,
//! - the [`CollectionLayout`] trait through which the host consumes geometry,
//! - [`WaterfallLayout`], which places every item in the currently shortest
//!   column of its section and caches the result until invalidated.
//!
//! # Example
//!
//! ```rust
//! use waterfall_layout::{CollectionLayout, LayoutHost, Rect, Size, IndexPath, WaterfallLayout};
//!
//! struct Photos;
//!
//! impl LayoutHost for Photos {
//!     fn section_count(&self) -> usize { 1 }
//!     fn item_count(&self, _section: usize) -> usize { 3 }
//!     fn column_count(&self, _section: usize) -> usize { 2 }
//!     fn item_size(&self, _index_path: IndexPath) -> Size { Size::new(1.0, 1.0) }
//!     fn bounds_width(&self) -> f32 { 100.0 }
//! }
//!
//! let mut layout = WaterfallLayout::with_host(Photos);
//! let visible = layout.attributes_in(Rect::from_xywh(0.0, 0.0, 10.0, 10.0))?;
//! assert_eq!(visible.len(), 1);
//! assert_eq!(layout.content_size()?, Size::new(100.0, 100.0));
//! # Ok::<(), waterfall_layout::LayoutError>(())
//! ```

pub use waterfall_core::layout::*;

mod attributes;
pub use attributes::PlacedAttribute;

mod collection;
pub use collection::CollectionLayout;

mod column;

pub mod error;
pub use error::LayoutError;

pub mod host;
pub use host::{LayoutHost, SectionConfig};

pub mod waterfall;
pub use waterfall::WaterfallLayout;
