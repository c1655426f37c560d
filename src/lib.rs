#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod collection;
mod error;
pub mod logging;

pub use collection::{Collection, Section};
pub use error::Error;

pub use waterfall_core as geometry;
pub use waterfall_layout as layout;

#[doc(inline)]
pub use waterfall_layout::{
    CollectionLayout, EdgeInsets, IndexPath, LayoutError, LayoutHost, PlacedAttribute, Point,
    Rect, SectionConfig, Size, WaterfallLayout,
};

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! ```rust
    //! use waterfall::prelude::*;
    //!
    //! let mut collection = Collection::new(320.0);
    //! let section = collection.push_section(SectionConfig::new(2).spacing(8.0));
    //! collection.push_item(section, Size::new(4.0, 3.0))?;
    //!
    //! let mut layout = WaterfallLayout::with_host(&collection);
    //! assert_eq!(layout.attributes_in(Rect::from_xywh(0.0, 0.0, 320.0, 480.0))?.len(), 1);
    //! # Ok::<(), waterfall::Error>(())
    //! ```
    pub use super::{
        Collection, CollectionLayout, EdgeInsets, Error, IndexPath, LayoutHost, PlacedAttribute,
        Rect, Section, SectionConfig, Size, WaterfallLayout,
    };
}
