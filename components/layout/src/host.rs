//! The query surface a collection exposes to its layout.
//!
//! The layout never owns the collection's data. Every pass reads the current
//! section structure and geometry through [`LayoutHost`], so the answers must
//! stay stable between an invalidation and the pass that follows it.

use std::{rc::Rc, sync::Arc};

use crate::{EdgeInsets, IndexPath, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Synchronous queries answered by the collection that embeds a layout.
///
/// Only the structural queries are required. Section geometry defaults to no
/// insets and no spacing, and the content inset defaults to zero.
pub trait LayoutHost {
    /// Number of sections in the collection.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    fn item_count(&self, section: usize) -> usize;

    /// Number of columns `section` is split into.
    ///
    /// A value of zero is treated as a single column.
    fn column_count(&self, section: usize) -> usize;

    /// Intrinsic size of the item. Only its aspect ratio is used.
    fn item_size(&self, index_path: IndexPath) -> Size;

    /// Width of the visible bounds of the scroll view.
    fn bounds_width(&self) -> f32;

    /// Content inset of the scroll view. Only `left` and `right` affect the
    /// layout.
    fn content_inset(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    /// Insets around the items of `section`.
    fn section_inset(&self, _section: usize) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    /// Vertical gap between items stacked in the same column.
    fn line_spacing(&self, _section: usize) -> f32 {
        0.0
    }

    /// Horizontal gap between adjacent columns.
    fn interitem_spacing(&self, _section: usize) -> f32 {
        0.0
    }

    /// Collects the per-section geometry into one value.
    fn section_config(&self, section: usize) -> SectionConfig {
        SectionConfig {
            column_count: self.column_count(section),
            inset: self.section_inset(section),
            line_spacing: self.line_spacing(section),
            interitem_spacing: self.interitem_spacing(section),
        }
    }
}

macro_rules! forward_host {
    ($($ty:ty),*) => {
        $(
            impl<T: LayoutHost + ?Sized> LayoutHost for $ty {
                fn section_count(&self) -> usize {
                    (**self).section_count()
                }

                fn item_count(&self, section: usize) -> usize {
                    (**self).item_count(section)
                }

                fn column_count(&self, section: usize) -> usize {
                    (**self).column_count(section)
                }

                fn item_size(&self, index_path: IndexPath) -> Size {
                    (**self).item_size(index_path)
                }

                fn bounds_width(&self) -> f32 {
                    (**self).bounds_width()
                }

                fn content_inset(&self) -> EdgeInsets {
                    (**self).content_inset()
                }

                fn section_inset(&self, section: usize) -> EdgeInsets {
                    (**self).section_inset(section)
                }

                fn line_spacing(&self, section: usize) -> f32 {
                    (**self).line_spacing(section)
                }

                fn interitem_spacing(&self, section: usize) -> f32 {
                    (**self).interitem_spacing(section)
                }

                fn section_config(&self, section: usize) -> SectionConfig {
                    (**self).section_config(section)
                }
            }
        )*
    };
}

forward_host!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// Geometry of one section.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SectionConfig {
    /// Number of columns. Zero is treated as one.
    pub column_count: usize,
    /// Insets around the section's items.
    pub inset: EdgeInsets,
    /// Vertical gap between items in a column.
    pub line_spacing: f32,
    /// Horizontal gap between columns.
    pub interitem_spacing: f32,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SectionConfig {
    /// A section with `column_count` columns, no insets and no spacing.
    #[must_use]
    pub const fn new(column_count: usize) -> Self {
        Self {
            column_count,
            inset: EdgeInsets::ZERO,
            line_spacing: 0.0,
            interitem_spacing: 0.0,
        }
    }

    /// Sets the section insets.
    #[must_use]
    pub const fn inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = inset;
        self
    }

    /// Sets the vertical gap between items in a column.
    #[must_use]
    pub const fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Sets the horizontal gap between columns.
    #[must_use]
    pub const fn interitem_spacing(mut self, spacing: f32) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    /// Sets both the line and interitem spacing.
    #[must_use]
    pub const fn spacing(self, spacing: f32) -> Self {
        self.line_spacing(spacing).interitem_spacing(spacing)
    }
}
