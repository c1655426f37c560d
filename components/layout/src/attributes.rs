use crate::{IndexPath, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The frame assigned to one item by a layout pass.
///
/// Attributes are created once per item and never modified afterwards; a new
/// pass produces new attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedAttribute {
    index_path: IndexPath,
    frame: Rect,
}

impl PlacedAttribute {
    /// Creates the attribute for the item at `index_path`.
    #[must_use]
    pub const fn new(index_path: IndexPath, frame: Rect) -> Self {
        Self { index_path, frame }
    }

    /// The item this attribute belongs to.
    #[must_use]
    pub const fn index_path(&self) -> IndexPath {
        self.index_path
    }

    /// Section of the item.
    #[must_use]
    pub const fn section(&self) -> usize {
        self.index_path.section
    }

    /// Position of the item within its section.
    #[must_use]
    pub const fn item(&self) -> usize {
        self.index_path.item
    }

    /// The item's frame in content coordinates.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }
}
