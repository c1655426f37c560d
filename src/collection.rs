//! A data-backed [`LayoutHost`] that can be loaded from a JSON document.
//!
//! ```json
//! {
//!   "bounds_width": 375.0,
//!   "content_inset": { "left": 8.0, "right": 8.0 },
//!   "sections": [
//!     {
//!       "column_count": 2,
//!       "inset": { "top": 12.0, "bottom": 12.0 },
//!       "line_spacing": 4.0,
//!       "interitem_spacing": 4.0,
//!       "items": [{ "width": 3.0, "height": 4.0 }]
//!     }
//!   ]
//! }
//! ```
//!
//! Omitted section fields fall back to [`SectionConfig::default`]: two
//! columns, no insets, no spacing.

use serde::{Deserialize, Serialize};
use waterfall_layout::{EdgeInsets, IndexPath, LayoutHost, SectionConfig, Size};

use crate::Error;

/// One section of a [`Collection`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Column count, insets and spacing.
    #[serde(flatten)]
    pub config: SectionConfig,
    /// Intrinsic sizes of the section's items.
    #[serde(default)]
    pub items: Vec<Size>,
}

impl Section {
    /// An empty section with the given geometry.
    #[must_use]
    pub const fn new(config: SectionConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }
}

/// An in-memory collection of sections and item sizes.
///
/// Every mutation changes what a layout would compute; call
/// [`invalidate`](waterfall_layout::CollectionLayout::invalidate) on the
/// layout afterwards, or edit through
/// [`WaterfallLayout::update_host`](waterfall_layout::WaterfallLayout::update_host).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    bounds_width: f32,
    #[serde(default)]
    content_inset: EdgeInsets,
    #[serde(default)]
    sections: Vec<Section>,
}

impl Collection {
    /// An empty collection displayed in bounds `bounds_width` points wide.
    #[must_use]
    pub const fn new(bounds_width: f32) -> Self {
        Self {
            bounds_width,
            content_inset: EdgeInsets::ZERO,
            sections: Vec::new(),
        }
    }

    /// Parses a collection document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the collection as a pretty-printed document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The collection's sections.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sets the width of the visible bounds.
    pub const fn set_bounds_width(&mut self, width: f32) {
        self.bounds_width = width;
    }

    /// Sets the scroll view's content inset.
    pub const fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
    }

    /// Appends an empty section and returns its index.
    pub fn push_section(&mut self, config: SectionConfig) -> usize {
        self.sections.push(Section::new(config));
        self.sections.len() - 1
    }

    /// Appends an item to `section` and returns its index path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionOutOfBounds`] when the section does not exist.
    pub fn push_item(&mut self, section: usize, size: Size) -> Result<IndexPath, Error> {
        let count = self.sections.len();
        let target = self
            .sections
            .get_mut(section)
            .ok_or(Error::SectionOutOfBounds { section, count })?;
        target.items.push(size);
        Ok(IndexPath::new(section, target.items.len() - 1))
    }

    /// Removes an item, shifting later items of the section up by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionOutOfBounds`] or [`Error::ItemOutOfBounds`]
    /// when the item does not exist.
    pub fn remove_item(&mut self, index_path: IndexPath) -> Result<Size, Error> {
        let count = self.sections.len();
        let section = self
            .sections
            .get_mut(index_path.section)
            .ok_or(Error::SectionOutOfBounds {
                section: index_path.section,
                count,
            })?;
        if index_path.item >= section.items.len() {
            return Err(Error::ItemOutOfBounds {
                index_path,
                count: section.items.len(),
            });
        }
        Ok(section.items.remove(index_path.item))
    }

    fn section(&self, section: usize) -> Option<&Section> {
        self.sections.get(section)
    }
}

impl LayoutHost for Collection {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.section(section).map_or(0, |s| s.items.len())
    }

    fn column_count(&self, section: usize) -> usize {
        self.section(section).map_or(1, |s| s.config.column_count)
    }

    fn item_size(&self, index_path: IndexPath) -> Size {
        self.section(index_path.section)
            .and_then(|s| s.items.get(index_path.item))
            .copied()
            .unwrap_or_default()
    }

    fn bounds_width(&self) -> f32 {
        self.bounds_width
    }

    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    fn section_inset(&self, section: usize) -> EdgeInsets {
        self.section(section).map(|s| s.config.inset).unwrap_or_default()
    }

    fn line_spacing(&self, section: usize) -> f32 {
        self.section(section).map_or(0.0, |s| s.config.line_spacing)
    }

    fn interitem_spacing(&self, section: usize) -> f32 {
        self.section(section)
            .map_or(0.0, |s| s.config.interitem_spacing)
    }

    fn section_config(&self, section: usize) -> SectionConfig {
        self.section(section)
            .map_or_else(|| SectionConfig::new(1), |s| s.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waterfall_layout::{CollectionLayout, Rect, WaterfallLayout};

    const GALLERY: &str = r#"{
        "bounds_width": 216.0,
        "content_inset": { "left": 8.0, "right": 8.0 },
        "sections": [
            {
                "column_count": 2,
                "inset": { "top": 10.0, "bottom": 20.0 },
                "interitem_spacing": 4.0,
                "line_spacing": 6.0,
                "items": [
                    { "width": 2.0, "height": 3.0 },
                    { "width": 1.0, "height": 1.0 },
                    { "width": 4.0, "height": 2.0 }
                ]
            },
            { "items": [] },
            {
                "column_count": 1,
                "items": [{ "width": 8.0, "height": 1.0 }]
            }
        ]
    }"#;

    #[test]
    fn test_load_document() {
        let collection = Collection::from_json(GALLERY).unwrap();

        assert_eq!(collection.section_count(), 3);
        assert_eq!(collection.item_count(0), 3);
        assert_eq!(collection.item_count(1), 0);
        assert_eq!(collection.column_count(1), 2);
        assert_eq!(collection.section_inset(0), EdgeInsets::new(10.0, 0.0, 20.0, 0.0));
        assert_eq!(collection.line_spacing(0), 6.0);
        assert_eq!(collection.interitem_spacing(2), 0.0);
    }

    #[test]
    fn test_layout_document() {
        let collection = Collection::from_json(GALLERY).unwrap();
        let mut layout = WaterfallLayout::with_host(&collection);

        let all = layout
            .attributes_in(Rect::from_xywh(0.0, 0.0, 200.0, 1000.0))
            .unwrap();
        let frames: Vec<Rect> = all.iter().map(|a| a.frame()).collect();

        // Content width 200, column width (200 - 4) / 2 = 98.
        assert_eq!(
            frames,
            vec![
                Rect::from_xywh(0.0, 10.0, 98.0, 147.0),
                Rect::from_xywh(102.0, 10.0, 98.0, 98.0),
                Rect::from_xywh(102.0, 114.0, 98.0, 49.0),
                Rect::from_xywh(0.0, 183.0, 200.0, 25.0),
            ]
        );
        assert_eq!(layout.content_size().unwrap(), Size::new(200.0, 208.0));
    }

    #[test]
    fn test_round_trip_document() {
        let collection = Collection::from_json(GALLERY).unwrap();
        let json = collection.to_json().unwrap();

        assert_eq!(Collection::from_json(&json).unwrap(), collection);
    }

    #[test]
    fn test_malformed_document() {
        let error = Collection::from_json(r#"{ "sections": [] }"#).unwrap_err();

        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_edit_through_layout() {
        let mut layout = WaterfallLayout::with_host(Collection::new(100.0));
        let section = layout
            .update_host(|c| c.push_section(SectionConfig::new(2)))
            .unwrap();
        layout
            .update_host(|c| -> Result<IndexPath, Error> {
                c.push_item(section, Size::new(1.0, 1.0))?;
                c.push_item(section, Size::new(1.0, 2.0))?;
                c.push_item(section, Size::new(1.0, 1.0))
            })
            .unwrap()
            .unwrap();

        assert_eq!(layout.content_size().unwrap(), Size::new(100.0, 100.0));

        let removed = layout
            .update_host(|c| c.remove_item(IndexPath::new(0, 1)))
            .unwrap()
            .unwrap();
        assert_eq!(removed, Size::new(1.0, 2.0));
        assert_eq!(layout.content_size().unwrap(), Size::new(100.0, 50.0));

        layout.update_host(|c| c.set_bounds_width(200.0)).unwrap();
        assert_eq!(layout.content_size().unwrap(), Size::new(200.0, 100.0));
    }

    #[test]
    fn test_out_of_bounds_edits() {
        let mut collection = Collection::new(100.0);

        assert!(matches!(
            collection.push_item(0, Size::new(1.0, 1.0)),
            Err(Error::SectionOutOfBounds { section: 0, count: 0 })
        ));

        collection.push_section(SectionConfig::default());
        assert!(matches!(
            collection.remove_item(IndexPath::new(0, 0)),
            Err(Error::ItemOutOfBounds { count: 0, .. })
        ));
    }

    #[test]
    fn test_missing_items_answer_zero() {
        let collection = Collection::new(100.0);

        assert_eq!(collection.item_count(4), 0);
        assert_eq!(collection.item_size(IndexPath::new(4, 2)), Size::zero());
    }
}
