//! Per-section column tracking.

use tracing::warn;

use crate::{Point, Rect, SectionConfig, Size};

/// Column geometry and running heights for the section being laid out.
///
/// Only the columns an item can land in are tracked: a section with fewer
/// items than columns never reaches the trailing ones. `y_offsets` only grow
/// as items are stacked.
#[derive(Debug, Clone)]
pub(crate) struct Columns {
    width: f32,
    left: f32,
    stride: f32,
    line_spacing: f32,
    y_offsets: Vec<f32>,
}

#[allow(clippy::cast_precision_loss)]
impl Columns {
    /// Starts a section of `item_count` items whose columns all begin
    /// `config.inset.top` below `top`.
    pub(crate) fn new(
        section: usize,
        config: &SectionConfig,
        item_count: usize,
        content_width: f32,
        top: f32,
    ) -> Self {
        let count = if config.column_count == 0 {
            warn!(section, "section reports zero columns, using a single column");
            1
        } else {
            config.column_count
        };

        let total_spacing = config.interitem_spacing * (count - 1) as f32;
        let available = content_width - config.inset.horizontal() - total_spacing;
        let raw_width = available / count as f32;

        let width = if raw_width.is_finite() && raw_width > 0.0 {
            raw_width
        } else {
            warn!(
                section,
                column_width = raw_width,
                content_width,
                "no room for columns, placing section items with zero size"
            );
            0.0
        };

        let reachable = count.min(item_count).max(1);

        Self {
            width,
            left: config.inset.left,
            stride: width + config.interitem_spacing,
            line_spacing: config.line_spacing,
            y_offsets: vec![top + config.inset.top; reachable],
        }
    }

    fn x_offset(&self, column: usize) -> f32 {
        self.left + column as f32 * self.stride
    }

    /// Width shared by every column of the section.
    pub(crate) const fn width(&self) -> f32 {
        self.width
    }

    /// Index of the shortest column. Ties go to the lowest index.
    pub(crate) fn shortest(&self) -> usize {
        let mut shortest = 0;
        for (column, &offset) in self.y_offsets.iter().enumerate().skip(1) {
            if offset < self.y_offsets[shortest] {
                shortest = column;
            }
        }
        shortest
    }

    /// Stacks an item of `height` onto the shortest column and returns its frame.
    pub(crate) fn place(&mut self, height: f32) -> Rect {
        let column = self.shortest();
        let frame = Rect::new(
            Point::new(self.x_offset(column), self.y_offsets[column]),
            Size::new(self.width, height),
        );
        self.y_offsets[column] += height + self.line_spacing;
        frame
    }
}
