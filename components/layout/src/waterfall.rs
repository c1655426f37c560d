//! The waterfall layout engine.
//!
//! Each section is split into equal-width columns. Items are visited in
//! order and stacked onto whichever column is currently shortest, with the
//! item's height scaled from its intrinsic aspect ratio to the column width.
//! Every section starts below all content placed before it.

use tracing::{debug, error, trace, warn};

use crate::{
    CollectionLayout, IndexPath, LayoutError, LayoutHost, PlacedAttribute, Rect, Size,
    column::Columns,
};

/// Result of one complete layout pass.
#[derive(Debug, Clone, Default)]
struct LayoutPass {
    attributes: Vec<PlacedAttribute>,
    /// Index of each section's first attribute.
    section_starts: Vec<usize>,
    content_width: f32,
    content_height: f32,
}

impl LayoutPass {
    fn attribute(&self, index_path: IndexPath) -> Option<PlacedAttribute> {
        let start = *self.section_starts.get(index_path.section)?;
        let end = self
            .section_starts
            .get(index_path.section + 1)
            .copied()
            .unwrap_or(self.attributes.len());
        let index = start.checked_add(index_path.item)?;
        (index < end).then(|| self.attributes[index])
    }
}

/// Masonry layout that places each item in the shortest column of its section.
///
/// The layout borrows or shares its host rather than owning the collection:
/// use `WaterfallLayout<&MyHost>` for a plain borrow, or an `Rc`/`Arc` handle
/// when the host outlives several layouts.
///
/// Results are cached until [`invalidate`](CollectionLayout::invalidate) is
/// called or the host's content width changes.
#[derive(Debug)]
pub struct WaterfallLayout<H> {
    host: Option<H>,
    pass: Option<LayoutPass>,
    passes: u64,
}

impl<H> Default for WaterfallLayout<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> WaterfallLayout<H> {
    /// Creates a layout with no host attached.
    ///
    /// Every query fails with [`LayoutError::HostMissing`] until
    /// [`attach`](Self::attach) is called.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            host: None,
            pass: None,
            passes: 0,
        }
    }

    /// Creates a layout bound to `host`.
    #[must_use]
    pub const fn with_host(host: H) -> Self {
        Self {
            host: Some(host),
            pass: None,
            passes: 0,
        }
    }

    /// Attaches `host`, replacing any previous one, and invalidates the layout.
    pub fn attach(&mut self, host: H) {
        self.host = Some(host);
        self.pass = None;
    }

    /// Detaches and returns the current host, invalidating the layout.
    pub fn detach(&mut self) -> Option<H> {
        self.pass = None;
        self.host.take()
    }

    /// The attached host, if any.
    #[must_use]
    pub const fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Mutates the attached host and invalidates the layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::HostMissing`] when no host is attached.
    pub fn update_host<R>(&mut self, update: impl FnOnce(&mut H) -> R) -> Result<R, LayoutError> {
        let host = self.host.as_mut().ok_or(LayoutError::HostMissing)?;
        let result = update(host);
        self.pass = None;
        Ok(result)
    }

    /// Whether a layout pass is cached.
    #[must_use]
    pub const fn is_prepared(&self) -> bool {
        self.pass.is_some()
    }

    /// Number of layout passes computed over the layout's lifetime.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Attributes of the cached pass in placement order.
    ///
    /// Empty when no pass is cached.
    #[must_use]
    pub fn attributes(&self) -> &[PlacedAttribute] {
        self.pass
            .as_ref()
            .map(|pass| pass.attributes.as_slice())
            .unwrap_or_default()
    }

    /// Content height of the cached pass, or zero when none is cached.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.pass.as_ref().map_or(0.0, |pass| pass.content_height)
    }
}

impl<H: LayoutHost> WaterfallLayout<H> {
    /// Width available to sections: the host's bounds minus its horizontal
    /// content inset. Zero when no host is attached.
    ///
    /// Always read from the host, never from the cache.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.host.as_ref().map_or(0.0, content_width)
    }

    /// Whether a cached pass was computed for a content width other than
    /// `width`.
    ///
    /// Widths are compared bit for bit, so a host stuck at `NaN` keeps its
    /// cached pass.
    #[must_use]
    pub fn should_invalidate_for_width(&self, width: f32) -> bool {
        self.pass
            .as_ref()
            .is_some_and(|pass| pass.content_width.to_bits() != width.to_bits())
    }
}

impl<H: LayoutHost> CollectionLayout for WaterfallLayout<H> {
    fn prepare(&mut self) -> Result<(), LayoutError> {
        let Some(host) = self.host.as_ref() else {
            error!("waterfall layout queried without a layout host");
            return Err(LayoutError::HostMissing);
        };

        let width = content_width(host);
        if self.pass.is_some() {
            if !self.should_invalidate_for_width(width) {
                return Ok(());
            }
            debug!(content_width = width, "content width changed, recomputing layout");
        }

        let pass = compute_pass(host, width);
        debug!(
            sections = pass.section_starts.len(),
            items = pass.attributes.len(),
            content_width = pass.content_width,
            content_height = pass.content_height,
            "waterfall layout pass complete"
        );
        self.pass = Some(pass);
        self.passes += 1;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.pass = None;
    }

    fn content_size(&mut self) -> Result<Size, LayoutError> {
        self.prepare()?;
        Ok(Size::new(self.content_width(), self.content_height()))
    }

    fn attributes_in(&mut self, rect: Rect) -> Result<Vec<PlacedAttribute>, LayoutError> {
        self.prepare()?;
        Ok(self
            .attributes()
            .iter()
            .filter(|attribute| attribute.frame().intersects(&rect))
            .copied()
            .collect())
    }

    fn attributes_for_item(
        &mut self,
        index_path: IndexPath,
    ) -> Result<Option<PlacedAttribute>, LayoutError> {
        self.prepare()?;
        Ok(self
            .pass
            .as_ref()
            .and_then(|pass| pass.attribute(index_path)))
    }
}

fn content_width<H: LayoutHost>(host: &H) -> f32 {
    host.bounds_width() - host.content_inset().horizontal()
}

fn compute_pass(host: &impl LayoutHost, content_width: f32) -> LayoutPass {
    let section_count = host.section_count();
    let mut pass = LayoutPass {
        attributes: Vec::new(),
        section_starts: Vec::with_capacity(section_count),
        content_width,
        content_height: 0.0,
    };

    for section in 0..section_count {
        let config = host.section_config(section);
        let item_count = host.item_count(section);
        let mut columns = Columns::new(
            section,
            &config,
            item_count,
            content_width,
            pass.content_height,
        );

        pass.section_starts.push(pass.attributes.len());
        pass.attributes.reserve(item_count);

        for item in 0..item_count {
            let index_path = IndexPath::new(section, item);
            let size = host.item_size(index_path);
            let height = size.aspect_ratio().map_or_else(
                || {
                    warn!(
                        %index_path,
                        width = size.width,
                        height = size.height,
                        "invalid intrinsic item size, placing item with zero height"
                    );
                    0.0
                },
                |ratio| columns.width() * ratio,
            );

            let frame = columns.place(height);
            trace!(%index_path, %frame, "placed item");

            pass.content_height = pass.content_height.max(frame.max_y());
            pass.attributes.push(PlacedAttribute::new(index_path, frame));
        }

        // Empty sections contribute no bottom inset.
        if item_count > 0 {
            pass.content_height += config.inset.bottom;
        }
    }

    pass
}
