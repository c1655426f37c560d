use crate::{IndexPath, LayoutError, PlacedAttribute, Rect, Size};

/// Geometry a collection layout hands back to its scroll view.
///
/// # Lazy passes
///
/// Queries that need placed items run a layout pass on demand when none is
/// cached. A pass is repeated only after [`invalidate`](Self::invalidate).
pub trait CollectionLayout {
    /// Runs a layout pass if no valid result is cached.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::HostMissing`] when no host is attached.
    fn prepare(&mut self) -> Result<(), LayoutError>;

    /// Discards the cached pass. The next query recomputes every frame.
    fn invalidate(&mut self);

    /// Total size of the scrollable content.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::HostMissing`] when no host is attached.
    fn content_size(&mut self) -> Result<Size, LayoutError>;

    /// Attributes whose frame intersects `rect`, in placement order.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::HostMissing`] when no host is attached.
    fn attributes_in(&mut self, rect: Rect) -> Result<Vec<PlacedAttribute>, LayoutError>;

    /// Attribute placed for the item at `index_path`, if that item exists.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::HostMissing`] when no host is attached.
    fn attributes_for_item(
        &mut self,
        index_path: IndexPath,
    ) -> Result<Option<PlacedAttribute>, LayoutError>;
}
