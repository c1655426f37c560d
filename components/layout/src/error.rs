//! Errors reported by collection layouts.

use thiserror::Error;

/// Failure to produce a layout.
///
/// Degenerate geometry (zero columns, negative column widths, invalid item
/// sizes) is never reported here: such items are clamped and placed so the
/// pass can complete. Only a broken setup is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout was queried before a [`LayoutHost`](crate::LayoutHost) was attached.
    #[error("a layout host must be attached before the layout can be prepared")]
    HostMissing,
}
