#![no_std]
//! Geometry primitives shared by the waterfall layout crates.
//!
//! All values are expressed in **logical pixels** (points), the same unit the
//! host's scroll view and cell frames use. Backends convert to physical
//! pixels; the layout never does.

pub mod layout;

pub use layout::{EdgeInsets, IndexPath, Point, Rect, Size};
