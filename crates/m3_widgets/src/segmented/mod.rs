//! Segmented buttons: single or multi-select toggle segments.

pub mod buttons;
pub mod layout;
pub mod style;

pub use buttons::{SegmentSelectCallback, SegmentedButtons, SegmentedSelection};
pub use layout::SegmentedLayout;
pub use style::{SegmentColors, SegmentedStyle, SelectionMode};
