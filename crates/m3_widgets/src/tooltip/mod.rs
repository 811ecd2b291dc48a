//! Tooltip widget and its placement geometry.

pub mod placement;
mod style;
mod widget;

pub use placement::{
    TooltipAlign, TooltipAnchor, TooltipContent, TooltipDirection, TooltipPlacement,
};
pub use style::{TooltipStyle, TooltipVariant};
pub use widget::Tooltip;
