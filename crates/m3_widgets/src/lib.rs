//! # M3 Widgets
//!
//! Material-style selection widgets built on [`m3_core`]:
//! - [`TabRow`]: fixed or scrollable tabs with an animated indicator
//! - [`SegmentedButtons`]: single or multi-select toggle segments
//! - [`Text`] and [`Badge`] for labels and counts
//! - [`Tooltip`]: plain or rich tooltips placed against an anchor
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        WIDGET                              │
//! ├────────────────────────────────────────────────────────────┤
//! │  Style ──validate──► Layout (pure) ──► paint               │
//! │                          ▲                                 │
//! │  InputEvent ──► hit test ┘──► commit ──► on_select         │
//! │                                  │  (rolled back on error) │
//! │                                  ▼                         │
//! │                          AnimationChannel                  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items and multi-select state are borrowed from the caller and must
//! outlive the widget. Styles are plain values that can be loaded from a
//! TOML [`StyleSheet`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod any;
pub mod badge;
pub mod config;
pub mod item;
pub mod metrics;
pub mod segmented;
pub mod tabs;
pub mod text;
pub mod tooltip;
pub mod validate;

pub use any::AnyWidget;
pub use badge::{Badge, BadgeCorner, BadgePlacement, BadgeStyle};
pub use config::StyleSheet;
pub use item::Item;
pub use segmented::{
    SegmentColors, SegmentSelectCallback, SegmentedButtons, SegmentedLayout, SegmentedSelection,
    SegmentedStyle, SelectionMode,
};
pub use tabs::{TabLayout, TabMode, TabRow, TabRowStyle, TabSelectCallback};
pub use text::Text;
pub use tooltip::{
    Tooltip, TooltipAlign, TooltipAnchor, TooltipContent, TooltipDirection, TooltipPlacement,
    TooltipStyle, TooltipVariant,
};
