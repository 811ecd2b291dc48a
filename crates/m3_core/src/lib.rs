//! # M3 Core
//!
//! The contract shared by every widget in the toolkit:
//! - A single error taxonomy ([`UiError`])
//! - Geometry, colour and text style value types
//! - Backend capabilities for text, paint and animation
//! - The [`Widget`] dispatch trait hosts drive widgets through
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   FRAME PIPELINE                      │
//! ├──────────────────────────────────────────────────────┤
//! │  InputEvent → handle_event → measure → layout → paint │
//! │                    ↓                           ↓      │
//! │             AnimationChannel            PaintBackend  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous. A backend call either
//! returns a value or an error; there is nothing to await.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod backend;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod text;
pub mod widget;

pub use animation::{AnimationChannel, AnimationStep, Easing, TimingAnimation};
pub use backend::{MonospaceTextBackend, PaintBackend, TextBackend, TextMeasurer};
pub use color::Color;
pub use error::{UiError, UiResult};
pub use geometry::{Edges, MeasureSpec, Rect, Size};
pub use input::{InputEvent, Key, Modifiers, MouseButton, PointerEvent};
pub use render::{PaintCommand, PaintRecorder, PaintVertex};
pub use text::{FontHandle, OwnedFont, TextMetrics, TextStyle};
pub use widget::{SemanticFlags, SemanticRole, Semantics, Widget, WidgetFlags};
