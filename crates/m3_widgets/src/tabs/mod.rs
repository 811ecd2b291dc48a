//! Tab row: single-select tabs with an animated indicator.
//!
//! - `style`: modes, colours and dimensions
//! - `layout`: pure geometry and hit-testing
//! - `row`: the widget, its gesture handling and indicator sync

pub mod layout;
pub mod row;
pub mod style;

pub use layout::TabLayout;
pub use row::{TabRow, TabSelectCallback};
pub use style::{TabMode, TabRowStyle};
