//! Input events delivered to widgets.
//!
//! Coordinates are integer window pixels, the same units the window backend
//! reports. Widgets convert to `f32` for hit-testing.

/// Mouse button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (or touch contact).
    #[default]
    Left,
    /// Secondary button.
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Space bar.
    Space,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Control key is held.
    pub ctrl: bool,
    /// Alt key is held.
    pub alt: bool,
    /// Super/Command key is held.
    pub super_key: bool,
}

/// Pointer sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerEvent {
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Button that changed state.
    pub button: MouseButton,
    /// Horizontal scroll delta (scroll events only).
    pub scroll_x: i32,
    /// Vertical scroll delta (scroll events only).
    pub scroll_y: i32,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Pointer sample at a position.
    #[must_use]
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

/// Event routed to a widget's `handle_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Button pressed.
    PointerDown(PointerEvent),
    /// Button released.
    PointerUp(PointerEvent),
    /// Pointer moved.
    PointerMove(PointerEvent),
    /// Wheel or trackpad scroll.
    Scroll(PointerEvent),
    /// Key pressed.
    KeyDown(Key),
    /// Key released.
    KeyUp(Key),
}

impl InputEvent {
    /// Pointer press at a position.
    #[must_use]
    pub fn down(x: i32, y: i32) -> Self {
        Self::PointerDown(PointerEvent::at(x, y))
    }

    /// Pointer release at a position.
    #[must_use]
    pub fn up(x: i32, y: i32) -> Self {
        Self::PointerUp(PointerEvent::at(x, y))
    }

    /// Scroll with the given deltas at a position.
    #[must_use]
    pub fn scroll(x: i32, y: i32, scroll_x: i32, scroll_y: i32) -> Self {
        Self::Scroll(PointerEvent {
            scroll_x,
            scroll_y,
            ..PointerEvent::at(x, y)
        })
    }
}
