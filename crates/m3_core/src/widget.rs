//! The dispatch contract every widget implements.

use crate::backend::PaintBackend;
use crate::error::UiResult;
use crate::geometry::{MeasureSpec, Rect, Size};
use crate::input::InputEvent;

/// Widget flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget can take keyboard focus.
    pub const FOCUSABLE: u32 = 1 << 0;
    /// Widget ignores input and paints in its disabled colors.
    pub const DISABLED: u32 = 1 << 1;
    /// Widget is not painted.
    pub const HIDDEN: u32 = 1 << 2;

    /// No flags set.
    pub const NONE: Self = Self(0);

    /// Creates flags from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// Accessibility role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SemanticRole {
    /// No specific role.
    #[default]
    None,
    /// Pressable button.
    Button,
    /// Static text.
    Text,
    /// Image.
    Image,
    /// Slider.
    Slider,
    /// Checkbox.
    Checkbox,
    /// Switch.
    Switch,
    /// Radio button.
    Radio,
    /// Editable text field.
    TextField,
}

/// Accessibility state flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemanticFlags(u32);

impl SemanticFlags {
    /// Element is disabled.
    pub const DISABLED: u32 = 1 << 0;
    /// Element is selected.
    pub const SELECTED: u32 = 1 << 1;
    /// Element can take focus.
    pub const FOCUSABLE: u32 = 1 << 2;
    /// Element has focus.
    pub const FOCUSED: u32 = 1 << 3;

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Mirrors the disabled/focusable bits of a widget.
    #[must_use]
    pub fn from_widget(flags: WidgetFlags) -> Self {
        let mut out = Self::default();
        if flags.has(WidgetFlags::DISABLED) {
            out.set(Self::DISABLED);
        }
        if flags.has(WidgetFlags::FOCUSABLE) {
            out.set(Self::FOCUSABLE);
        }
        out
    }
}

/// What a widget reports to an accessibility host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Semantics {
    /// Role.
    pub role: SemanticRole,
    /// State flags.
    pub flags: SemanticFlags,
    /// Accessible label.
    pub label: Option<String>,
    /// Accessible hint.
    pub hint: Option<String>,
    /// Accessible value.
    pub value: Option<String>,
}

/// Operations a host drives a widget through.
///
/// Hosts call `measure`, then `layout` with the final bounds, then `paint`.
/// `handle_event` reports whether the widget consumed the event so the host
/// can route unhandled events to siblings.
pub trait Widget {
    /// Computes the desired size under the given constraints.
    ///
    /// # Errors
    ///
    /// Validation or backend failures.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> UiResult<Size>;

    /// Assigns final bounds.
    ///
    /// # Errors
    ///
    /// Validation or backend failures.
    fn layout(&mut self, bounds: Rect) -> UiResult<()>;

    /// Paints into the backend.
    ///
    /// # Errors
    ///
    /// Validation or backend failures.
    fn paint(&mut self, painter: &mut dyn PaintBackend) -> UiResult<()>;

    /// Processes an event. Returns true if it was consumed.
    ///
    /// # Errors
    ///
    /// Protocol, validation, backend or callback failures.
    fn handle_event(&mut self, event: &InputEvent) -> UiResult<bool>;

    /// Describes the widget for accessibility.
    fn semantics(&self) -> Semantics;

    /// Releases backend resources. Safe to call more than once.
    ///
    /// # Errors
    ///
    /// Backend failures while releasing resources.
    fn destroy(&mut self) -> UiResult<()>;

    /// Current widget flags.
    fn flags(&self) -> WidgetFlags;

    /// Replaces the widget flags.
    fn set_flags(&mut self, flags: WidgetFlags);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_assign() {
        let mut flags = WidgetFlags::from_bits(WidgetFlags::FOCUSABLE);
        flags.assign(WidgetFlags::DISABLED, true);
        assert!(flags.has(WidgetFlags::DISABLED));
        flags.assign(WidgetFlags::DISABLED, false);
        assert!(!flags.has(WidgetFlags::DISABLED));
        assert_eq!(flags.bits(), WidgetFlags::FOCUSABLE);
    }

    #[test]
    fn test_semantic_flags_mirror_widget() {
        let flags = WidgetFlags::from_bits(WidgetFlags::FOCUSABLE | WidgetFlags::DISABLED);
        let semantic = SemanticFlags::from_widget(flags);
        assert!(semantic.has(SemanticFlags::DISABLED));
        assert!(semantic.has(SemanticFlags::FOCUSABLE));
        assert!(!semantic.has(SemanticFlags::SELECTED));
    }
}
