//! Shared argument checks.
//!
//! Every public entry point runs these before touching widget state, so an
//! invalid configuration is rejected the same way whether it arrives through
//! a constructor, a setter, `layout`, `paint` or `handle_event`.

use m3_core::{Color, UiError, UiResult};

/// Rejects any negative value. `NaN` is rejected as well.
///
/// # Errors
///
/// `Range` naming the first offending field.
pub fn non_negative(fields: &[(f32, &'static str)]) -> UiResult<()> {
    for &(value, name) in fields {
        if value.is_nan() || value < 0.0 {
            return Err(UiError::Range(name));
        }
    }
    Ok(())
}

/// Validates a list of colors.
///
/// # Errors
///
/// `Range` for the first color with a channel outside 0..=1.
pub fn colors(colors: &[Color]) -> UiResult<()> {
    colors.iter().try_for_each(|color| color.validate())
}

/// Checks that an optional index addresses one of `count` items.
///
/// # Errors
///
/// `Range` if the index is out of bounds.
pub fn selection(index: Option<usize>, count: usize) -> UiResult<()> {
    match index {
        Some(index) if index >= count => Err(UiError::Range("selected index out of range")),
        _ => Ok(()),
    }
}

/// Checks the multi-select contract: one flag per item.
///
/// # Errors
///
/// `InvalidArgument` if the lengths differ.
pub fn states(states: &[bool], count: usize) -> UiResult<()> {
    if states.len() != count {
        return Err(UiError::InvalidArgument(
            "selection state array must have one flag per item",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert!(non_negative(&[(0.0, "spacing"), (4.0, "padding")]).is_ok());
        assert_eq!(
            non_negative(&[(1.0, "spacing"), (-0.5, "padding")]),
            Err(UiError::Range("padding"))
        );
        assert!(non_negative(&[(f32::NAN, "corner")]).is_err());
    }

    #[test]
    fn test_selection() {
        assert!(selection(None, 0).is_ok());
        assert!(selection(Some(2), 3).is_ok());
        assert!(matches!(selection(Some(3), 3), Err(UiError::Range(_))));
    }

    #[test]
    fn test_states() {
        assert!(states(&[true, false], 2).is_ok());
        assert!(states(&[], 0).is_ok());
        assert!(matches!(states(&[true], 2), Err(UiError::InvalidArgument(_))));
    }

    #[test]
    fn test_colors() {
        assert!(colors(&[Color::BLACK, Color::TRANSPARENT]).is_ok());
        assert!(colors(&[Color::BLACK, Color::rgba(0.0, 2.0, 0.0, 1.0)]).is_err());
    }
}
