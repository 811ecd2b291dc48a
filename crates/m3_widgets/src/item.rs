//! Borrowed item labels.

/// One tab or segment.
///
/// The label is borrowed from the caller and must outlive the widget it is
/// handed to. Widgets never copy or free it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Item<'a> {
    /// UTF-8 label. Empty means no text is drawn or measured.
    pub label: &'a str,
}

impl<'a> Item<'a> {
    /// Creates an item with a label.
    #[must_use]
    pub const fn new(label: &'a str) -> Self {
        Self { label }
    }

    /// True if there is nothing to measure or draw.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.label.is_empty()
    }
}

impl<'a> From<&'a str> for Item<'a> {
    fn from(label: &'a str) -> Self {
        Self::new(label)
    }
}
