use crate::cards::Style;

/// Per-guild preferences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub style: Style,
    pub jokers: bool,
}
