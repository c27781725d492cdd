use crate::state::TextStyle;

/// Surface geometry and initial text style for a [`TextEngine`](crate::TextEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Panel width at rotation 0, in pixels.
    pub width: u16,
    /// Panel height at rotation 0, in pixels.
    pub height: u16,
    /// Initial rotation, 0..=3; higher values wrap.
    pub rotation: u8,
    pub style: TextStyle,
}

impl EngineConfig {
    /// Config for a `width` x `height` panel with the default style.
    pub fn for_display(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 320,
            rotation: 0,
            style: TextStyle::default(),
        }
    }
}
