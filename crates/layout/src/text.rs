use doctree::{StyleStack, StyleTag};

/// Caret geometry can depend on this without knowing about the host toolkit.
pub trait TextMeasurer {
    /// Return the width of `text` in px when rendered with `styling`.
    fn measure(&self, text: &str, styling: &StyleStack) -> f32;

    /// Return the line height in px for the given `styling`.
    fn line_height(&self, styling: &StyleStack) -> f32;
}

/// Deterministic measurer for headless hosts and tests: every character
/// advances by the same width, scaled for bold and superscript runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
    pub line_height: f32,
    pub bold_scale: f32,
    pub superscript_scale: f32,
}

impl FixedAdvanceMeasurer {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
            bold_scale: 1.0,
            superscript_scale: 1.0,
        }
    }

    fn scale(&self, styling: &StyleStack) -> f32 {
        let mut scale = 1.0;
        if styling.contains(&StyleTag::Bold) {
            scale *= self.bold_scale;
        }
        if styling.contains(&StyleTag::Superscript) {
            scale *= self.superscript_scale;
        }
        scale
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: 20.0,
            bold_scale: 1.1,
            superscript_scale: 0.75,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, styling: &StyleStack) -> f32 {
        text.chars().count() as f32 * self.advance * self.scale(styling)
    }

    fn line_height(&self, _styling: &StyleStack) -> f32 {
        self.line_height
    }
}
