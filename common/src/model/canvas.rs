use serde::{Deserialize, Serialize};

/// Width/height pair describing the design surface being edited, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

/// Axis tag carried by a size edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

/// A named canvas-size shortcut offered in the preset selector.
///
/// `value` is the stable identifier (also used to build the translation key
/// `topbar.<value>`), `label` is the text shown when no translation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePreset {
    pub value: String,
    pub label: String,
}

impl SizePreset {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    /// Returns a copy with only `dimension` replaced by `value`.
    pub fn with_dimension(self, dimension: Dimension, value: i32) -> Self {
        match dimension {
            Dimension::Width => Self { width: value, ..self },
            Dimension::Height => Self { height: value, ..self },
        }
    }

    /// Returns a copy with `dimension` set to `value` and the other axis
    /// scaled to keep the current aspect ratio.
    ///
    /// The scaled axis is rounded to the nearest pixel and never drops below 1.
    /// When the current size along `dimension` is not positive there is no
    /// ratio to keep, so only `dimension` changes.
    pub fn scaled_to(self, dimension: Dimension, value: i32) -> Self {
        let current = self.get(dimension);
        if current <= 0 {
            return self.with_dimension(dimension, value);
        }

        let ratio = f64::from(value) / f64::from(current);
        let scale = |other: i32| ((f64::from(other) * ratio).round() as i32).max(1);

        match dimension {
            Dimension::Width => Self::new(value, scale(self.height)),
            Dimension::Height => Self::new(scale(self.width), value),
        }
    }
}
