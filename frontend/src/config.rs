//! Shell defaults and the canvas presets offered in the top bar.

use common::model::canvas::{CanvasSize, SizePreset};
use common::model::language::Language;

pub const DEFAULT_TEMPLATE_NAME: &str = "Untitled";
pub const DEFAULT_PRESET: &str = "instagram_post";
pub const DEFAULT_CANVAS: CanvasSize = CanvasSize::new(1080, 1080);
pub const DEFAULT_LANGUAGE: Language = Language::Ru;

/// Preset value that carries no fixed dimensions.
pub const CUSTOM_PRESET: &str = "custom";

/// Advisory lower bound shown on the width/height inputs.
pub const MIN_DIMENSION_HINT: i32 = 100;

struct PresetSpec {
    value: &'static str,
    label: &'static str,
    size: Option<CanvasSize>,
}

const PRESETS: &[PresetSpec] = &[
    PresetSpec { value: CUSTOM_PRESET, label: "Custom", size: None },
    PresetSpec { value: "instagram_post", label: "Instagram Post (1080x1080)", size: Some(CanvasSize::new(1080, 1080)) },
    PresetSpec { value: "instagram_story", label: "Instagram Story (1080x1920)", size: Some(CanvasSize::new(1080, 1920)) },
    PresetSpec { value: "facebook_post", label: "Facebook Post (1200x630)", size: Some(CanvasSize::new(1200, 630)) },
    PresetSpec { value: "youtube_thumbnail", label: "YouTube Thumbnail (1280x720)", size: Some(CanvasSize::new(1280, 720)) },
    PresetSpec { value: "a4", label: "A4 (2480x3508)", size: Some(CanvasSize::new(2480, 3508)) },
];

pub fn presets() -> Vec<SizePreset> {
    PRESETS
        .iter()
        .map(|spec| SizePreset::new(spec.value, spec.label))
        .collect()
}

/// Fixed dimensions of a preset, `None` for `custom` or unknown values.
pub fn preset_size(value: &str) -> Option<CanvasSize> {
    PRESETS
        .iter()
        .find(|spec| spec.value == value)
        .and_then(|spec| spec.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        assert_eq!(preset_size(DEFAULT_PRESET), Some(DEFAULT_CANVAS));
        assert!(presets().iter().any(|p| p.value == CUSTOM_PRESET));
    }

    #[test]
    fn custom_and_unknown_presets_have_no_size() {
        assert_eq!(preset_size(CUSTOM_PRESET), None);
        assert_eq!(preset_size("billboard"), None);
        assert_eq!(preset_size("a4"), Some(CanvasSize::new(2480, 3508)));
    }
}
