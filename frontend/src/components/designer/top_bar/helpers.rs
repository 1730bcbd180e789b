//! Pure helpers behind the top bar view.
//!
//! Everything the bar shows that depends on a prop is derived here: the
//! parse of the width/height fields, the CSS classes and icons of the toggle
//! buttons, and the option list of the preset selector. Keeping these as free
//! functions lets the view stay a straight mapping from props to markup and
//! lets the tests cover the behavior without a DOM.

use common::model::canvas::SizePreset;
use common::model::language::Language;

use crate::i18n::I18nContext;

/// Parses the text of a numeric field the way the browser's `parseInt(text, 10)`
/// does: leading whitespace is skipped, an optional sign is accepted and the
/// longest run of ASCII digits is read (`"12px"` gives 12).
///
/// Returns `None` when no digit follows, the equivalent of `NaN`. Values that
/// overflow `i32` saturate.
pub fn parse_int(text: &str) -> Option<i32> {
    let rest = text.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: &str = {
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Classes of an on/off button (lock, grid, transparency).
pub fn toggle_class(active: bool) -> &'static str {
    if active {
        "topbar-toggle active"
    } else {
        "topbar-toggle"
    }
}

/// Classes of the undo/redo buttons.
pub fn history_class(enabled: bool) -> &'static str {
    if enabled {
        "topbar-history"
    } else {
        "topbar-history disabled"
    }
}

pub fn lock_icon(locked: bool) -> &'static str {
    if locked { "lock" } else { "lock_open" }
}

pub fn grid_icon(show_grid: bool) -> &'static str {
    if show_grid { "grid_on" } else { "grid_off" }
}

pub fn grid_tooltip_key(show_grid: bool) -> &'static str {
    if show_grid {
        "tooltips.topbar.hideGrid"
    } else {
        "tooltips.topbar.showGrid"
    }
}

pub fn background_tooltip_key(transparent: bool) -> &'static str {
    if transparent {
        "tooltips.topbar.transparentBg"
    } else {
        "tooltips.topbar.whiteBg"
    }
}

/// Label of the language button: the current code, upper-cased.
pub fn language_label(language: Language) -> String {
    language.code().to_uppercase()
}

/// Tooltip of the language button: the language a click switches to.
pub fn language_tooltip(language: Language) -> String {
    language_label(language.toggled())
}

/// `(value, text)` pairs for the preset selector, one per preset, in order.
/// The text is the `topbar.<value>` translation, or the preset label.
pub fn preset_options(presets: &[SizePreset], i18n: &I18nContext) -> Vec<(String, String)> {
    presets
        .iter()
        .map(|preset| {
            let text = i18n
                .translate(&format!("topbar.{}", preset.value))
                .filter(|text| !text.is_empty())
                .unwrap_or(preset.label.as_str());
            (preset.value.clone(), text.to_string())
        })
        .collect()
}

/// Value to write into the preset `<select>` so it shows `size_preset`, or
/// `None` when the element already does.
pub fn preset_to_sync<'a>(shown: &str, size_preset: &'a str) -> Option<&'a str> {
    (shown != size_preset).then_some(size_preset)
}
