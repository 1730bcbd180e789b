use common::model::canvas::Dimension;

use crate::i18n::I18nContext;

/// A discrete user interaction with the top bar.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolbarAction {
    Back,
    RenameTemplate(String),
    SelectPreset(String),
    Resize(Dimension, Option<i32>),
    ToggleLock,
    ToggleLanguage,
    ToggleGrid,
    ToggleTransparent,
    Undo,
    Redo,
    Save,
}

pub enum Msg {
    Action(ToolbarAction),
    I18nChanged(I18nContext),
}
