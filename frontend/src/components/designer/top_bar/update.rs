//! Update logic for the designer top bar.
//!
//! The bar owns no document state, so `update` never mutates anything the
//! parent owns. A `ToolbarAction` is forwarded to exactly one callback from
//! the props (or to the translation context for the language toggle), and
//! the bar does not re-render itself: new values arrive as new props.

use yew::prelude::*;

use super::messages::{Msg, ToolbarAction};
use super::props::TopBarProps;
use super::state::TopBar;
use crate::i18n::I18nContext;

/// Central update function for the component.
///
/// Returns `true` only when the translation context changed, since labels
/// and tooltips depend on it.
pub fn update(component: &mut TopBar, ctx: &Context<TopBar>, msg: Msg) -> bool {
    match msg {
        Msg::Action(action) => {
            let picked_preset = matches!(action, ToolbarAction::SelectPreset(_));
            dispatch(ctx.props(), &component.i18n, action);
            // the selector keeps showing the prop until the parent passes a new one
            if picked_preset {
                component.sync_preset_select(&ctx.props().size_preset);
            }
            false
        }
        Msg::I18nChanged(i18n) => {
            let changed = component.i18n != i18n;
            component.i18n = i18n;
            changed
        }
    }
}

/// Routes one user action to its callback.
///
/// Returns whether a callback was invoked. Undo and redo are refused while
/// `can_undo` / `can_redo` are false, so a disabled button never emits even
/// if an event slips through.
pub fn dispatch(props: &TopBarProps, i18n: &I18nContext, action: ToolbarAction) -> bool {
    match action {
        ToolbarAction::Back => props.on_back.emit(()),
        ToolbarAction::RenameTemplate(name) => props.on_template_name_change.emit(name),
        ToolbarAction::SelectPreset(value) => props.on_preset_change.emit(value),
        ToolbarAction::Resize(dimension, value) => props.on_size_change.emit((dimension, value)),
        ToolbarAction::ToggleLock => props.on_toggle_lock.emit(()),
        ToolbarAction::ToggleLanguage => i18n.set_language.emit(i18n.language.toggled()),
        ToolbarAction::ToggleGrid => props.on_toggle_grid.emit(()),
        ToolbarAction::ToggleTransparent => props.on_toggle_transparent.emit(()),
        ToolbarAction::Undo if props.can_undo => props.on_undo.emit(()),
        ToolbarAction::Redo if props.can_redo => props.on_redo.emit(()),
        ToolbarAction::Undo | ToolbarAction::Redo => return false,
        ToolbarAction::Save => props.on_save.emit(()),
    }
    true
}
