//! Properties accepted by the designer `TopBar`.
//!
//! Every value shown by the bar and every mutation handler is supplied by the
//! parent. The bar never stores a copy of any of these values: each render
//! reads them straight from the props.

use common::model::canvas::{CanvasSize, Dimension, SizePreset};
use yew::prelude::*;

/// Properties for the `TopBar` component.
#[derive(Properties, PartialEq, Clone)]
pub struct TopBarProps {
    /// Options of the size-preset selector, rendered in order.
    pub presets: Vec<SizePreset>,
    /// Value of the currently selected preset.
    pub size_preset: AttrValue,
    pub on_preset_change: Callback<String>,

    pub template_name: AttrValue,
    pub on_template_name_change: Callback<String>,

    pub canvas_size: CanvasSize,
    /// Receives the edited axis and the base-10 parse of the field text.
    /// `None` means the text was not a number; it is forwarded unvalidated.
    pub on_size_change: Callback<(Dimension, Option<i32>)>,

    pub lock_dimensions: bool,
    pub on_toggle_lock: Callback<()>,

    pub show_grid: bool,
    pub on_toggle_grid: Callback<()>,

    pub transparent_background: bool,
    pub on_toggle_transparent: Callback<()>,

    pub can_undo: bool,
    pub on_undo: Callback<()>,
    pub can_redo: bool,
    pub on_redo: Callback<()>,

    pub on_save: Callback<()>,
    pub on_back: Callback<()>,
}
