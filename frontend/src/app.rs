//! Designer shell: owns the document settings the top bar displays and
//! publishes the translation context.

use std::rc::Rc;

use common::model::canvas::{CanvasSize, Dimension, SizePreset};
use common::model::language::Language;
use common::model::template::TemplateDocument;
use gloo_console::{error, log, warn};
use yew::prelude::*;

use crate::components::designer::top_bar::TopBar;
use crate::config;
use crate::i18n::{Catalog, I18nContext};

/// Caller-owned values handed to the top bar.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignerState {
    pub template_name: String,
    pub canvas_size: CanvasSize,
    pub size_preset: String,
    pub lock_dimensions: bool,
    pub show_grid: bool,
    pub transparent_background: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self {
            template_name: config::DEFAULT_TEMPLATE_NAME.to_string(),
            canvas_size: config::DEFAULT_CANVAS,
            size_preset: config::DEFAULT_PRESET.to_string(),
            lock_dimensions: false,
            show_grid: false,
            transparent_background: false,
        }
    }
}

impl DesignerState {
    /// Selects a preset and, when it has fixed dimensions, resizes the canvas.
    pub fn apply_preset(&mut self, value: String) {
        if let Some(size) = config::preset_size(&value) {
            self.canvas_size = size;
        }
        self.size_preset = value;
    }

    /// Applies a width/height edit. Returns `false` (and changes nothing) when
    /// the edit was not a number.
    ///
    /// With dimensions locked the other axis follows to keep the aspect ratio.
    /// A manual edit always turns the preset into `custom`.
    pub fn apply_size(&mut self, dimension: Dimension, value: Option<i32>) -> bool {
        let Some(value) = value else {
            return false;
        };

        self.canvas_size = if self.lock_dimensions {
            self.canvas_size.scaled_to(dimension, value)
        } else {
            self.canvas_size.with_dimension(dimension, value)
        };
        self.size_preset = config::CUSTOM_PRESET.to_string();
        true
    }

    pub fn document(&self) -> TemplateDocument {
        TemplateDocument {
            name: self.template_name.clone(),
            canvas: self.canvas_size,
            preset: self.size_preset.clone(),
            transparent_background: self.transparent_background,
        }
    }
}

pub enum Msg {
    Rename(String),
    SelectPreset(String),
    Resize(Dimension, Option<i32>),
    ToggleLock,
    ToggleGrid,
    ToggleTransparent,
    SetLanguage(Language),
    Undo,
    Redo,
    Save,
    Back,
}

pub struct App {
    state: DesignerState,
    presets: Vec<SizePreset>,
    language: Language,
    catalog: Rc<Catalog>,
    set_language: Callback<Language>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let catalog = Catalog::load().unwrap_or_else(|e| {
            error!(format!("Failed to load translations: {e}"));
            Catalog::default()
        });

        Self {
            state: DesignerState::default(),
            presets: config::presets(),
            language: config::DEFAULT_LANGUAGE,
            catalog: Rc::new(catalog),
            set_language: ctx.link().callback(Msg::SetLanguage),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Rename(name) => self.state.template_name = name,
            Msg::SelectPreset(value) => self.state.apply_preset(value),
            Msg::Resize(dimension, value) => {
                if !self.state.apply_size(dimension, value) {
                    warn!(format!("Ignoring non-numeric {} entry", dimension.as_str()));
                    return false;
                }
            }
            Msg::ToggleLock => self.state.lock_dimensions = !self.state.lock_dimensions,
            Msg::ToggleGrid => self.state.show_grid = !self.state.show_grid,
            Msg::ToggleTransparent => {
                self.state.transparent_background = !self.state.transparent_background
            }
            Msg::SetLanguage(language) => self.language = language,
            Msg::Undo | Msg::Redo => {
                log!("No edit history is attached to this designer");
                return false;
            }
            Msg::Save => {
                match serde_json::to_string(&self.state.document()) {
                    Ok(json) => log!(format!("Template ready to persist: {json}")),
                    Err(e) => error!(format!("Failed to serialize template: {e}")),
                }
                return false;
            }
            Msg::Back => {
                log!("Back to template list requested");
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &self.state;
        let i18n = I18nContext::new(self.language, self.catalog.clone(), self.set_language.clone());

        let stage_class = classes!(
            "canvas-stage",
            state.show_grid.then_some("with-grid"),
            if state.transparent_background { "transparent" } else { "white" },
        );
        let stage_style = format!(
            "aspect-ratio: {} / {};",
            state.canvas_size.width.max(1),
            state.canvas_size.height.max(1)
        );

        html! {
            <ContextProvider<I18nContext> context={i18n}>
                <div class="designer-root">
                    <TopBar
                        presets={self.presets.clone()}
                        size_preset={state.size_preset.clone()}
                        on_preset_change={link.callback(Msg::SelectPreset)}
                        template_name={state.template_name.clone()}
                        on_template_name_change={link.callback(Msg::Rename)}
                        canvas_size={state.canvas_size}
                        on_size_change={link.callback(|(dimension, value): (Dimension, Option<i32>)| Msg::Resize(dimension, value))}
                        lock_dimensions={state.lock_dimensions}
                        on_toggle_lock={link.callback(|_: ()| Msg::ToggleLock)}
                        show_grid={state.show_grid}
                        on_toggle_grid={link.callback(|_: ()| Msg::ToggleGrid)}
                        transparent_background={state.transparent_background}
                        on_toggle_transparent={link.callback(|_: ()| Msg::ToggleTransparent)}
                        can_undo={false}
                        on_undo={link.callback(|_: ()| Msg::Undo)}
                        can_redo={false}
                        on_redo={link.callback(|_: ()| Msg::Redo)}
                        on_save={link.callback(|_: ()| Msg::Save)}
                        on_back={link.callback(|_: ()| Msg::Back)}
                    />
                    <main class="designer-workspace">
                        <div class={stage_class} style={stage_style}>
                            <span class="canvas-size-label">
                                { format!("{} × {}", state.canvas_size.width, state.canvas_size.height) }
                            </span>
                        </div>
                    </main>
                </div>
            </ContextProvider<I18nContext>>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_with_size_resizes_canvas() {
        let mut state = DesignerState::default();
        state.apply_preset("instagram_story".to_string());
        assert_eq!(state.size_preset, "instagram_story");
        assert_eq!(state.canvas_size, CanvasSize::new(1080, 1920));
    }

    #[test]
    fn custom_preset_keeps_canvas() {
        let mut state = DesignerState::default();
        state.canvas_size = CanvasSize::new(640, 480);
        state.apply_preset(config::CUSTOM_PRESET.to_string());
        assert_eq!(state.size_preset, config::CUSTOM_PRESET);
        assert_eq!(state.canvas_size, CanvasSize::new(640, 480));
    }

    #[test]
    fn unlocked_edit_changes_one_axis_and_goes_custom() {
        let mut state = DesignerState::default();
        assert!(state.apply_size(Dimension::Width, Some(1024)));
        assert_eq!(state.canvas_size, CanvasSize::new(1024, 1080));
        assert_eq!(state.size_preset, config::CUSTOM_PRESET);
    }

    #[test]
    fn locked_edit_keeps_aspect_ratio() {
        let mut state = DesignerState {
            canvas_size: CanvasSize::new(1200, 630),
            lock_dimensions: true,
            ..DesignerState::default()
        };
        assert!(state.apply_size(Dimension::Width, Some(600)));
        assert_eq!(state.canvas_size, CanvasSize::new(600, 315));
    }

    #[test]
    fn nan_edit_is_ignored() {
        let mut state = DesignerState::default();
        let before = state.clone();
        assert!(!state.apply_size(Dimension::Height, None));
        assert_eq!(state, before);
    }

    #[test]
    fn edits_below_hint_are_not_clamped() {
        let mut state = DesignerState::default();
        assert!(state.apply_size(Dimension::Height, Some(5)));
        assert_eq!(state.canvas_size.height, 5);
    }

    #[test]
    fn document_snapshot_serializes() {
        let mut state = DesignerState::default();
        state.template_name = "Flyer".to_string();
        state.transparent_background = true;
        let json = serde_json::to_value(state.document()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Flyer",
                "canvas": { "width": 1080, "height": 1080 },
                "preset": "instagram_post",
                "transparentBackground": true
            })
        );
    }
}
