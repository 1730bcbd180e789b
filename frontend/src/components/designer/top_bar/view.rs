//! View rendering for the designer top bar.
//!
//! Left group: back, template name, preset selector, width / lock / height.
//! Right group: language, grid, background transparency, undo / redo, save.
//! Every control is wrapped in a `Tooltip` and raises a `ToolbarAction`.

use common::model::canvas::Dimension;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{
    background_tooltip_key, grid_icon, grid_tooltip_key, history_class, language_label,
    language_tooltip, lock_icon, parse_int, preset_options, toggle_class,
};
use super::messages::{Msg, ToolbarAction};
use super::state::TopBar;
use crate::components::tooltip::Tooltip;
use crate::config::MIN_DIMENSION_HINT;

pub fn view(component: &TopBar, ctx: &Context<TopBar>) -> Html {
    let link = ctx.link();

    html! {
        <header class="designer-topbar">
            <div class="topbar-group topbar-document">
                { build_document_controls(component, ctx, link) }
                { build_size_controls(component, ctx, link) }
            </div>
            <div class="topbar-group topbar-view">
                { build_view_toggles(component, ctx, link) }
                { build_history(component, ctx, link) }
                { build_save(component, link) }
            </div>
        </header>
    }
}

fn action(link: &Scope<TopBar>, action: ToolbarAction) -> Callback<MouseEvent> {
    link.callback(move |_| Msg::Action(action.clone()))
}

fn icon(name: &str) -> Html {
    html! { <i class="material-icons">{ name.to_string() }</i> }
}

fn build_document_controls(component: &TopBar, ctx: &Context<TopBar>, link: &Scope<TopBar>) -> Html {
    let props = ctx.props();
    let i18n = &component.i18n;

    let options = preset_options(&props.presets, i18n)
        .into_iter()
        .map(|(value, text)| {
            let selected = value == props.size_preset.as_str();
            html! { <option key={value.clone()} value={value} selected={selected}>{ text }</option> }
        })
        .collect::<Html>();

    html! {
        <>
            <button type="button" class="topbar-back" onclick={action(link, ToolbarAction::Back)}>
                { icon("chevron_left") }
            </button>
            <Tooltip text={i18n.t("tooltips.topbar.templateName")}>
                <input
                    type="text"
                    class="topbar-name"
                    value={props.template_name.clone()}
                    placeholder={i18n.t("topbar.templateName")}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Action(ToolbarAction::RenameTemplate(input.value()))
                    })}
                />
            </Tooltip>
            <Tooltip text={i18n.t("tooltips.topbar.preset")}>
                <select
                    class="topbar-preset"
                    ref={component.preset_ref.clone()}
                    onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::Action(ToolbarAction::SelectPreset(select.value()))
                    })}
                >
                    { options }
                </select>
            </Tooltip>
        </>
    }
}

fn dimension_input(value: i32, dimension: Dimension, link: &Scope<TopBar>) -> Html {
    html! {
        <input
            type="number"
            class="topbar-dimension"
            value={value.to_string()}
            min={MIN_DIMENSION_HINT.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Action(ToolbarAction::Resize(dimension, parse_int(&input.value())))
            })}
        />
    }
}

fn build_size_controls(component: &TopBar, ctx: &Context<TopBar>, link: &Scope<TopBar>) -> Html {
    let props = ctx.props();
    let i18n = &component.i18n;

    html! {
        <div class="topbar-size">
            <Tooltip text={i18n.t("topbar.width")}>
                { dimension_input(props.canvas_size.width, Dimension::Width, link) }
            </Tooltip>
            <Tooltip text={i18n.t("tooltips.topbar.lockDimensions")}>
                <button
                    type="button"
                    class={toggle_class(props.lock_dimensions)}
                    onclick={action(link, ToolbarAction::ToggleLock)}
                >
                    { icon(lock_icon(props.lock_dimensions)) }
                </button>
            </Tooltip>
            <Tooltip text={i18n.t("topbar.height")}>
                { dimension_input(props.canvas_size.height, Dimension::Height, link) }
            </Tooltip>
        </div>
    }
}

fn build_view_toggles(component: &TopBar, ctx: &Context<TopBar>, link: &Scope<TopBar>) -> Html {
    let props = ctx.props();
    let i18n = &component.i18n;

    html! {
        <>
            <Tooltip text={language_tooltip(i18n.language)}>
                <button type="button" class="topbar-language" onclick={action(link, ToolbarAction::ToggleLanguage)}>
                    { language_label(i18n.language) }
                </button>
            </Tooltip>
            <Tooltip text={i18n.t(grid_tooltip_key(props.show_grid))}>
                <button
                    type="button"
                    class={toggle_class(props.show_grid)}
                    onclick={action(link, ToolbarAction::ToggleGrid)}
                >
                    { icon(grid_icon(props.show_grid)) }
                </button>
            </Tooltip>
            <Tooltip text={i18n.t(background_tooltip_key(props.transparent_background))}>
                <button
                    type="button"
                    class={toggle_class(props.transparent_background)}
                    onclick={action(link, ToolbarAction::ToggleTransparent)}
                >
                    { icon("texture") }
                </button>
            </Tooltip>
        </>
    }
}

fn build_history(component: &TopBar, ctx: &Context<TopBar>, link: &Scope<TopBar>) -> Html {
    let props = ctx.props();
    let i18n = &component.i18n;

    html! {
        <div class="topbar-history-group">
            <Tooltip text={i18n.t("tooltips.topbar.undo")}>
                <button
                    type="button"
                    class={history_class(props.can_undo)}
                    disabled={!props.can_undo}
                    onclick={action(link, ToolbarAction::Undo)}
                >
                    { icon("undo") }
                </button>
            </Tooltip>
            <Tooltip text={i18n.t("tooltips.topbar.redo")}>
                <button
                    type="button"
                    class={history_class(props.can_redo)}
                    disabled={!props.can_redo}
                    onclick={action(link, ToolbarAction::Redo)}
                >
                    { icon("redo") }
                </button>
            </Tooltip>
        </div>
    }
}

fn build_save(component: &TopBar, link: &Scope<TopBar>) -> Html {
    let i18n = &component.i18n;

    html! {
        <Tooltip text={i18n.t("tooltips.topbar.save")}>
            <button type="button" class="topbar-save" onclick={action(link, ToolbarAction::Save)}>
                { icon("save") }
                <span>{ i18n.t("topbar.save") }</span>
            </button>
        </Tooltip>
    }
}

#[cfg(test)]
mod tests {
    use super::super::{TopBar, TopBarProps};
    use common::model::canvas::{CanvasSize, SizePreset};
    use yew::{Callback, ServerRenderer};

    #[derive(Clone, Copy)]
    struct Setup {
        size_preset: &'static str,
        lock_dimensions: bool,
        show_grid: bool,
        can_undo: bool,
        can_redo: bool,
    }

    const DEFAULT: Setup = Setup {
        size_preset: "square",
        lock_dimensions: false,
        show_grid: false,
        can_undo: true,
        can_redo: true,
    };

    fn props(setup: Setup) -> TopBarProps {
        TopBarProps {
            presets: vec![
                SizePreset::new("custom", "Custom"),
                SizePreset::new("square", "Square"),
                SizePreset::new("a4", "A4 sheet"),
            ],
            size_preset: setup.size_preset.into(),
            on_preset_change: Callback::noop(),
            template_name: "Flyer".into(),
            on_template_name_change: Callback::noop(),
            canvas_size: CanvasSize::new(1080, 720),
            on_size_change: Callback::noop(),
            lock_dimensions: setup.lock_dimensions,
            on_toggle_lock: Callback::noop(),
            show_grid: setup.show_grid,
            on_toggle_grid: Callback::noop(),
            transparent_background: false,
            on_toggle_transparent: Callback::noop(),
            can_undo: setup.can_undo,
            on_undo: Callback::noop(),
            can_redo: setup.can_redo,
            on_redo: Callback::noop(),
            on_save: Callback::noop(),
            on_back: Callback::noop(),
        }
    }

    async fn render(setup: Setup) -> String {
        ServerRenderer::<TopBar>::with_props(move || props(setup))
            .hydratable(false)
            .render()
            .await
    }

    /// `(attributes, following markup)` of every `<tag ...>` in `html`.
    fn elements<'a>(html: &'a str, tag: &str) -> Vec<(&'a str, &'a str)> {
        html.split(&format!("<{tag}"))
            .skip(1)
            .filter_map(|chunk| chunk.split_once('>'))
            .collect()
    }

    /// Attributes of the button whose icon is `icon`.
    fn button_with_icon<'a>(html: &'a str, icon: &str) -> &'a str {
        let marker = format!(r#"<i class="material-icons">{icon}</i>"#);
        elements(html, "button")
            .into_iter()
            .find(|(_, body)| body.starts_with(&marker))
            .map(|(attrs, _)| attrs)
            .unwrap_or_else(|| panic!("no button with icon {icon} in {html}"))
    }

    #[tokio::test]
    async fn disabled_history_buttons_render_disabled() {
        let html = render(Setup { can_undo: false, ..DEFAULT }).await;

        let undo = button_with_icon(&html, "undo");
        assert!(undo.contains("topbar-history disabled"));
        assert!(undo.matches("disabled").count() >= 2, "undo button: {undo}");

        let redo = button_with_icon(&html, "redo");
        assert!(!redo.contains("disabled"), "redo button: {redo}");
    }

    #[tokio::test]
    async fn preset_options_render_in_order_with_prop_selected() {
        let html = render(Setup { size_preset: "a4", ..DEFAULT }).await;

        let options = elements(&html, "option");
        assert_eq!(options.len(), 3);
        for ((attrs, _), value) in options.iter().zip(["custom", "square", "a4"]) {
            assert!(attrs.contains(&format!(r#"value="{value}""#)), "option: {attrs}");
            assert_eq!(attrs.contains("selected"), value == "a4", "option: {attrs}");
        }
        assert!(options[2].1.starts_with("A4 sheet"));
    }

    #[tokio::test]
    async fn toggle_buttons_reflect_their_flags() {
        let html = render(Setup { lock_dimensions: true, ..DEFAULT }).await;
        assert!(button_with_icon(&html, "lock").contains("topbar-toggle active"));
        assert!(!button_with_icon(&html, "grid_off").contains("active"));

        let html = render(Setup { show_grid: true, ..DEFAULT }).await;
        assert!(button_with_icon(&html, "lock_open").contains(r#"class="topbar-toggle""#));
        assert!(button_with_icon(&html, "grid_on").contains("topbar-toggle active"));
    }

    #[tokio::test]
    async fn fields_show_their_props() {
        let html = render(DEFAULT).await;
        let inputs = elements(&html, "input");
        assert_eq!(inputs.len(), 3);
        assert!(inputs[0].0.contains(r#"value="Flyer""#));
        assert!(inputs[1].0.contains(r#"value="1080""#));
        assert!(inputs[1].0.contains(r#"min="100""#));
        assert!(inputs[2].0.contains(r#"value="720""#));
    }
}
