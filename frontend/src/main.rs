use crate::app::App;

mod app;
mod components;
mod config;
mod i18n;

fn main() {
    yew::Renderer::<App>::new().render();
}
