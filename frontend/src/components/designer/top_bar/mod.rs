//! Designer top bar: the toolbar shown above the canvas.
//!
//! Responsibilities
//! - Render the template name, size preset, width/height with aspect lock,
//!   language, grid, background, undo/redo and save controls.
//! - Forward each user action to exactly one callback from `TopBarProps`.
//! - Read labels and the current language from the `I18nContext` provided by
//!   an ancestor; when there is none, fall back to a detached context.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::i18n::I18nContext;
pub use messages::{Msg, ToolbarAction};
pub use props::TopBarProps;
pub use state::TopBar;

impl Component for TopBar {
    type Message = Msg;
    type Properties = TopBarProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (i18n, handle) =
            match ctx.link().context::<I18nContext>(ctx.link().callback(Msg::I18nChanged)) {
                Some((i18n, handle)) => (i18n, Some(handle)),
                None => (I18nContext::detached(), None),
            };

        TopBar {
            i18n,
            _i18n_handle: handle,
            preset_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.sync_preset_select(&ctx.props().size_preset);
    }
}
