use web_sys::HtmlSelectElement;
use yew::context::ContextHandle;
use yew::NodeRef;

use super::helpers::preset_to_sync;
use crate::i18n::I18nContext;

/// Runtime data of the `TopBar`.
///
/// Only the translation context subscription and DOM handles live here;
/// every displayed value comes from `TopBarProps`.
pub struct TopBar {
    pub i18n: I18nContext,
    pub _i18n_handle: Option<ContextHandle<I18nContext>>,

    /// The preset `<select>`. Once the user has picked an option the browser
    /// ignores later `selected` attribute changes, so its value is written
    /// back from the props after every render.
    pub preset_ref: NodeRef,
}

impl TopBar {
    /// Writes `size_preset` into the preset `<select>` when it shows anything else.
    pub fn sync_preset_select(&self, size_preset: &str) {
        if let Some(select) = self.preset_ref.cast::<HtmlSelectElement>() {
            if let Some(value) = preset_to_sync(&select.value(), size_preset) {
                select.set_value(value);
            }
        }
    }
}
