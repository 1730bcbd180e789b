use std::rc::Rc;

use common::model::language::Language;
use yew::Callback;

use super::Catalog;

/// Value published to the component tree by the designer shell.
///
/// Equality is by language, catalog identity and callback identity, so
/// subscribers re-render only when the shell actually switches language.
#[derive(Clone, Debug)]
pub struct I18nContext {
    pub language: Language,
    pub set_language: Callback<Language>,
    catalog: Rc<Catalog>,
}

impl PartialEq for I18nContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && self.set_language == other.set_language
    }
}

impl I18nContext {
    pub fn new(language: Language, catalog: Rc<Catalog>, set_language: Callback<Language>) -> Self {
        Self {
            language,
            set_language,
            catalog,
        }
    }

    /// Context used when a component is mounted outside any provider:
    /// empty catalog, default language, language changes go nowhere.
    pub fn detached() -> Self {
        Self::new(Language::default(), Rc::new(Catalog::default()), Callback::noop())
    }

    pub fn translate(&self, key: &str) -> Option<&str> {
        self.catalog.lookup(self.language, key)
    }

    /// Translated text for `key`, or the key itself when it has no entry.
    pub fn t(&self, key: &str) -> String {
        self.translate(key).unwrap_or(key).to_string()
    }
}
