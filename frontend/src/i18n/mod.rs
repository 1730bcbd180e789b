//! Translation service for the designer UI.
//!
//! Locale catalogs are embedded JSON files (`frontend/locales/*.json`) whose
//! nested objects are flattened into dotted keys such as
//! `tooltips.topbar.save`. The shell owns the current [`Language`] and
//! publishes an [`I18nContext`] through a Yew `ContextProvider`; components
//! subscribe to it and call [`I18nContext::t`].
//!
//! [`Language`]: common::model::language::Language

mod catalog;
mod context;

pub use catalog::{Catalog, I18nError};
pub use context::I18nContext;
