use std::collections::HashMap;

use common::model::language::Language;
use serde_json::Value;
use thiserror::Error;

const RU_SOURCE: &str = include_str!("../../locales/ru.json");
const EN_SOURCE: &str = include_str!("../../locales/en.json");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("locale `{language}` is not valid JSON: {source}")]
    Parse {
        language: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("locale `{0}` must be a JSON object at the root")]
    NotAnObject(&'static str),
}

/// Flattened translation entries for every known language.
#[derive(Debug, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Loads the catalogs embedded at compile time.
    pub fn load() -> Result<Self, I18nError> {
        Self::from_sources(&[(Language::Ru, RU_SOURCE), (Language::En, EN_SOURCE)])
    }

    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut entries = HashMap::new();
        for &(language, source) in sources {
            entries.insert(language, parse_locale(language, source)?);
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, HashMap::len)
    }
}

fn parse_locale(language: Language, source: &str) -> Result<HashMap<String, String>, I18nError> {
    let root: Value = serde_json::from_str(source).map_err(|source| I18nError::Parse {
        language: language.code(),
        source,
    })?;

    if !root.is_object() {
        return Err(I18nError::NotAnObject(language.code()));
    }

    let mut table = HashMap::new();
    flatten("", &root, &mut table);
    Ok(table)
}

/// Walks nested objects, joining keys with `.`. Only string leaves are kept.
fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogs_load() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.lookup(Language::En, "topbar.save"), Some("Save"));
        assert_eq!(catalog.lookup(Language::Ru, "topbar.save"), Some("Сохранить"));
        assert_eq!(catalog.len(Language::En), catalog.len(Language::Ru));
    }

    #[test]
    fn nested_objects_flatten_to_dotted_keys() {
        let catalog = Catalog::from_sources(&[(
            Language::En,
            r#"{"a": {"b": {"c": "deep"}, "d": "shallow"}, "n": 3, "list": ["x"]}"#,
        )])
        .unwrap();

        assert_eq!(catalog.lookup(Language::En, "a.b.c"), Some("deep"));
        assert_eq!(catalog.lookup(Language::En, "a.d"), Some("shallow"));
        assert_eq!(catalog.lookup(Language::En, "n"), None);
        assert_eq!(catalog.len(Language::En), 2);
    }

    #[test]
    fn unknown_language_has_no_entries() {
        let catalog = Catalog::from_sources(&[(Language::En, r#"{"k": "v"}"#)]).unwrap();
        assert_eq!(catalog.lookup(Language::Ru, "k"), None);
        assert_eq!(catalog.len(Language::Ru), 0);
    }

    #[test]
    fn malformed_locale_is_an_error() {
        let result = Catalog::from_sources(&[(Language::Ru, "{ not json")]);
        assert!(matches!(result, Err(I18nError::Parse { language: "ru", .. })));
    }

    #[test]
    fn non_object_root_is_an_error() {
        let result = Catalog::from_sources(&[(Language::En, r#"["topbar"]"#)]);
        assert!(matches!(result, Err(I18nError::NotAnObject("en"))));
    }
}
