//! The translation table of a locale.

use rustc_hash::FxHashMap;

use crate::{error::Error, locale::Locale};

/// The key to string mapping of one locale.
///
/// A table always belongs to exactly one locale.
/// It is replaced as a whole when the locale changes and never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    locale: Locale,
    entries: FxHashMap<String, String>,
}

impl TranslationTable {
    /// An empty table.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            entries: FxHashMap::default(),
        }
    }

    /// Build a table from key-value pairs.
    pub fn from_entries(
        locale: Locale,
        entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            locale,
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a translation resource.
    ///
    /// The resource must be a JSON object.
    /// Numbers and booleans are kept as their JSON text.
    /// Other non-string values are skipped with a warning.
    pub fn parse(locale: Locale, src: &str) -> Result<Self, Error> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(src).map_err(|err| Error::Parse {
                locale,
                msg: err.to_string(),
            })?;
        let mut entries = FxHashMap::default();
        entries.reserve(map.len());
        for (key, value) in map {
            let text = match value {
                serde_json::Value::String(x) => x,
                serde_json::Value::Number(x) => x.to_string(),
                serde_json::Value::Bool(x) => x.to_string(),
                x => {
                    log::warn!("Skipped the non-text value of {:?} in {}: {}", key, locale, x);
                    continue;
                }
            };
            entries.insert(key, text);
        }
        Ok(Self { locale, entries })
    }

    /// The locale this table belongs to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|x| x.as_str())
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|x| x.as_str())
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
