//! Checks that the translation resources agree with each other and with the pages.

use std::{fmt, path::Path};

use lisan::{Locale, TranslationTable};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::ToolsConfig;

/// A problem found in the resources.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Problem {
    /// The resource of a locale cannot be read or parsed.
    Unreadable { locale: Locale, msg: String },
    /// A key that other locales or pages use is missing from a locale.
    Missing {
        locale: Locale,
        key: String,
        wanted_by: String,
    },
    /// A key is present with an empty string.
    Empty { locale: Locale, key: String },
    /// A page cannot be read.
    UnreadablePage { page: String, msg: String },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { locale, msg } => write!(f, "[{}] unreadable: {}", locale, msg),
            Self::Missing {
                locale,
                key,
                wanted_by,
            } => write!(f, "[{}] missing {:?} (used by {})", locale, key, wanted_by),
            Self::Empty { locale, key } => write!(f, "[{}] empty {:?}", locale, key),
            Self::UnreadablePage { page, msg } => write!(f, "[page] {} unreadable: {}", page, msg),
        }
    }
}

/// The result of a check.
#[derive(Debug, Default)]
pub struct Report {
    /// The number of keys in each readable locale.
    pub sizes: Vec<(Locale, usize)>,
    /// All problems, sorted.
    pub problems: Vec<Problem>,
}

impl Report {
    /// Whether no problem is found.
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (locale, size) in self.sizes.iter() {
            writeln!(f, "{}: {} keys", locale, size)?;
        }
        for p in self.problems.iter() {
            writeln!(f, "{}", p)?;
        }
        if self.is_ok() {
            writeln!(f, "OK")?;
        } else {
            writeln!(f, "{} problem(s) found", self.problems.len())?;
        }
        Ok(())
    }
}

/// Read the table of a locale from `<dir>/<code>.json` .
pub fn read_table(dir: &Path, locale: Locale) -> Result<TranslationTable, String> {
    let path = dir.join(format!("{}.json", locale.code()));
    let src = std::fs::read_to_string(&path)
        .map_err(|err| format!("cannot read {}: {}", path.display(), err))?;
    TranslationTable::parse(locale, &src).map_err(|err| err.to_string())
}

/// Collect the quoted values of the `data-key` attributes in an HTML source.
///
/// The attribute name must follow whitespace, and `=` may be surrounded by whitespace.
pub fn page_keys(html: &str) -> Vec<String> {
    const ATTR: &str = "data-key";
    let mut ret = vec![];
    let mut rest = html;
    while let Some(pos) = rest.find(ATTR) {
        let after_space = rest[..pos]
            .chars()
            .next_back()
            .map_or(false, char::is_whitespace);
        rest = &rest[(pos + ATTR.len())..];
        if !after_space {
            continue;
        }
        let value = match rest.trim_start().strip_prefix('=') {
            Some(x) => x.trim_start(),
            None => continue,
        };
        let quote = match value.chars().next() {
            Some(c @ ('"' | '\'')) => c,
            _ => continue,
        };
        let value = &value[1..];
        if let Some(end) = value.find(quote) {
            ret.push(value[..end].to_string());
            rest = &value[(end + 1)..];
        }
    }
    ret
}

/// Check the tables against each other.
///
/// Every key of any table, every required key, and every key used by a page
/// must be present in every table.
pub fn check_tables(
    tables: &[TranslationTable],
    required_keys: &[String],
    page_keys: &[(String, Vec<String>)],
) -> Vec<Problem> {
    let mut wanted: FxHashMap<&str, String> = FxHashMap::default();
    for key in required_keys {
        wanted.entry(key.as_str()).or_insert_with(|| "the configuration".into());
    }
    for (page, keys) in page_keys {
        for key in keys {
            wanted.entry(key.as_str()).or_insert_with(|| page.clone());
        }
    }
    for table in tables {
        for key in table.keys() {
            wanted
                .entry(key)
                .or_insert_with(|| format!("{}.json", table.locale().code()));
        }
    }
    let mut problems = vec![];
    for table in tables {
        let present: FxHashSet<&str> = table.keys().collect();
        for (key, wanted_by) in wanted.iter() {
            if !present.contains(key) {
                problems.push(Problem::Missing {
                    locale: table.locale(),
                    key: key.to_string(),
                    wanted_by: wanted_by.clone(),
                });
            }
        }
        for (key, value) in table.iter() {
            if value.trim().is_empty() {
                problems.push(Problem::Empty {
                    locale: table.locale(),
                    key: key.to_string(),
                });
            }
        }
    }
    problems.sort();
    problems
}

/// Run all checks of a configuration.
pub fn run(config: &ToolsConfig) -> Report {
    let mut report = Report::default();
    let mut tables = vec![];
    for locale in config.locales.iter().copied() {
        match read_table(&config.lang_dir, locale) {
            Ok(table) => {
                log::debug!("Read {} keys for {}", table.len(), locale);
                report.sizes.push((locale, table.len()));
                tables.push(table);
            }
            Err(msg) => report.problems.push(Problem::Unreadable { locale, msg }),
        }
    }
    let mut pages = vec![];
    for page in config.pages.iter() {
        let name = page.display().to_string();
        match std::fs::read_to_string(page) {
            Ok(html) => pages.push((name, page_keys(&html))),
            Err(err) => report.problems.push(Problem::UnreadablePage {
                page: name,
                msg: err.to_string(),
            }),
        }
    }
    report
        .problems
        .extend(check_tables(&tables, &config.required_keys, &pages));
    report.problems.sort();
    report
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(locale: Locale, entries: &[(&str, &str)]) -> TranslationTable {
        TranslationTable::from_entries(
            locale,
            entries.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn keys_in_pages() {
        let html = r#"<h1 data-key="hero_title">x</h1><input data-key='email_placeholder'><p data-key=bare>"#;
        assert_eq!(
            page_keys(html),
            vec!["hero_title".to_string(), "email_placeholder".to_string()]
        );
        let html = "<p data-key = \"spaced\"></p><p\n\tdata-key=\"wrapped\"></p>\
            <p xdata-key=\"prefixed\"></p><kbd data-keyboard=\"other\"></kbd><p>data-key=\"text\"</p>";
        assert_eq!(
            page_keys(html),
            vec!["spaced".to_string(), "wrapped".to_string()]
        );
    }

    #[test]
    fn tables_must_agree() {
        let ar = table(Locale::Ar, &[("brand_name", "الخوارزمي"), ("only_ar", "x")]);
        let en = table(Locale::En, &[("brand_name", "Al-Khwarizmi"), ("blank", " ")]);
        let pages = vec![("index.html".to_string(), vec!["brand_name".to_string(), "nav_home".to_string()])];
        let problems = check_tables(&[ar, en], &["title".to_string()], &pages);
        assert_eq!(
            problems,
            vec![
                Problem::Missing {
                    locale: Locale::Ar,
                    key: "blank".into(),
                    wanted_by: "en.json".into(),
                },
                Problem::Missing {
                    locale: Locale::Ar,
                    key: "nav_home".into(),
                    wanted_by: "index.html".into(),
                },
                Problem::Missing {
                    locale: Locale::Ar,
                    key: "title".into(),
                    wanted_by: "the configuration".into(),
                },
                Problem::Missing {
                    locale: Locale::En,
                    key: "nav_home".into(),
                    wanted_by: "index.html".into(),
                },
                Problem::Missing {
                    locale: Locale::En,
                    key: "only_ar".into(),
                    wanted_by: "ar.json".into(),
                },
                Problem::Missing {
                    locale: Locale::En,
                    key: "title".into(),
                    wanted_by: "the configuration".into(),
                },
                Problem::Empty {
                    locale: Locale::En,
                    key: "blank".into(),
                },
            ]
        );
    }
}
