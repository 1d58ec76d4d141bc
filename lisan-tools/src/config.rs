use std::{
    env,
    path::{Path, PathBuf},
};

use lisan::Locale;

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lisan.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct ToolsConfig {
    /// The directory containing `<code>.json` for every locale.
    pub lang_dir: PathBuf,
    /// The locales to check.
    pub locales: Vec<Locale>,
    /// Keys that every locale must have.
    pub required_keys: Vec<String>,
    /// HTML pages whose `data-key` attributes must be translated.
    pub pages: Vec<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            lang_dir: PathBuf::from("lang"),
            locales: Locale::ALL.to_vec(),
            required_keys: Vec::new(),
            pages: Vec::new(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Default)]
struct LisanManifest {
    #[serde(default)]
    check: CheckManifest,
}

#[derive(serde::Deserialize, Debug, Default)]
struct CheckManifest {
    #[serde(default)]
    lang_dir: Option<String>,
    #[serde(default)]
    locales: Option<Vec<Locale>>,
    #[serde(default)]
    required_keys: Vec<String>,
    #[serde(default)]
    pages: Vec<String>,
}

impl ToolsConfig {
    /// Parse the content of a `lisan.toml` .
    ///
    /// Relative paths are resolved against `base_dir` .
    /// The `LISAN_LANG_DIR` environment variable overrides `lang_dir` .
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, String> {
        let manifest: LisanManifest = toml::from_str(content).map_err(|err| err.to_string())?;
        let CheckManifest {
            lang_dir,
            locales,
            required_keys,
            pages,
        } = manifest.check;
        let lang_dir = env::var("LISAN_LANG_DIR")
            .ok()
            .or(lang_dir)
            .map(|s| base_dir.join(s))
            .unwrap_or_else(|| base_dir.join("lang"));
        Ok(Self {
            lang_dir,
            locales: locales.unwrap_or_else(|| Locale::ALL.to_vec()),
            required_keys,
            pages: pages.into_iter().map(|s| base_dir.join(s)).collect(),
        })
    }

    /// Read a configuration file, or get the default configuration if it does not exist.
    pub fn read(path: &Path) -> Result<Self, String> {
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Read configuration from {}", path.display());
                Self::parse(&content, base_dir)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {}, using the defaults", path.display());
                Self::parse("", base_dir)
            }
            Err(err) => Err(format!("Cannot read {}: {}", path.display(), err)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_manifest() {
        let config = ToolsConfig::parse(
            r#"
                [check]
                lang_dir = "site/lang"
                locales = ["en"]
                required_keys = ["brand_name"]
                pages = ["site/index.html"]
            "#,
            Path::new("/srv"),
        )
        .unwrap();
        if env::var("LISAN_LANG_DIR").is_err() {
            assert_eq!(config.lang_dir, PathBuf::from("/srv/site/lang"));
        }
        assert_eq!(config.locales, vec![Locale::En]);
        assert_eq!(config.required_keys, vec!["brand_name".to_string()]);
        assert_eq!(config.pages, vec![PathBuf::from("/srv/site/index.html")]);
    }

    #[test]
    fn empty_manifest() {
        let config = ToolsConfig::parse("", Path::new("")).unwrap();
        assert_eq!(config.locales, Locale::ALL.to_vec());
        assert!(config.required_keys.is_empty());
        assert!(ToolsConfig::parse("[check]\nlocales = [\"fr\"]", Path::new("")).is_err());
    }
}
