//! The supported locales.

use std::{fmt::Display, str::FromStr};

use crate::error::Error;

/// The text flow direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// The value of the document `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Whether the text flows from right to left.
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

/// A supported locale.
///
/// The site is bilingual.
/// `Ar` is the primary locale: it is the default on first visit
/// and the fallback when a translation resource cannot be loaded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Arabic.
    Ar,
    /// English.
    En,
}

impl Locale {
    /// The default and fallback locale.
    pub const PRIMARY: Locale = Locale::Ar;

    /// All supported locales, primary first.
    pub const ALL: [Locale; 2] = [Locale::Ar, Locale::En];

    /// The language code, used in the `lang` attribute, the resource path and the stored preference.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// The short code shown on the language toggle.
    pub fn short_code(self) -> &'static str {
        match self {
            Self::Ar => "AR",
            Self::En => "EN",
        }
    }

    /// The other supported locale.
    pub fn other(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Whether this is the primary locale.
    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }

    /// The text direction.
    pub fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    /// The font-family hint for the document body.
    pub fn font_family(self) -> &'static str {
        match self {
            Self::Ar => "'Cairo', sans-serif",
            Self::En => "'Inter', 'Roboto', sans-serif",
        }
    }

    /// The confirmation shown after switching to this locale, written in this locale.
    pub fn switched_message(self) -> &'static str {
        match self {
            Self::Ar => "تم تغيير اللغة إلى العربية",
            Self::En => "Language changed to English",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            x => Err(Error::UnknownLocale(x.to_string())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.code().fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
        }
        assert!(matches!("fr".parse::<Locale>(), Err(Error::UnknownLocale(x)) if x == "fr"));
    }

    #[test]
    fn toggling() {
        assert_eq!(Locale::PRIMARY.other(), Locale::En);
        assert_eq!(Locale::En.other(), Locale::Ar);
        assert!(Locale::Ar.direction().is_rtl());
        assert_eq!(Locale::En.direction().as_str(), "ltr");
        assert_eq!(Locale::default(), Locale::Ar);
    }
}
