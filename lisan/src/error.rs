//! Errors reported by the switcher and its backends.

use crate::locale::Locale;

/// The error type of this crate.
#[derive(Debug)]
pub enum Error {
    /// The translation resource of a locale could not be fetched.
    Fetch {
        /// The locale being fetched.
        locale: Locale,
        /// What went wrong.
        msg: String,
    },
    /// The translation resource is not a JSON object.
    Parse {
        /// The locale being parsed.
        locale: Locale,
        /// What went wrong.
        msg: String,
    },
    /// Even the primary locale could not be loaded.
    ///
    /// The translation table is left empty when this happens.
    FallbackFailed {
        /// The failure of the primary locale.
        source: Box<Error>,
    },
    /// A locale code that is not supported.
    UnknownLocale(String),
    /// A backend operation failed.
    BackendError {
        /// The error message.
        msg: String,
        /// The underlying error, if any.
        err: Option<Box<dyn std::error::Error>>,
    },
}

impl Error {
    /// Create a `BackendError` with only a message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendError {
            msg: msg.into(),
            err: None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch { locale, msg } => {
                write!(f, "Cannot fetch translations for {:?}: {}", locale.code(), msg)?;
            }
            Self::Parse { locale, msg } => {
                write!(f, "Illegal translations for {:?}: {}", locale.code(), msg)?;
            }
            Self::FallbackFailed { source } => {
                write!(f, "The fallback locale cannot be loaded ({})", source)?;
            }
            Self::UnknownLocale(code) => {
                write!(f, "Unsupported locale {:?}", code)?;
            }
            Self::BackendError { msg, err } => {
                if let Some(err) = err {
                    write!(f, "Backend error: {} ({})", msg, err.to_string())?;
                } else {
                    write!(f, "Backend error: {}", msg)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FallbackFailed { source } => Some(source.as_ref()),
            Self::BackendError { err, .. } => err.as_deref(),
            _ => None,
        }
    }
}
