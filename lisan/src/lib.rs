//! Bilingual (Arabic and English) site behavior.
//!
//! The core piece is the `switcher::LocaleSwitcher` :
//! it loads the translation table of the active locale, writes it to every element tagged with a key,
//! sets the document direction, and remembers the chosen locale.
//! Around it, `page::Site` wires the notifications, the forms and the scroll effects of the site.
//!
//! Everything touching the document goes through a `backend::Backend` .
//! The browser backend is in the `lisan-dom` crate;
//! `backend::mem::MemBackend` runs the same logic without a browser.

pub mod backend;
pub mod config;
pub mod effects;
pub mod error;
pub mod forms;
pub mod locale;
pub mod notice;
pub mod page;
pub mod switcher;
pub mod table;
pub mod timing;

pub use error::Error;
pub use locale::{Direction, Locale};
pub use page::Site;
pub use switcher::{LoadOutcome, LocaleSwitcher};
pub use table::TranslationTable;

pub mod prelude {
    pub use super::backend::{Backend, BackendElement};
    pub use super::config::SiteConfig;
    pub use super::{Error, Locale, LocaleSwitcher, Site};
}
