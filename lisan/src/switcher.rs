//! The language switcher.
//!
//! A `LocaleSwitcher` owns the active locale and its translation table.
//! It is created explicitly with a backend and shared as an `Rc` with whatever needs translations.
//!
//! ### Missing keys
//!
//! `LocaleSwitcher::translate` is the only lookup; it returns `None` for a missing key.
//! A key mapped to an empty string counts as missing.
//! The two presentations built on it differ on purpose:
//!
//! * `LocaleSwitcher::apply` leaves an element with a missing key untouched,
//!   so the text already in the markup stays visible;
//! * `LocaleSwitcher::get_translation` returns the key itself,
//!   so that code building strings always gets something printable.
//!
//! ### Loads
//!
//! Every load takes a new generation number.
//! When a load completes after a newer one has started, its result is dropped,
//! so the table never goes back to an older switch.
//!
//! The active locale is always the locale of the current table.
//! The locale a switch asks for is kept apart until its table arrives.

use std::{cell::RefCell, rc::Rc};

use crate::{
    backend::{Backend, BackendElement, EventDetail, EventKind},
    config::SwitcherConfig,
    error::Error,
    locale::Locale,
    notice::{self, Notice},
    table::TranslationTable,
};

/// What happened to a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The table of this locale is now active.
    ///
    /// It can differ from the requested locale when the primary locale was used as a fallback.
    Loaded(Locale),
    /// A newer load started before this one completed, so the result is dropped.
    Stale,
}

struct SwitcherState {
    requested: Locale,
    table: TranslationTable,
    generation: u64,
}

/// The language switcher.
pub struct LocaleSwitcher<B: Backend> {
    backend: Rc<B>,
    config: SwitcherConfig,
    state: RefCell<SwitcherState>,
}

impl<B: Backend> LocaleSwitcher<B> {
    /// Create a switcher.
    ///
    /// The locale comes from the stored preference, or the primary locale on first visit.
    /// The table is empty until `initialize` or `load` is called.
    pub fn new(backend: Rc<B>, config: SwitcherConfig) -> Rc<Self> {
        let locale = match backend.load_preference(&config.storage_key) {
            None => Locale::PRIMARY,
            Some(code) => code.parse().unwrap_or_else(|err| {
                log::warn!("Ignored the stored language preference: {}", err);
                Locale::PRIMARY
            }),
        };
        log::debug!("Language switcher created with locale {}", locale);
        Rc::new(Self {
            backend,
            config,
            state: RefCell::new(SwitcherState {
                requested: locale,
                table: TranslationTable::empty(locale),
                generation: 0,
            }),
        })
    }

    /// The backend.
    pub fn backend(&self) -> &Rc<B> {
        &self.backend
    }

    /// The configuration.
    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    /// The active locale, i.e. the locale of the current table.
    ///
    /// While a switch is loading, this is still the previous locale.
    pub fn locale(&self) -> Locale {
        self.state.borrow().table.locale()
    }

    /// The locale last asked for by a switch or a load.
    ///
    /// It equals `locale` unless a load is in progress.
    pub fn requested_locale(&self) -> Locale {
        self.state.borrow().requested
    }

    /// The generation of the latest load.
    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Visit the current translation table.
    pub fn with_table<R>(&self, f: impl FnOnce(&TranslationTable) -> R) -> R {
        f(&self.state.borrow().table)
    }

    /// Look up a key in the current table.
    pub fn translate(&self, key: &str) -> Option<String> {
        self.state
            .borrow()
            .table
            .get(key)
            .filter(|x| !x.is_empty())
            .map(|x| x.to_string())
    }

    /// Look up a key in the current table, or get the key itself if it is missing.
    pub fn get_translation(&self, key: &str) -> String {
        self.translate(key).unwrap_or_else(|| key.to_string())
    }

    /// Show a notice in the toast widget.
    pub fn notify(&self, notice: &Notice) -> bool {
        notice::show(&*self.backend, &self.config.notice, notice)
    }

    /// Load the current locale, apply it, then make the toggle control switch locales.
    ///
    /// If no table can be loaded, an error notice is shown,
    /// the document is still applied (with the fallback direction and title),
    /// and the error is returned.
    pub async fn initialize(self: &Rc<Self>) -> Result<(), Error> {
        let ret = self.load(self.requested_locale()).await;
        match &ret {
            Ok(LoadOutcome::Stale) => {}
            Ok(LoadOutcome::Loaded(_)) => self.apply(),
            Err(err) => {
                log::error!("{}", err);
                self.apply();
                self.notify(&Notice::error(self.config.load_failed_message.as_str()));
            }
        }
        let wired = self.wire_toggle();
        ret?;
        wired
    }

    fn wire_toggle(self: &Rc<Self>) -> Result<(), Error> {
        let toggle = match self.backend.element_by_id(&self.config.toggle_id) {
            Some(x) => x,
            None => {
                log::warn!("No language toggle #{} found", self.config.toggle_id);
                return Ok(());
            }
        };
        let this = Rc::downgrade(self);
        self.backend.listen(
            &toggle,
            EventKind::Click,
            Box::new(move |_: &EventDetail| {
                if let Some(this) = this.upgrade() {
                    B::async_task(async move {
                        // failures are already logged and shown by `switch_locale`
                        let _ = this.switch_locale().await;
                    });
                }
            }),
        )
    }

    async fn fetch_table(&self, locale: Locale) -> Result<TranslationTable, Error> {
        let url = self.config.resource_url(locale);
        let src = self
            .backend
            .fetch_text(&url)
            .await
            .map_err(|err| Error::Fetch {
                locale,
                msg: err.to_string(),
            })?;
        TranslationTable::parse(locale, &src)
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.state.borrow().generation != generation
    }

    fn commit(&self, generation: u64, table: TranslationTable) -> LoadOutcome {
        if self.is_stale(generation) {
            log::debug!("Dropped stale translations for {}", table.locale());
            return LoadOutcome::Stale;
        }
        let locale = table.locale();
        let mut state = self.state.borrow_mut();
        state.requested = locale;
        state.table = table;
        LoadOutcome::Loaded(locale)
    }

    fn fail(&self, generation: u64, err: Error) -> Result<LoadOutcome, Error> {
        if self.is_stale(generation) {
            log::debug!("Dropped a stale failure: {}", err);
            return Ok(LoadOutcome::Stale);
        }
        let mut state = self.state.borrow_mut();
        state.requested = Locale::PRIMARY;
        state.table = TranslationTable::empty(Locale::PRIMARY);
        Err(Error::FallbackFailed {
            source: Box::new(err),
        })
    }

    /// Fetch the translation table of a locale and make it current.
    ///
    /// If the locale fails and it is not the primary locale,
    /// the current locale is forced to the primary locale (without touching the stored preference)
    /// and the primary locale is tried once.
    /// If the primary locale fails too, the table is left empty and `Error::FallbackFailed` is returned.
    pub async fn load(&self, locale: Locale) -> Result<LoadOutcome, Error> {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.requested = locale;
            state.generation += 1;
            state.generation
        };
        log::debug!("Loading translations for {} (generation {})", locale, generation);
        let err = match self.fetch_table(locale).await {
            Ok(table) => return Ok(self.commit(generation, table)),
            Err(err) => err,
        };
        if locale.is_primary() {
            return self.fail(generation, err);
        }
        log::error!("{}", err);
        if self.is_stale(generation) {
            return Ok(LoadOutcome::Stale);
        }
        log::warn!("Falling back to {}", Locale::PRIMARY);
        self.state.borrow_mut().requested = Locale::PRIMARY;
        match self.fetch_table(Locale::PRIMARY).await {
            Ok(table) => Ok(self.commit(generation, table)),
            Err(err) => self.fail(generation, err),
        }
    }

    /// Write the current locale and translations to the document.
    ///
    /// Calling it again without any change between calls has no further effect.
    pub fn apply(&self) {
        let locale = self.locale();
        let backend = &self.backend;
        let warn = |ret: Result<(), Error>| {
            if let Err(err) = ret {
                log::warn!("{}", err);
            }
        };
        if let Some(root) = backend.root_element() {
            warn(root.set_attribute("lang", locale.code()));
            warn(root.set_attribute("dir", locale.direction().as_str()));
        }
        if let Some(body) = backend.body() {
            warn(body.set_style("font-family", locale.font_family()));
        }
        let key_attr = &self.config.key_attribute;
        for elem in backend.query_selector_all(&format!("[{}]", key_attr)) {
            let value = match elem.attribute(key_attr).and_then(|key| self.translate(&key)) {
                Some(x) => x,
                None => continue,
            };
            if elem.field_kind().takes_placeholder() {
                warn(elem.set_attribute("placeholder", &value));
            } else {
                elem.set_text_content(&value);
            }
        }
        if let Some(toggle) = backend.element_by_id(&self.config.toggle_id) {
            warn(toggle.set_decorated_label(
                "i",
                &self.config.toggle_icon_class,
                locale.other().short_code(),
            ));
        }
        backend.refresh_scroll_animations();
        for slider in backend.query_selector_all(&self.config.slider_selector) {
            if locale.direction().is_rtl() {
                warn(slider.set_attribute("data-rtl", "true"));
            } else {
                warn(slider.remove_attribute("data-rtl"));
            }
        }
        let title = self
            .translate(&self.config.title_key)
            .unwrap_or_else(|| self.config.default_title.clone());
        backend.set_title(&title);
    }

    /// Switch to the locale other than the requested one.
    ///
    /// The new locale is stored before the table is fetched.
    /// The document and `locale` stay on the old translations until the fetch completes.
    /// A confirmation notice in the new locale is shown afterwards.
    pub async fn switch_locale(&self) -> Result<LoadOutcome, Error> {
        let next = self.requested_locale().other();
        log::info!("Switching language to {}", next);
        if let Err(err) = self
            .backend
            .store_preference(&self.config.storage_key, next.code())
        {
            log::warn!("Cannot store the language preference: {}", err);
        }
        match self.load(next).await {
            Ok(LoadOutcome::Stale) => Ok(LoadOutcome::Stale),
            Ok(LoadOutcome::Loaded(locale)) => {
                self.apply();
                self.notify(&Notice::info(locale.switched_message()));
                Ok(LoadOutcome::Loaded(locale))
            }
            Err(err) => {
                log::error!("{}", err);
                self.apply();
                self.notify(&Notice::error(self.config.load_failed_message.as_str()));
                Err(err)
            }
        }
    }
}
