//! lisan: bilingual site behavior
//!
//! This is the *DOM binding* of the crate.
//! It implements the `lisan::backend::Backend` on `web-sys` and provides the wasm entry point.
//!
//! ### Quick Start
//!
//! Build this crate with `wasm-pack build --target web` and load it from the page.
//! The entry point waits for the document, then wires the whole site and loads `lang/<code>.json` .
//!
//! The configuration can be changed with a JSON script element in the page:
//!
//! ```html
//! <script type="application/json" id="lisan-config">
//!   { "switcher": { "resource_url": "/static/lang/{code}.json" } }
//! </script>
//! ```
//!
//! To use the backend in another entry point:
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use lisan::prelude::*;
//! use lisan_dom::DomBackend;
//!
//! let backend = Rc::new(DomBackend::new().unwrap());
//! let site = Site::new(backend, SiteConfig::default());
//! lisan_dom::async_task(async move {
//!     let _ = site.start().await;
//!     // leak the site, so that event callbacks still work
//!     std::mem::forget(site);
//! });
//! ```

#![warn(missing_docs)]

use std::{cell::RefCell, rc::Rc};

use futures::{future::LocalBoxFuture, FutureExt};
use lisan::{
    backend::{Backend, EventDetail, EventKind, PointerPos, WindowEventKind},
    config::SiteConfig,
    error::Error,
    page::Site,
};
use wasm_bindgen::{prelude::*, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

mod element;
pub use element::DomElement;
mod widgets;

/// The id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "lisan-config";

fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(s) = err.as_string() {
        s
    } else {
        "(JavaScript Error)".into()
    }
}

pub(crate) fn js_error(msg: impl Into<String>, err: JsValue) -> Error {
    Error::BackendError {
        msg: format!("{}: {}", msg.into(), js_error_message(&err)),
        err: None,
    }
}

fn log_js_error(err: &JsValue) {
    log::error!("{}", js_error_message(err));
}

/// A common async runner for DOM environment
#[inline]
pub fn async_task(fut: impl 'static + std::future::Future<Output = ()>) {
    wasm_bindgen_futures::spawn_local(fut);
}

/// A DOM backend
pub struct DomBackend {
    window: web_sys::Window,
    document: web_sys::Document,
    listeners: RefCell<Vec<Closure<dyn Fn(web_sys::Event)>>>,
}

impl DomBackend {
    /// Create a backend on the current window and document.
    pub fn new() -> Result<Self, Error> {
        let window =
            web_sys::window().ok_or_else(|| Error::backend("Cannot init DOM backend outside web page environment"))?;
        let document = window
            .document()
            .ok_or_else(|| Error::backend("Cannot init DOM backend when document is not ready"))?;
        Ok(Self {
            window,
            document,
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// The window.
    pub fn window(&self) -> &web_sys::Window {
        &self.window
    }

    /// The document.
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn add_listener(
        &self,
        target: &web_sys::EventTarget,
        name: &str,
        cb: Closure<dyn Fn(web_sys::Event)>,
    ) -> Result<(), Error> {
        target
            .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
            .map_err(|err| js_error(format!("Cannot listen to {:?}", name), err))?;
        self.listeners.borrow_mut().push(cb);
        Ok(())
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        match self.window.local_storage() {
            Ok(x) => x,
            Err(err) => {
                log_js_error(&err);
                None
            }
        }
    }

    /// Read the site configuration from the `#lisan-config` script element.
    ///
    /// The default configuration is used if the element is missing or illegal.
    pub fn site_config(&self) -> SiteConfig {
        let src = match self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|x| x.text_content())
        {
            Some(x) => x,
            None => return SiteConfig::default(),
        };
        serde_json::from_str(&src).unwrap_or_else(|err| {
            log::error!("Illegal configuration in #{}: {}", CONFIG_ELEMENT_ID, err);
            SiteConfig::default()
        })
    }
}

async fn fetch_text(window: web_sys::Window, url: String) -> Result<String, Error> {
    let resp = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|err| js_error(format!("GET {} failed", url), err))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| Error::backend(format!("GET {} did not return a response", url)))?;
    if !resp.ok() {
        return Err(Error::backend(format!(
            "GET {} returned status {}",
            url,
            resp.status()
        )));
    }
    let text = resp
        .text()
        .map_err(|err| js_error(format!("Cannot read the body of {}", url), err))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|err| js_error(format!("Cannot read the body of {}", url), err))?;
    text.as_string()
        .ok_or_else(|| Error::backend(format!("The body of {} is not a text", url)))
}

impl Backend for DomBackend {
    type Element = DomElement;

    fn async_task(fut: impl 'static + std::future::Future<Output = ()>) {
        async_task(fut);
    }

    fn fetch_text(&self, url: &str) -> LocalBoxFuture<'static, Result<String, Error>> {
        fetch_text(self.window.clone(), url.to_string()).boxed_local()
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let window = self.window.clone();
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let ret = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            );
            if let Err(err) = ret {
                log_js_error(&err);
            }
        });
        async move {
            if let Err(err) = JsFuture::from(promise).await {
                log_js_error(&err);
            }
        }
        .boxed_local()
    }

    fn now(&self) -> f64 {
        match self.window.performance() {
            Some(x) => x.now(),
            None => js_sys::Date::now(),
        }
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        let storage = self.storage()?;
        match storage.get_item(key) {
            Ok(x) => x,
            Err(err) => {
                log_js_error(&err);
                None
            }
        }
    }

    fn store_preference(&self, key: &str, value: &str) -> Result<(), Error> {
        let storage = self
            .storage()
            .ok_or_else(|| Error::backend("The local storage is not available"))?;
        storage
            .set_item(key, value)
            .map_err(|err| js_error(format!("Cannot store {:?}", key), err))
    }

    fn root_element(&self) -> Option<DomElement> {
        self.document.document_element().map(DomElement)
    }

    fn body(&self) -> Option<DomElement> {
        self.document.body().map(|x| DomElement(x.into()))
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.document.get_element_by_id(id).map(DomElement)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<DomElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(x) => x,
            Err(err) => {
                log::warn!("{}", js_error(format!("Illegal selector {:?}", selector), err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(DomElement)
            .collect()
    }

    fn create_element(&self, tag_name: &str) -> Result<DomElement, Error> {
        self.document
            .create_element(tag_name)
            .map(DomElement)
            .map_err(|err| js_error(format!("Cannot create <{}>", tag_name), err))
    }

    fn listen(
        &self,
        target: &DomElement,
        kind: EventKind,
        handler: Box<dyn 'static + Fn(&EventDetail)>,
    ) -> Result<(), Error> {
        let cb = Closure::new(move |ev: web_sys::Event| {
            let pointer = ev.dyn_ref::<web_sys::MouseEvent>().map(|ev| PointerPos {
                x: ev.client_x() as f64,
                y: ev.client_y() as f64,
            });
            let detail = EventDetail::new(pointer);
            handler(&detail);
            if detail.default_prevented() {
                ev.prevent_default();
            }
        });
        self.add_listener(target.dom(), kind.dom_name(), cb)
    }

    fn listen_window(
        &self,
        kind: WindowEventKind,
        handler: Box<dyn 'static + Fn()>,
    ) -> Result<(), Error> {
        let cb = Closure::new(move |_: web_sys::Event| handler());
        self.add_listener(&self.window, kind.dom_name(), cb)
    }

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(x) => x,
            Err(err) => {
                log_js_error(&err);
                0.
            }
        }
    }

    fn scroll_to_top(&self) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn init_scroll_animations(&self) {
        if let Err(err) = widgets::aos_init(&self.window) {
            log::error!("{}", err);
        }
    }

    fn refresh_scroll_animations(&self) {
        if let Err(err) = widgets::aos_refresh(&self.window) {
            log::error!("{}", err);
        }
    }

    fn show_toast(&self, toast: &DomElement) -> Result<(), Error> {
        widgets::bootstrap_new_and_call(&self.window, "Toast", toast.dom(), "show")
    }

    fn show_modal(&self, modal: &DomElement) -> Result<(), Error> {
        widgets::bootstrap_new_and_call(&self.window, "Modal", modal.dom(), "show")
    }

    fn hide_modal(&self, modal: &DomElement) -> Result<(), Error> {
        widgets::bootstrap_instance_call(&self.window, "Modal", modal.dom(), "hide")
    }
}

/// Create the backend and the site, then start the site.
///
/// The site is leaked so that its event handlers keep working.
pub fn start_site() -> Result<(), Error> {
    let backend = Rc::new(DomBackend::new()?);
    let config = backend.site_config();
    let site = Site::new(backend, config);
    async_task(async move {
        if let Err(err) = site.start().await {
            log::error!("{}", err);
        }
        std::mem::forget(site);
    });
    Ok(())
}

/// The wasm entry point: set up logging, then start the site once the document is parsed.
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(x) => x,
        None => {
            log::error!("No document to start on");
            return;
        }
    };
    if document.ready_state() != "loading" {
        if let Err(err) = start_site() {
            log::error!("{}", err);
        }
        return;
    }
    let cb = Closure::once_into_js(move || {
        if let Err(err) = start_site() {
            log::error!("{}", err);
        }
    });
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref()) {
        log_js_error(&err);
    }
}
