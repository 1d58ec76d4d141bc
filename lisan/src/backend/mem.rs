//! A headless backend that keeps the document in memory.
//!
//! Besides implementing `Backend` , it lets the host drive everything the browser normally drives:
//! serving resources, holding requests open, dispatching events, scrolling and advancing the clock.
//!
//! Selectors support compound simple selectors only
//! (tag, `#id` , `.class` , `[attr]` , `[attr="v"]` , `[attr^="v"]` )
//! joined by commas.
//!
//! Async tasks spawned by `MemBackend::async_task` run on a thread-local pool.
//! Call `MemBackend::run_until_stalled` (or `MemBackend::advance` ) to drive them.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::{Rc, Weak},
};

use futures::{
    executor::{LocalPool, LocalSpawner},
    future::LocalBoxFuture,
    task::LocalSpawnExt,
    FutureExt,
};
use rustc_hash::FxHashMap;

use super::*;

thread_local! {
    static POOL: RefCell<LocalPool> = RefCell::new(LocalPool::new());
    static SPAWNER: LocalSpawner = POOL.with(|pool| pool.borrow().spawner());
}

enum MemChild {
    Element(MemElement),
    Text(String),
}

struct MemNode {
    tag_name: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    children: Vec<MemChild>,
    parent: Weak<RefCell<MemNode>>,
    value: String,
    rect: Rect,
    scrolled_into_view: usize,
    listeners: Vec<(EventKind, Rc<dyn Fn(&EventDetail)>)>,
}

/// An element of `MemBackend` .
#[derive(Clone)]
pub struct MemElement(Rc<RefCell<MemNode>>);

impl std::fmt::Debug for MemElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0.borrow().tag_name)
    }
}

impl PartialEq for MemElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MemElement {
    fn new(tag_name: &str) -> Self {
        Self(Rc::new(RefCell::new(MemNode {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: Vec::new(),
            classes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
            parent: Weak::new(),
            value: String::new(),
            rect: Rect::default(),
            scrolled_into_view: 0,
            listeners: Vec::new(),
        })))
    }

    /// The lower-case tag name.
    pub fn tag_name(&self) -> String {
        self.0.borrow().tag_name.clone()
    }

    /// The parent element.
    pub fn parent(&self) -> Option<MemElement> {
        self.0.borrow().parent.upgrade().map(MemElement)
    }

    /// The child elements.
    pub fn children(&self) -> Vec<MemElement> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|c| match c {
                MemChild::Element(e) => Some(e.clone()),
                MemChild::Text(_) => None,
            })
            .collect()
    }

    /// Set the current value of a form field.
    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    /// Set the bounding box.
    pub fn set_rect(&self, rect: Rect) {
        self.0.borrow_mut().rect = rect;
    }

    /// Get an inline style property.
    pub fn style(&self, property: &str) -> Option<String> {
        self.0
            .borrow()
            .style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.clone())
    }

    /// How many times `scroll_into_view` has been called.
    pub fn scrolled_into_view(&self) -> usize {
        self.0.borrow().scrolled_into_view
    }

    /// The serialized content.
    pub fn inner_html(&self) -> String {
        let mut ret = String::new();
        for child in self.0.borrow().children.iter() {
            match child {
                MemChild::Text(x) => ret.push_str(x),
                MemChild::Element(e) => ret.push_str(&e.outer_html()),
            }
        }
        ret
    }

    /// The serialized element.
    pub fn outer_html(&self) -> String {
        let mut ret = String::new();
        {
            let node = self.0.borrow();
            ret.push('<');
            ret.push_str(&node.tag_name);
            if !node.classes.is_empty() {
                ret.push_str(&format!(r#" class="{}""#, node.classes.join(" ")));
            }
            for (k, v) in node.attributes.iter() {
                ret.push_str(&format!(r#" {}="{}""#, k, v));
            }
            ret.push('>');
        }
        ret.push_str(&self.inner_html());
        ret.push_str(&format!("</{}>", self.0.borrow().tag_name));
        ret
    }

    /// Trigger the handlers of an event on this element.
    ///
    /// Returns the detail so that the caller can check `default_prevented` .
    pub fn dispatch(&self, kind: EventKind, pointer: Option<PointerPos>) -> EventDetail {
        let detail = EventDetail::new(pointer);
        let handlers: Vec<_> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, h)| h.clone())
            .collect();
        for h in handlers {
            h(&detail);
        }
        detail
    }

    /// Shorthand for dispatching a click.
    pub fn click(&self) -> EventDetail {
        self.dispatch(EventKind::Click, None)
    }

    fn descendants(&self, ret: &mut Vec<MemElement>) {
        for child in self.children() {
            ret.push(child.clone());
            child.descendants(ret);
        }
    }

    fn matches(&self, sel: &SimpleSelector) -> bool {
        if let Some(tag) = &sel.tag {
            if !tag.eq_ignore_ascii_case(&self.0.borrow().tag_name) {
                return false;
            }
        }
        if let Some(id) = &sel.id {
            if self.attribute("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !sel.classes.iter().all(|c| self.has_class(c)) {
            return false;
        }
        sel.attrs.iter().all(|(name, op)| {
            let v = match self.attribute(name) {
                None => return false,
                Some(v) => v,
            };
            match op {
                AttrOp::Exists => true,
                AttrOp::Equals(x) => v == *x,
                AttrOp::Prefix(x) => v.starts_with(x.as_str()),
            }
        })
    }

    fn select_descendants(&self, selector: &str) -> Vec<MemElement> {
        let list = match parse_selector_list(selector) {
            Some(x) => x,
            None => {
                log::warn!("Unsupported selector {:?}", selector);
                return Vec::new();
            }
        };
        let mut all = Vec::new();
        self.descendants(&mut all);
        all.into_iter()
            .filter(|e| list.iter().any(|sel| e.matches(sel)))
            .collect()
    }
}

impl BackendElement for MemElement {
    fn attribute(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        if name == "class" {
            return if node.classes.is_empty() {
                None
            } else {
                Some(node.classes.join(" "))
            };
        }
        node.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error> {
        if name == "class" {
            self.set_class_name(value);
            return Ok(());
        }
        let mut node = self.0.borrow_mut();
        if name == "value" {
            node.value = value.to_string();
        }
        match node.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), Error> {
        if name == "class" {
            self.0.borrow_mut().classes.clear();
        } else {
            self.0.borrow_mut().attributes.retain(|(k, _)| k != name);
        }
        Ok(())
    }

    fn field_kind(&self) -> FieldKind {
        match self.0.borrow().tag_name.as_str() {
            "textarea" => FieldKind::TextArea,
            "input" => match self.attribute("type").as_deref() {
                None | Some("text") => FieldKind::TextInput,
                Some("email") => FieldKind::EmailInput,
                Some(_) => FieldKind::Other,
            },
            _ => FieldKind::Other,
        }
    }

    fn text_content(&self) -> String {
        let mut ret = String::new();
        for child in self.0.borrow().children.iter() {
            match child {
                MemChild::Text(x) => ret.push_str(x),
                MemChild::Element(e) => ret.push_str(&e.text_content()),
            }
        }
        ret
    }

    fn set_text_content(&self, text: &str) {
        let old = std::mem::replace(
            &mut self.0.borrow_mut().children,
            vec![MemChild::Text(text.to_string())],
        );
        for child in old {
            if let MemChild::Element(e) = child {
                e.0.borrow_mut().parent = Weak::new();
            }
        }
    }

    fn set_decorated_label(
        &self,
        marker_tag: &str,
        marker_class: &str,
        text: &str,
    ) -> Result<(), Error> {
        let marker = MemElement::new(marker_tag);
        marker.set_class_name(marker_class);
        let old = std::mem::take(&mut self.0.borrow_mut().children);
        for child in old {
            if let MemChild::Element(e) = child {
                e.0.borrow_mut().parent = Weak::new();
            }
        }
        self.append_child(&marker)?;
        if !text.is_empty() {
            self.0
                .borrow_mut()
                .children
                .push(MemChild::Text(format!(" {}", text)));
        }
        Ok(())
    }

    fn value(&self) -> String {
        match self.0.borrow().tag_name.as_str() {
            "input" | "textarea" | "select" => self.0.borrow().value.clone(),
            _ => String::new(),
        }
    }

    fn set_class(&self, class: &str, enabled: bool) -> Result<(), Error> {
        let mut node = self.0.borrow_mut();
        let pos = node.classes.iter().position(|c| c == class);
        match (pos, enabled) {
            (None, true) => node.classes.push(class.to_string()),
            (Some(i), false) => {
                node.classes.remove(i);
            }
            _ => {}
        }
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.borrow_mut().classes = class_name.split_whitespace().map(|x| x.to_string()).collect();
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), Error> {
        let mut node = self.0.borrow_mut();
        match node.style.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value.to_string(),
            None => node.style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_disabled(&self, disabled: bool) -> Result<(), Error> {
        if disabled {
            self.set_attribute("disabled", "")
        } else {
            self.remove_attribute("disabled")
        }
    }

    fn disabled(&self) -> bool {
        self.attribute("disabled").is_some()
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.select_descendants(selector).into_iter().next()
    }

    fn append_child(&self, child: &Self) -> Result<(), Error> {
        if Rc::ptr_eq(&self.0, &child.0) {
            return Err(Error::backend("Cannot append an element to itself"));
        }
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0
            .borrow_mut()
            .children
            .push(MemChild::Element(child.clone()));
        Ok(())
    }

    fn remove(&self) {
        let parent = match self.parent() {
            None => return,
            Some(x) => x,
        };
        parent.0.borrow_mut().children.retain(|c| match c {
            MemChild::Element(e) => !Rc::ptr_eq(&e.0, &self.0),
            MemChild::Text(_) => true,
        });
        self.0.borrow_mut().parent = Weak::new();
    }

    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn reset_form(&self) {
        let mut all = Vec::new();
        self.descendants(&mut all);
        for e in all {
            let initial = e.attribute("value").unwrap_or_default();
            e.0.borrow_mut().value = initial;
        }
    }

    fn scroll_into_view(&self) {
        self.0.borrow_mut().scrolled_into_view += 1;
    }
}

#[derive(Debug, Default)]
struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, AttrOp)>,
}

#[derive(Debug)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

fn parse_selector_list(s: &str) -> Option<Vec<SimpleSelector>> {
    s.split(',').map(|x| parse_simple_selector(x.trim())).collect()
}

fn parse_simple_selector(s: &str) -> Option<SimpleSelector> {
    fn is_ident_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }
    fn take_ident(s: &str) -> (&str, &str) {
        let end = s.find(|c| !is_ident_char(c)).unwrap_or(s.len());
        s.split_at(end)
    }
    if s.is_empty() {
        return None;
    }
    let mut ret = SimpleSelector::default();
    let (tag, mut rest) = take_ident(s);
    if !tag.is_empty() {
        ret.tag = Some(tag.to_string());
    } else if let Some(r) = rest.strip_prefix('*') {
        rest = r;
    }
    while let Some(c) = rest.chars().next() {
        match c {
            '#' | '.' => {
                let (ident, r) = take_ident(&rest[1..]);
                if ident.is_empty() {
                    return None;
                }
                if c == '#' {
                    ret.id = Some(ident.to_string());
                } else {
                    ret.classes.push(ident.to_string());
                }
                rest = r;
            }
            '[' => {
                let end = rest.find(']')?;
                let inner = &rest[1..end];
                let unquote = |v: &str| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string();
                let attr = if let Some((name, v)) = inner.split_once("^=") {
                    (name.trim().to_string(), AttrOp::Prefix(unquote(v)))
                } else if let Some((name, v)) = inner.split_once('=') {
                    (name.trim().to_string(), AttrOp::Equals(unquote(v)))
                } else {
                    (inner.trim().to_string(), AttrOp::Exists)
                };
                ret.attrs.push(attr);
                rest = &rest[end + 1..];
            }
            _ => return None,
        }
    }
    Some(ret)
}

enum MemResource {
    Text(String),
    Status(u16),
    Held,
}

type PendingFetch = (String, Box<dyn FnOnce(Result<String, Error>)>);

/// A headless backend.
pub struct MemBackend {
    document: MemElement,
    body: MemElement,
    title: RefCell<String>,
    storage: RefCell<FxHashMap<String, String>>,
    resources: RefCell<FxHashMap<String, MemResource>>,
    pending_fetches: RefCell<VecDeque<PendingFetch>>,
    fetch_log: RefCell<Vec<String>>,
    clock: Cell<f64>,
    timers: RefCell<Vec<(f64, Box<dyn FnOnce(())>)>>,
    scroll_y: Cell<f64>,
    window_listeners: RefCell<Vec<(WindowEventKind, Rc<dyn Fn()>)>>,
    toasts: RefCell<Vec<String>>,
    modal_log: RefCell<Vec<String>>,
    widgets_missing: Cell<bool>,
    scroll_animations_initialized: Cell<bool>,
    scroll_animation_refreshes: Cell<usize>,
    scrolled_to_top: Cell<usize>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemBackend {
    /// Create a backend with an empty `<html><head></head><body></body></html>` document.
    pub fn new() -> Self {
        let document = MemElement::new("html");
        let head = MemElement::new("head");
        let body = MemElement::new("body");
        // appending fresh elements to a fresh parent cannot fail
        let _ = document.append_child(&head);
        let _ = document.append_child(&body);
        Self {
            document,
            body,
            title: RefCell::new(String::new()),
            storage: RefCell::new(FxHashMap::default()),
            resources: RefCell::new(FxHashMap::default()),
            pending_fetches: RefCell::new(VecDeque::new()),
            fetch_log: RefCell::new(Vec::new()),
            clock: Cell::new(0.),
            timers: RefCell::new(Vec::new()),
            scroll_y: Cell::new(0.),
            window_listeners: RefCell::new(Vec::new()),
            toasts: RefCell::new(Vec::new()),
            modal_log: RefCell::new(Vec::new()),
            widgets_missing: Cell::new(false),
            scroll_animations_initialized: Cell::new(false),
            scroll_animation_refreshes: Cell::new(0),
            scrolled_to_top: Cell::new(0),
        }
    }

    /// Run spawned tasks until none of them can make progress.
    pub fn run_until_stalled() {
        POOL.with(|pool| pool.borrow_mut().run_until_stalled());
    }

    /// Serve a resource.
    pub fn serve(&self, url: &str, body: impl Into<String>) {
        self.resources
            .borrow_mut()
            .insert(url.to_string(), MemResource::Text(body.into()));
    }

    /// Answer a resource with an error status.
    pub fn serve_status(&self, url: &str, status: u16) {
        self.resources
            .borrow_mut()
            .insert(url.to_string(), MemResource::Status(status));
    }

    /// Keep requests of a resource pending until `release` is called.
    pub fn hold(&self, url: &str) {
        self.resources
            .borrow_mut()
            .insert(url.to_string(), MemResource::Held);
    }

    /// Resolve the oldest pending request of a held resource.
    ///
    /// Returns `false` if there is no such request.
    pub fn release(&self, url: &str, response: Result<String, Error>) -> bool {
        let pos = self
            .pending_fetches
            .borrow()
            .iter()
            .position(|(u, _)| u == url);
        let cb = match pos.and_then(|i| self.pending_fetches.borrow_mut().remove(i)) {
            None => return false,
            Some((_, cb)) => cb,
        };
        cb(response);
        Self::run_until_stalled();
        true
    }

    /// All requested URLs in order.
    pub fn fetch_log(&self) -> Vec<String> {
        self.fetch_log.borrow().clone()
    }

    /// Move the clock forward, firing due timers and running tasks.
    ///
    /// Tasks that are already runnable run before the clock moves.
    pub fn advance(&self, ms: u32) {
        Self::run_until_stalled();
        self.clock.set(self.clock.get() + ms as f64);
        loop {
            let now = self.clock.get();
            let due = {
                let mut timers = self.timers.borrow_mut();
                timers.sort_by(|a, b| a.0.total_cmp(&b.0));
                let count = timers.iter().take_while(|(t, _)| *t <= now).count();
                timers.drain(..count).collect::<Vec<_>>()
            };
            if due.is_empty() {
                break;
            }
            for (_, cb) in due {
                cb(());
            }
            Self::run_until_stalled();
        }
    }

    /// The current document title.
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    /// The document element.
    pub fn document(&self) -> &MemElement {
        &self.document
    }

    /// Scroll the page and trigger the scroll handlers.
    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        self.trigger_window(WindowEventKind::Scroll);
    }

    /// Trigger the handlers of a window event.
    pub fn trigger_window(&self, kind: WindowEventKind) {
        let handlers: Vec<_> = self
            .window_listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, h)| h.clone())
            .collect();
        for h in handlers {
            h();
        }
    }

    /// The text content of every toast shown so far.
    pub fn toasts(&self) -> Vec<String> {
        self.toasts.borrow().clone()
    }

    /// Modal operations so far, like `show:someId` and `hide:someId` .
    pub fn modal_log(&self) -> Vec<String> {
        self.modal_log.borrow().clone()
    }

    /// Whether `init_scroll_animations` has been called.
    pub fn scroll_animations_initialized(&self) -> bool {
        self.scroll_animations_initialized.get()
    }

    /// How many times `refresh_scroll_animations` has been called.
    pub fn scroll_animation_refreshes(&self) -> usize {
        self.scroll_animation_refreshes.get()
    }

    /// How many times `scroll_to_top` has been called.
    pub fn scrolled_to_top(&self) -> usize {
        self.scrolled_to_top.get()
    }

    /// Make the toast and modal widgets fail, as if their script were not loaded.
    pub fn unload_widgets(&self) {
        self.widgets_missing.set(true);
    }

    fn check_widgets(&self) -> Result<(), Error> {
        if self.widgets_missing.get() {
            return Err(Error::backend("The widget script is not loaded"));
        }
        Ok(())
    }

    fn log_modal(&self, op: &str, modal: &MemElement) -> Result<(), Error> {
        self.check_widgets()?;
        let id = modal.attribute("id").unwrap_or_default();
        self.modal_log.borrow_mut().push(format!("{}:{}", op, id));
        Ok(())
    }
}

impl Backend for MemBackend {
    type Element = MemElement;

    fn async_task(fut: impl 'static + std::future::Future<Output = ()>) {
        SPAWNER.with(|spawner| {
            if let Err(err) = spawner.spawn_local(fut) {
                log::error!("Cannot spawn task: {}", err);
            }
        });
    }

    fn fetch_text(&self, url: &str) -> LocalBoxFuture<'static, Result<String, Error>> {
        self.fetch_log.borrow_mut().push(url.to_string());
        let ret = match self.resources.borrow().get(url) {
            None => Err(Error::backend(format!("GET {} returned status 404", url))),
            Some(MemResource::Status(status)) => Err(Error::backend(format!(
                "GET {} returned status {}",
                url, status
            ))),
            Some(MemResource::Text(x)) => Ok(x.clone()),
            Some(MemResource::Held) => {
                let (fut, cb) = AsyncCallback::new();
                self.pending_fetches
                    .borrow_mut()
                    .push_back((url.to_string(), Box::new(cb)));
                return fut.boxed_local();
            }
        };
        futures::future::ready(ret).boxed_local()
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let (fut, cb) = AsyncCallback::new();
        self.timers
            .borrow_mut()
            .push((self.clock.get() + ms as f64, Box::new(cb)));
        fut.boxed_local()
    }

    fn now(&self) -> f64 {
        self.clock.get()
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    fn store_preference(&self, key: &str, value: &str) -> Result<(), Error> {
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn root_element(&self) -> Option<MemElement> {
        Some(self.document.clone())
    }

    fn body(&self) -> Option<MemElement> {
        Some(self.body.clone())
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn element_by_id(&self, id: &str) -> Option<MemElement> {
        let mut all = Vec::new();
        self.document.descendants(&mut all);
        all.into_iter()
            .find(|e| e.attribute("id").as_deref() == Some(id))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<MemElement> {
        self.document.select_descendants(selector)
    }

    fn create_element(&self, tag_name: &str) -> Result<MemElement, Error> {
        if tag_name.is_empty() || !tag_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::backend(format!("Illegal tag name {:?}", tag_name)));
        }
        Ok(MemElement::new(tag_name))
    }

    fn listen(
        &self,
        target: &MemElement,
        kind: EventKind,
        handler: Box<dyn 'static + Fn(&EventDetail)>,
    ) -> Result<(), Error> {
        target.0.borrow_mut().listeners.push((kind, Rc::from(handler)));
        Ok(())
    }

    fn listen_window(
        &self,
        kind: WindowEventKind,
        handler: Box<dyn 'static + Fn()>,
    ) -> Result<(), Error> {
        self.window_listeners
            .borrow_mut()
            .push((kind, Rc::from(handler)));
        Ok(())
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to_top(&self) {
        self.scrolled_to_top.set(self.scrolled_to_top.get() + 1);
        self.scroll_y.set(0.);
    }

    fn init_scroll_animations(&self) {
        self.scroll_animations_initialized.set(true);
    }

    fn refresh_scroll_animations(&self) {
        self.scroll_animation_refreshes
            .set(self.scroll_animation_refreshes.get() + 1);
    }

    fn show_toast(&self, toast: &MemElement) -> Result<(), Error> {
        self.check_widgets()?;
        self.toasts.borrow_mut().push(toast.text_content());
        Ok(())
    }

    fn show_modal(&self, modal: &MemElement) -> Result<(), Error> {
        self.log_modal("show", modal)
    }

    fn hide_modal(&self, modal: &MemElement) -> Result<(), Error> {
        self.log_modal("hide", modal)
    }
}
