//! The backend interface.
//!
//! Everything the site logic does to the outside world goes through a `Backend` :
//! reading and writing the document, fetching resources, the preference store,
//! timers, and the third-party widgets (toast, modal, animation-on-scroll).
//!
//! The browser implementation lives in the `lisan-dom` crate.
//! `mem::MemBackend` is a headless implementation.

use std::cell::Cell;

use futures::future::LocalBoxFuture;

use crate::error::Error;

mod callback;
pub use callback::AsyncCallback;
pub mod mem;

/// How an element shows a translated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input type="text">` .
    TextInput,
    /// `<input type="email">` .
    EmailInput,
    /// `<textarea>` .
    TextArea,
    /// Any other element.
    Other,
}

impl FieldKind {
    /// Whether translations go to the placeholder instead of the content.
    pub fn takes_placeholder(self) -> bool {
        self != Self::Other
    }
}

/// Element events the site listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `click`
    Click,
    /// `submit`
    Submit,
    /// `mouseenter`
    MouseEnter,
    /// `mouseleave`
    MouseLeave,
}

impl EventKind {
    /// The DOM event name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }
}

/// Window events the site listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEventKind {
    /// `scroll`
    Scroll,
    /// `resize`
    Resize,
}

impl WindowEventKind {
    /// The DOM event name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

/// A position in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPos {
    /// Horizontal.
    pub x: f64,
    /// Vertical.
    pub y: f64,
}

/// The bounding box of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// The detail passed to element event handlers.
#[derive(Debug, Default)]
pub struct EventDetail {
    pointer: Option<PointerPos>,
    default_prevented: Cell<bool>,
}

impl EventDetail {
    /// Create a detail, with the pointer position for mouse events.
    pub fn new(pointer: Option<PointerPos>) -> Self {
        Self {
            pointer,
            default_prevented: Cell::new(false),
        }
    }

    /// The pointer position, if the event comes from a pointer.
    pub fn pointer(&self) -> Option<PointerPos> {
        self.pointer
    }

    /// Cancel the default action of the event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Whether `prevent_default` has been called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// An element handle of a backend.
///
/// Handles are cheap to clone and refer to the same underlying element.
pub trait BackendElement: Clone + 'static {
    /// Get an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error>;

    /// Remove an attribute.
    fn remove_attribute(&self, name: &str) -> Result<(), Error>;

    /// How this element shows translated strings.
    fn field_kind(&self) -> FieldKind;

    /// The text content of the element and its descendants.
    fn text_content(&self) -> String;

    /// Replace all children with a text.
    fn set_text_content(&self, text: &str);

    /// Replace all children with an empty marker element (an icon or a spinner) followed by a text.
    ///
    /// The result is like `<i class="fas fa-globe"></i> EN` .
    /// An empty text leaves the marker alone.
    fn set_decorated_label(&self, marker_tag: &str, marker_class: &str, text: &str)
        -> Result<(), Error>;

    /// The current value of a form field, or an empty string for other elements.
    fn value(&self) -> String;

    /// Add or remove a class.
    fn set_class(&self, class: &str, enabled: bool) -> Result<(), Error>;

    /// Whether the element has a class.
    fn has_class(&self, class: &str) -> bool;

    /// Replace the whole class list.
    fn set_class_name(&self, class_name: &str);

    /// Set an inline style property.
    fn set_style(&self, property: &str, value: &str) -> Result<(), Error>;

    /// Enable or disable a form control.
    fn set_disabled(&self, disabled: bool) -> Result<(), Error>;

    /// Whether the form control is disabled.
    fn disabled(&self) -> bool;

    /// The first descendant matching a selector.
    fn query_selector(&self, selector: &str) -> Option<Self>;

    /// Append a child element.
    fn append_child(&self, child: &Self) -> Result<(), Error>;

    /// Detach this element from its parent.
    fn remove(&self);

    /// The bounding box of this element.
    fn bounding_rect(&self) -> Rect;

    /// Reset a form to its initial values.
    fn reset_form(&self);

    /// Scroll the page smoothly so that this element is at the top.
    fn scroll_into_view(&self);
}

/// The interface that a backend should implement.
pub trait Backend: 'static {
    /// The element handle type.
    type Element: BackendElement;

    /// Spawn an async task.
    fn async_task(fut: impl 'static + std::future::Future<Output = ()>)
    where
        Self: Sized;

    /// Fetch a text resource with a GET request.
    ///
    /// A non-success status is an error.
    fn fetch_text(&self, url: &str) -> LocalBoxFuture<'static, Result<String, Error>>;

    /// Resolve after `ms` milliseconds.
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;

    /// A monotonic timestamp in milliseconds.
    fn now(&self) -> f64;

    /// Read a value from the origin-scoped preference store.
    fn load_preference(&self, key: &str) -> Option<String>;

    /// Write a value to the origin-scoped preference store.
    fn store_preference(&self, key: &str, value: &str) -> Result<(), Error>;

    /// The document element ( `<html>` ).
    fn root_element(&self) -> Option<Self::Element>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Element>;

    /// Set the document title.
    fn set_title(&self, title: &str);

    /// Find an element by its id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements currently matching a selector, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Create a detached element.
    fn create_element(&self, tag_name: &str) -> Result<Self::Element, Error>;

    /// Listen to an element event for the lifetime of the backend.
    fn listen(
        &self,
        target: &Self::Element,
        kind: EventKind,
        handler: Box<dyn 'static + Fn(&EventDetail)>,
    ) -> Result<(), Error>;

    /// Listen to a window event for the lifetime of the backend.
    fn listen_window(
        &self,
        kind: WindowEventKind,
        handler: Box<dyn 'static + Fn()>,
    ) -> Result<(), Error>;

    /// The vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Scroll the page smoothly to the top.
    fn scroll_to_top(&self);

    /// Initialize the animation-on-scroll library, if it is present.
    fn init_scroll_animations(&self);

    /// Recompute the animation-on-scroll positions, if the library is present.
    fn refresh_scroll_animations(&self);

    /// Show a toast widget.
    fn show_toast(&self, toast: &Self::Element) -> Result<(), Error>;

    /// Show a modal widget.
    fn show_modal(&self, modal: &Self::Element) -> Result<(), Error>;

    /// Hide a shown modal widget.
    fn hide_modal(&self, modal: &Self::Element) -> Result<(), Error>;
}
