//! Element handles.

use lisan::{
    backend::{BackendElement, FieldKind, Rect},
    error::Error,
};
use wasm_bindgen::JsCast;

use crate::js_error;

/// A DOM element handle.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(pub web_sys::Element);

impl DomElement {
    /// The underlying DOM element.
    pub fn dom(&self) -> &web_sys::Element {
        &self.0
    }

    fn document(&self) -> Result<web_sys::Document, Error> {
        self.0
            .owner_document()
            .ok_or_else(|| Error::backend("The element is not in a document"))
    }
}

impl From<web_sys::Element> for DomElement {
    fn from(x: web_sys::Element) -> Self {
        Self(x)
    }
}

impl BackendElement for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error> {
        self.0
            .set_attribute(name, value)
            .map_err(|err| js_error(format!("Cannot set attribute {:?}", name), err))
    }

    fn remove_attribute(&self, name: &str) -> Result<(), Error> {
        self.0
            .remove_attribute(name)
            .map_err(|err| js_error(format!("Cannot remove attribute {:?}", name), err))
    }

    fn field_kind(&self) -> FieldKind {
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            match input.type_().as_str() {
                "text" => FieldKind::TextInput,
                "email" => FieldKind::EmailInput,
                _ => FieldKind::Other,
            }
        } else if self.0.is_instance_of::<web_sys::HtmlTextAreaElement>() {
            FieldKind::TextArea
        } else {
            FieldKind::Other
        }
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_decorated_label(
        &self,
        marker_tag: &str,
        marker_class: &str,
        text: &str,
    ) -> Result<(), Error> {
        let document = self.document()?;
        let marker = document
            .create_element(marker_tag)
            .map_err(|err| js_error("Cannot create the label marker", err))?;
        marker.set_class_name(marker_class);
        self.0.set_text_content(None);
        self.0
            .append_child(&marker)
            .map_err(|err| js_error("Cannot append the label marker", err))?;
        if !text.is_empty() {
            let text = document.create_text_node(&format!(" {}", text));
            self.0
                .append_child(&text)
                .map_err(|err| js_error("Cannot append the label text", err))?;
        }
        Ok(())
    }

    fn value(&self) -> String {
        if let Some(x) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            x.value()
        } else if let Some(x) = self.0.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            x.value()
        } else if let Some(x) = self.0.dyn_ref::<web_sys::HtmlSelectElement>() {
            x.value()
        } else {
            String::new()
        }
    }

    fn set_class(&self, class: &str, enabled: bool) -> Result<(), Error> {
        self.0
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|err| js_error(format!("Cannot toggle class {:?}", class), err))
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.set_class_name(class_name);
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), Error> {
        let elem = self
            .0
            .dyn_ref::<web_sys::HtmlElement>()
            .ok_or_else(|| Error::backend("Only HTML elements have inline styles"))?;
        elem.style()
            .set_property(property, value)
            .map_err(|err| js_error(format!("Cannot set style {:?}", property), err))
    }

    fn set_disabled(&self, disabled: bool) -> Result<(), Error> {
        if disabled {
            self.set_attribute("disabled", "")
        } else {
            self.remove_attribute("disabled")
        }
    }

    fn disabled(&self) -> bool {
        self.0.has_attribute("disabled")
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        match self.0.query_selector(selector) {
            Ok(x) => x.map(Self),
            Err(err) => {
                log::warn!("{}", js_error(format!("Illegal selector {:?}", selector), err));
                None
            }
        }
    }

    fn append_child(&self, child: &Self) -> Result<(), Error> {
        self.0
            .append_child(&child.0)
            .map(|_| ())
            .map_err(|err| js_error("Cannot append a child", err))
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<web_sys::HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_into_view(&self) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
