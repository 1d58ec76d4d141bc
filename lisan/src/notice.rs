//! Toast notifications.

use crate::{
    backend::{Backend, BackendElement},
    config::NoticeConfig,
};

/// The kind of a notice, which decides the toast header color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failed action.
    Error,
}

impl NoticeKind {
    /// The class list of the toast header.
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Info => "toast-header bg-primary text-white",
            Self::Success => "toast-header bg-success text-white",
            Self::Error => "toast-header bg-danger text-white",
        }
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// The text.
    pub message: String,
    /// The kind.
    pub kind: NoticeKind,
}

impl Notice {
    /// An information notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Show a notice in the toast widget.
///
/// Returns `false` if the toast markup is missing or the widget fails.
pub fn show<B: Backend>(backend: &B, config: &NoticeConfig, notice: &Notice) -> bool {
    let (toast, message) = match (
        backend.element_by_id(&config.toast_id),
        backend.element_by_id(&config.message_id),
    ) {
        (Some(t), Some(m)) => (t, m),
        _ => {
            log::warn!("No toast to show {:?}", notice.message);
            return false;
        }
    };
    message.set_text_content(&notice.message);
    if let Some(header) = toast.query_selector(&config.header_selector) {
        header.set_class_name(notice.kind.header_class());
    }
    match backend.show_toast(&toast) {
        Ok(_) => true,
        Err(err) => {
            log::error!("{}", err);
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::mem::MemBackend;

    #[test]
    fn show_in_toast() {
        let backend = MemBackend::new();
        let config = NoticeConfig::default();
        assert!(!show(&backend, &config, &Notice::info("lost")));
        let body = backend.body().unwrap();
        let toast = backend.create_element("div").unwrap();
        toast.set_attribute("id", "notificationToast").unwrap();
        let header = backend.create_element("div").unwrap();
        header.set_class_name("toast-header");
        let message = backend.create_element("div").unwrap();
        message.set_attribute("id", "toastMessage").unwrap();
        toast.append_child(&header).unwrap();
        toast.append_child(&message).unwrap();
        body.append_child(&toast).unwrap();
        assert!(show(&backend, &config, &Notice::error("failed")));
        assert_eq!(header.attribute("class").unwrap(), "toast-header bg-danger text-white");
        assert!(show(&backend, &config, &Notice::success("done")));
        assert!(header.has_class("bg-success"));
        assert_eq!(backend.toasts(), vec!["failed".to_string(), "done".to_string()]);
    }
}
