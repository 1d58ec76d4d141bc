//! Form submission: loading states, validation and the simulated requests.
//!
//! There is no server behind the forms.
//! A request is a delay, followed by a success notice.

use std::rc::Rc;

use crate::{
    backend::{Backend, BackendElement, EventDetail, EventKind},
    config::{FormsConfig, Message},
    error::Error,
    notice::Notice,
    switcher::LocaleSwitcher,
};

/// Resolve a message in the current locale.
pub fn message<B: Backend>(switcher: &LocaleSwitcher<B>, msg: &Message) -> String {
    switcher
        .translate(&msg.key)
        .unwrap_or_else(|| msg.default.clone())
}

/// Check the required fields of a form.
///
/// Blank fields get the invalid class and valid ones lose it.
/// Returns the names of the fields that are missing or blank.
pub fn validate_required<E: BackendElement>(
    form: &E,
    fields: &[String],
    invalid_class: &str,
) -> Vec<String> {
    let mut invalid = Vec::new();
    for name in fields {
        let field = match form.query_selector(&format!(r#"[name="{}"]"#, name)) {
            Some(x) => x,
            None => {
                log::warn!("Required field {:?} is missing from the form", name);
                invalid.push(name.clone());
                continue;
            }
        };
        let blank = field.value().trim().is_empty();
        if let Err(err) = field.set_class(invalid_class, blank) {
            log::warn!("{}", err);
        }
        if blank {
            invalid.push(name.clone());
        }
    }
    invalid
}

/// Put a submit button into its sending state.
pub fn show_sending<B: Backend>(
    switcher: &LocaleSwitcher<B>,
    config: &FormsConfig,
    button: &B::Element,
) -> Result<(), Error> {
    button.set_decorated_label("span", &config.spinner_class, &message(switcher, &config.sending))?;
    button.set_disabled(true)
}

/// Give every form a sending state on submit.
pub fn wire_submit_loading<B: Backend>(
    switcher: &Rc<LocaleSwitcher<B>>,
    config: &Rc<FormsConfig>,
) -> Result<(), Error> {
    let backend = switcher.backend();
    for form in backend.query_selector_all("form") {
        let this = Rc::downgrade(switcher);
        let config = config.clone();
        let form2 = form.clone();
        backend.listen(
            &form,
            EventKind::Submit,
            Box::new(move |_: &EventDetail| {
                let this = match this.upgrade() {
                    Some(x) => x,
                    None => return,
                };
                if let Some(button) = form2.query_selector(r#"button[type="submit"]"#) {
                    if let Err(err) = show_sending(&this, &config, &button) {
                        log::warn!("{}", err);
                    }
                }
            }),
        )?;
    }
    Ok(())
}

/// Subscribe with the email in the newsletter form.
///
/// Does nothing and returns `false` if the email is empty.
pub async fn submit_newsletter<B: Backend>(
    switcher: &LocaleSwitcher<B>,
    config: &FormsConfig,
    form: &B::Element,
) -> bool {
    let email = form
        .query_selector(&config.newsletter_email_selector)
        .map(|x| x.value())
        .unwrap_or_default();
    if email.is_empty() {
        return false;
    }
    log::debug!("Subscribing to the newsletter");
    switcher.backend().sleep(config.newsletter_delay_ms).await;
    switcher.notify(&Notice::success(message(switcher, &config.newsletter_success)));
    form.reset_form();
    true
}

/// Intercept the newsletter form submission.
pub fn wire_newsletter<B: Backend>(
    switcher: &Rc<LocaleSwitcher<B>>,
    config: &Rc<FormsConfig>,
) -> Result<(), Error> {
    let backend = switcher.backend();
    let form = match backend.query_selector_all(&config.newsletter_selector).into_iter().next() {
        Some(x) => x,
        None => return Ok(()),
    };
    let this = Rc::downgrade(switcher);
    let config = config.clone();
    let form2 = form.clone();
    backend.listen(
        &form,
        EventKind::Submit,
        Box::new(move |ev: &EventDetail| {
            ev.prevent_default();
            let this = match this.upgrade() {
                Some(x) => x,
                None => return,
            };
            let config = config.clone();
            let form = form2.clone();
            B::async_task(async move {
                submit_newsletter(&this, &config, &form).await;
            });
        }),
    )
}

/// Validate and send the service request form.
///
/// Returns `Ok(false)` if required fields are blank (an error notice is shown),
/// or `Ok(true)` after the request completes.
pub async fn submit_request<B: Backend>(
    switcher: &LocaleSwitcher<B>,
    config: &FormsConfig,
) -> Result<bool, Error> {
    let backend = switcher.backend();
    let form = backend
        .element_by_id(&config.request_form_id)
        .ok_or_else(|| Error::backend(format!("Cannot find the form #{}", config.request_form_id)))?;
    let invalid = validate_required(&form, &config.required_fields, &config.invalid_class);
    if !invalid.is_empty() {
        log::debug!("Blank required fields: {:?}", invalid);
        switcher.notify(&Notice::error(message(switcher, &config.required_error)));
        return Ok(false);
    }
    let button = backend.element_by_id(&config.request_submit_id);
    if let Some(button) = &button {
        show_sending(switcher, config, button)?;
    }
    backend.sleep(config.request_delay_ms).await;
    switcher.notify(&Notice::success(message(switcher, &config.request_success)));
    form.reset_form();
    if let Some(modal) = backend.element_by_id(&config.request_modal_id) {
        if let Err(err) = backend.hide_modal(&modal) {
            log::error!("Cannot hide the request modal: {}", err);
        }
    }
    if let Some(button) = &button {
        button.set_text_content(&message(switcher, &config.submit_request));
        button.set_disabled(false)?;
    }
    Ok(true)
}

/// Wire the service request modal: opening it and submitting its form.
pub fn wire_request_modal<B: Backend>(
    switcher: &Rc<LocaleSwitcher<B>>,
    config: &Rc<FormsConfig>,
) -> Result<(), Error> {
    let backend = switcher.backend();
    if let (Some(open), Some(modal)) = (
        backend.element_by_id(&config.request_button_id),
        backend.element_by_id(&config.request_modal_id),
    ) {
        let this = Rc::downgrade(switcher);
        backend.listen(
            &open,
            EventKind::Click,
            Box::new(move |_: &EventDetail| {
                if let Some(this) = this.upgrade() {
                    if let Err(err) = this.backend().show_modal(&modal) {
                        log::error!("{}", err);
                    }
                }
            }),
        )?;
    }
    if let Some(submit) = backend.element_by_id(&config.request_submit_id) {
        let this = Rc::downgrade(switcher);
        let config = config.clone();
        let submit2 = submit.clone();
        backend.listen(
            &submit,
            EventKind::Click,
            Box::new(move |_: &EventDetail| {
                // a request is already in progress
                if submit2.disabled() {
                    return;
                }
                let this = match this.upgrade() {
                    Some(x) => x,
                    None => return,
                };
                let config = config.clone();
                B::async_task(async move {
                    if let Err(err) = submit_request(&this, &config).await {
                        log::error!("{}", err);
                    }
                });
            }),
        )?;
    }
    Ok(())
}

/// Wire all forms.
pub fn wire_all<B: Backend>(
    switcher: &Rc<LocaleSwitcher<B>>,
    config: FormsConfig,
) -> Result<(), Error> {
    let config = Rc::new(config);
    wire_submit_loading(switcher, &config)?;
    wire_newsletter(switcher, &config)?;
    wire_request_modal(switcher, &config)
}
