//! Configuration of the switcher and the page glue.
//!
//! Every well-known id, selector, key and message lives here.
//! The defaults match the site markup; a host may deserialize its own values.

use crate::locale::Locale;

/// Configuration of the `LocaleSwitcher` .
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// The translation resource URL, `{code}` is replaced by the locale code.
    pub resource_url: String,
    /// The preference store key.
    pub storage_key: String,
    /// The attribute holding the localization key of an element.
    pub key_attribute: String,
    /// The id of the language toggle control.
    pub toggle_id: String,
    /// The icon class shown before the toggle label.
    pub toggle_icon_class: String,
    /// Elements that get `data-rtl` in right-to-left locales.
    pub slider_selector: String,
    /// The translation key of the document title.
    pub title_key: String,
    /// The document title when the title key is missing.
    pub default_title: String,
    /// Shown when no translation can be loaded at all.
    pub load_failed_message: String,
    /// Where notifications go.
    pub notice: NoticeConfig,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            resource_url: "lang/{code}.json".into(),
            storage_key: "language".into(),
            key_attribute: "data-key".into(),
            toggle_id: "langSwitch".into(),
            toggle_icon_class: "fas fa-globe".into(),
            slider_selector: ".slider, .carousel".into(),
            title_key: "brand_name".into(),
            default_title: "Al-Khwarizmi Smart Solutions".into(),
            load_failed_message: "تعذر تحميل الترجمة / Failed to load translations".into(),
            notice: NoticeConfig::default(),
        }
    }
}

impl SwitcherConfig {
    /// The resource URL of a locale.
    pub fn resource_url(&self, locale: Locale) -> String {
        self.resource_url.replace("{code}", locale.code())
    }
}

/// The toast markup used for notifications.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// The id of the toast widget.
    pub toast_id: String,
    /// The id of the element receiving the message.
    pub message_id: String,
    /// The selector of the toast header inside the toast.
    pub header_selector: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            toast_id: "notificationToast".into(),
            message_id: "toastMessage".into(),
            header_selector: ".toast-header".into(),
        }
    }
}

/// A message looked up in the active translation table, with a fallback text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    /// The translation key.
    pub key: String,
    /// Used when the key is missing.
    pub default: String,
}

impl Message {
    /// Create a message.
    pub fn new(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default: default.into(),
        }
    }
}

/// Configuration of the forms.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// The newsletter form.
    pub newsletter_selector: String,
    /// The email field inside the newsletter form.
    pub newsletter_email_selector: String,
    /// The simulated newsletter request duration.
    pub newsletter_delay_ms: u32,
    /// The button opening the service request modal.
    pub request_button_id: String,
    /// The service request modal.
    pub request_modal_id: String,
    /// The service request form.
    pub request_form_id: String,
    /// The service request submit button.
    pub request_submit_id: String,
    /// The simulated service request duration.
    pub request_delay_ms: u32,
    /// Field names that must not be blank.
    pub required_fields: Vec<String>,
    /// The class marking a blank required field.
    pub invalid_class: String,
    /// The class of the spinner shown on a sending button.
    pub spinner_class: String,
    /// The label of a sending button.
    pub sending: Message,
    /// The label of the service request submit button.
    pub submit_request: Message,
    /// Shown after subscribing.
    pub newsletter_success: Message,
    /// Shown after a service request.
    pub request_success: Message,
    /// Shown when required fields are blank.
    pub required_error: Message,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            newsletter_selector: ".newsletter-form".into(),
            newsletter_email_selector: r#"input[type="email"]"#.into(),
            newsletter_delay_ms: 1000,
            request_button_id: "requestServiceBtn".into(),
            request_modal_id: "requestServiceModal".into(),
            request_form_id: "requestServiceForm".into(),
            request_submit_id: "submitRequestBtn".into(),
            request_delay_ms: 2000,
            required_fields: ["name", "email", "phone", "service_type"]
                .into_iter()
                .map(String::from)
                .collect(),
            invalid_class: "is-invalid".into(),
            spinner_class: "loading".into(),
            sending: Message::new("form_sending", "جاري الإرسال..."),
            submit_request: Message::new("submit_request", "إرسال الطلب"),
            newsletter_success: Message::new("newsletter_success", "تم الاشتراك بنجاح!"),
            request_success: Message::new(
                "request_success",
                "تم إرسال طلبك بنجاح! سنتواصل معك قريباً.",
            ),
            required_error: Message::new("form_required_error", "يرجى ملء جميع الحقول المطلوبة"),
        }
    }
}

/// Configuration of the scroll effects and decorations.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// The navigation bar.
    pub navbar_selector: String,
    /// Added to the navigation bar once the page is scrolled.
    pub navbar_scrolled_class: String,
    /// The class of the created scroll-to-top button.
    pub scroll_top_class: String,
    /// The icon of the scroll-to-top button.
    pub scroll_top_icon_class: String,
    /// Added to the scroll-to-top button when it should be visible.
    pub visible_class: String,
    /// The hero section moved by the parallax effect.
    pub hero_selector: String,
    /// In-page anchor links.
    pub anchor_selector: String,
    /// Buttons with the ripple effect.
    pub button_selector: String,
    /// The class of a ripple.
    pub ripple_class: String,
    /// How long a ripple stays.
    pub ripple_ms: u32,
    /// Cards lifted on hover.
    pub card_selector: String,
    /// The minimum interval between two scroll updates.
    pub scroll_throttle_ms: u32,
    /// The quiet period after resizing before animations are refreshed.
    pub resize_debounce_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            navbar_selector: ".navbar".into(),
            navbar_scrolled_class: "navbar-scrolled".into(),
            scroll_top_class: "scroll-to-top".into(),
            scroll_top_icon_class: "fas fa-arrow-up".into(),
            visible_class: "show".into(),
            hero_selector: ".hero-section".into(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            button_selector: ".btn".into(),
            ripple_class: "ripple".into(),
            ripple_ms: 600,
            card_selector: ".feature-card, .product-card, .project-card, .testimonial-card".into(),
            scroll_throttle_ms: 16,
            resize_debounce_ms: 250,
        }
    }
}

/// The whole site configuration.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// The language switcher.
    pub switcher: SwitcherConfig,
    /// The forms.
    pub forms: FormsConfig,
    /// The scroll effects and decorations.
    pub effects: EffectsConfig,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_config() {
        let config: SiteConfig = serde_json::from_str(
            r#"{ "switcher": { "resource_url": "/i18n/{code}.json" }, "forms": { "request_delay_ms": 10 } }"#,
        )
        .unwrap();
        assert_eq!(config.switcher.resource_url(Locale::En), "/i18n/en.json");
        assert_eq!(config.switcher.storage_key, "language");
        assert_eq!(config.forms.request_delay_ms, 10);
        assert_eq!(config.forms.required_fields.len(), 4);
        assert_eq!(config.effects, EffectsConfig::default());
    }
}
