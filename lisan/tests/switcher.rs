use std::{cell::RefCell, rc::Rc};

use futures::executor::block_on;
use lisan::{
    backend::mem::{MemBackend, MemElement},
    config::SwitcherConfig,
    prelude::*,
    LoadOutcome, TranslationTable,
};

const AR: &str = r#"{
    "brand_name": "الخوارزمي للحلول الذكية",
    "hero_title": "حلول ذكية لأعمالك",
    "name_placeholder": "الاسم الكامل",
    "email_placeholder": "البريد الإلكتروني",
    "message_placeholder": "رسالتك"
}"#;

const EN: &str = r#"{
    "brand_name": "Al-Khwarizmi Smart Solutions",
    "hero_title": "Smart solutions for your business",
    "name_placeholder": "Full name",
    "email_placeholder": "Email address",
    "message_placeholder": "Your message",
    "empty_value": ""
}"#;

const AR_URL: &str = "lang/ar.json";
const EN_URL: &str = "lang/en.json";

fn add(backend: &MemBackend, parent: &MemElement, tag: &str, attrs: &[(&str, &str)]) -> MemElement {
    let e = backend.create_element(tag).unwrap();
    for (k, v) in attrs {
        e.set_attribute(k, v).unwrap();
    }
    parent.append_child(&e).unwrap();
    e
}

struct Page {
    toggle: MemElement,
    title: MemElement,
    name: MemElement,
    email: MemElement,
    message: MemElement,
    untranslated: MemElement,
    carousel: MemElement,
}

fn build_page(backend: &MemBackend) -> Page {
    let body = backend.body().unwrap();
    let toggle = add(backend, &body, "button", &[("id", "langSwitch")]);
    toggle.set_text_content("EN");
    let title = add(backend, &body, "h1", &[("data-key", "hero_title")]);
    title.set_text_content("placeholder title");
    let form = add(backend, &body, "form", &[]);
    let name = add(backend, &form, "input", &[("type", "text"), ("data-key", "name_placeholder")]);
    let email = add(backend, &form, "input", &[("type", "email"), ("data-key", "email_placeholder")]);
    let message = add(backend, &form, "textarea", &[("data-key", "message_placeholder")]);
    let untranslated = add(backend, &body, "p", &[("data-key", "not_in_any_table")]);
    untranslated.set_text_content("Original");
    let carousel = add(backend, &body, "div", &[("class", "carousel")]);
    let toast = add(backend, &body, "div", &[("id", "notificationToast")]);
    add(backend, &toast, "div", &[("class", "toast-header")]);
    add(backend, &toast, "div", &[("id", "toastMessage")]);
    Page {
        toggle,
        title,
        name,
        email,
        message,
        untranslated,
        carousel,
    }
}

fn setup() -> (Rc<MemBackend>, Page) {
    let backend = Rc::new(MemBackend::new());
    let page = build_page(&backend);
    (backend, page)
}

fn root_attr(backend: &MemBackend, name: &str) -> Option<String> {
    backend.document().attribute(name)
}

fn spawn_load(
    switcher: &Rc<LocaleSwitcher<MemBackend>>,
    locale: Locale,
) -> Rc<RefCell<Option<Result<LoadOutcome, Error>>>> {
    let ret = Rc::new(RefCell::new(None));
    let ret2 = ret.clone();
    let switcher = switcher.clone();
    MemBackend::async_task(async move {
        let r = switcher.load(locale).await;
        *ret2.borrow_mut() = Some(r);
    });
    MemBackend::run_until_stalled();
    ret
}

#[test]
fn first_run_is_primary_and_rtl() {
    let (backend, page) = setup();
    backend.serve(AR_URL, AR);
    backend.serve(EN_URL, EN);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    assert_eq!(switcher.locale(), Locale::Ar);
    block_on(switcher.initialize()).unwrap();
    assert_eq!(backend.fetch_log(), vec![AR_URL.to_string()]);
    assert_eq!(root_attr(&backend, "lang").as_deref(), Some("ar"));
    assert_eq!(root_attr(&backend, "dir").as_deref(), Some("rtl"));
    assert_eq!(
        backend.body().unwrap().style("font-family").as_deref(),
        Some("'Cairo', sans-serif")
    );
    assert_eq!(page.title.text_content(), "حلول ذكية لأعمالك");
    assert_eq!(page.toggle.inner_html(), r#"<i class="fas fa-globe"></i> EN"#);
    assert_eq!(page.carousel.attribute("data-rtl").as_deref(), Some("true"));
    assert_eq!(backend.title(), "الخوارزمي للحلول الذكية");
    assert!(backend.scroll_animation_refreshes() >= 1);
    assert_eq!(backend.load_preference("language"), None);
    assert!(backend.toasts().is_empty());
}

#[test]
fn inputs_get_placeholders_and_others_get_text() {
    let (backend, page) = setup();
    backend.serve(AR_URL, AR);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    block_on(switcher.initialize()).unwrap();
    assert_eq!(page.name.attribute("placeholder").as_deref(), Some("الاسم الكامل"));
    assert_eq!(page.email.attribute("placeholder").as_deref(), Some("البريد الإلكتروني"));
    assert_eq!(page.message.attribute("placeholder").as_deref(), Some("رسالتك"));
    assert_eq!(page.name.text_content(), "");
    assert_eq!(page.message.text_content(), "");
    assert_eq!(page.title.attribute("placeholder"), None);
    assert_eq!(page.untranslated.text_content(), "Original");
}

#[test]
fn loaded_table_matches_resource() {
    let (backend, _page) = setup();
    backend.serve(EN_URL, EN);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    let outcome = block_on(switcher.load(Locale::En)).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(Locale::En));
    let expected = TranslationTable::parse(Locale::En, EN).unwrap();
    switcher.with_table(|table| {
        assert_eq!(table.locale(), Locale::En);
        assert_eq!(table.len(), expected.len());
        for (k, v) in expected.iter() {
            assert_eq!(table.get(k), Some(v));
        }
    });
    switcher.with_table(|table| assert_eq!(table.get("empty_value"), Some("")));
    assert_eq!(switcher.translate("empty_value"), None);
    assert_eq!(switcher.get_translation("empty_value"), "empty_value");
}

#[test]
fn empty_values_count_as_missing() {
    let (backend, page) = setup();
    backend.serve(AR_URL, r#"{ "brand_name": "", "hero_title": "" }"#);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    block_on(switcher.initialize()).unwrap();
    assert_eq!(backend.title(), "Al-Khwarizmi Smart Solutions");
    assert_eq!(page.title.text_content(), "placeholder title");
    assert_eq!(switcher.get_translation("brand_name"), "brand_name");
}

#[test]
fn non_text_values_do_not_fail_the_table() {
    let (backend, page) = setup();
    backend.store_preference("language", "en").unwrap();
    backend.serve(EN_URL, r#"{ "hero_title": "English", "year": 2024 }"#);
    backend.serve(AR_URL, AR);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    block_on(switcher.initialize()).unwrap();
    assert_eq!(switcher.locale(), Locale::En);
    assert_eq!(backend.fetch_log(), vec![EN_URL.to_string()]);
    assert_eq!(page.title.text_content(), "English");
    assert_eq!(switcher.get_translation("year"), "2024");
}

#[test]
fn missing_key_gives_the_key() {
    let (backend, _page) = setup();
    backend.serve(AR_URL, AR);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    assert_eq!(switcher.get_translation("hero_title"), "hero_title");
    block_on(switcher.initialize()).unwrap();
    assert_eq!(switcher.get_translation("hero_title"), "حلول ذكية لأعمالك");
    assert_eq!(switcher.get_translation("no.such.key"), "no.such.key");
    assert_eq!(switcher.translate("no.such.key"), None);
}

#[test]
fn apply_is_idempotent() {
    let (backend, page) = setup();
    backend.serve(AR_URL, AR);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    block_on(switcher.initialize()).unwrap();
    let html = backend.document().outer_html();
    let title = backend.title();
    switcher.apply();
    switcher.apply();
    assert_eq!(backend.document().outer_html(), html);
    assert_eq!(backend.title(), title);
    assert_eq!(page.toggle.children().len(), 1);
}

#[test]
fn switch_persists_before_fetch_resolves() {
    let (backend, page) = setup();
    backend.serve(AR_URL, AR);
    backend.hold(EN_URL);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    block_on(switcher.initialize()).unwrap();
    page.toggle.click();
    MemBackend::run_until_stalled();

    // the fetch is still pending
    assert_eq!(backend.load_preference("language").as_deref(), Some("en"));
    assert_eq!(switcher.requested_locale(), Locale::En);
    assert_eq!(switcher.locale(), Locale::Ar);
    assert_eq!(switcher.get_translation("hero_title"), "حلول ذكية لأعمالك");
    assert_eq!(root_attr(&backend, "dir").as_deref(), Some("rtl"));
    assert_eq!(page.title.text_content(), "حلول ذكية لأعمالك");

    assert!(backend.release(EN_URL, Ok(EN.to_string())));
    assert_eq!(switcher.locale(), Locale::En);
    assert_eq!(root_attr(&backend, "lang").as_deref(), Some("en"));
    assert_eq!(root_attr(&backend, "dir").as_deref(), Some("ltr"));
    assert_eq!(page.toggle.inner_html(), r#"<i class="fas fa-globe"></i> AR"#);
    assert_eq!(page.title.text_content(), "Smart solutions for your business");
    assert_eq!(page.name.attribute("placeholder").as_deref(), Some("Full name"));
    assert_eq!(page.carousel.attribute("data-rtl"), None);
    assert_eq!(
        backend.body().unwrap().style("font-family").as_deref(),
        Some("'Inter', 'Roboto', sans-serif")
    );
    assert_eq!(backend.toasts(), vec!["Language changed to English".to_string()]);
}

#[test]
fn switching_twice_returns_to_primary() {
    let (backend, page) = setup();
    backend.serve(AR_URL, AR);
    backend.serve(EN_URL, EN);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    block_on(switcher.initialize()).unwrap();
    page.toggle.click();
    MemBackend::run_until_stalled();
    assert_eq!(switcher.locale(), Locale::En);
    page.toggle.click();
    MemBackend::run_until_stalled();
    assert_eq!(switcher.locale(), Locale::Ar);
    assert_eq!(backend.load_preference("language").as_deref(), Some("ar"));
    assert_eq!(root_attr(&backend, "dir").as_deref(), Some("rtl"));
    assert_eq!(page.toggle.inner_html(), r#"<i class="fas fa-globe"></i> EN"#);
    assert_eq!(
        backend.toasts(),
        vec![
            "Language changed to English".to_string(),
            "تم تغيير اللغة إلى العربية".to_string(),
        ]
    );
    assert_eq!(
        backend.fetch_log(),
        vec![AR_URL.to_string(), EN_URL.to_string(), AR_URL.to_string()]
    );
}

#[test]
fn stored_preference_is_used() {
    let (backend, page) = setup();
    backend.store_preference("language", "en").unwrap();
    backend.serve(EN_URL, EN);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    assert_eq!(switcher.locale(), Locale::En);
    block_on(switcher.initialize()).unwrap();
    assert_eq!(root_attr(&backend, "dir").as_deref(), Some("ltr"));
    assert_eq!(page.toggle.inner_html(), r#"<i class="fas fa-globe"></i> AR"#);
}

#[test]
fn illegal_preference_is_ignored() {
    let (backend, _page) = setup();
    backend.store_preference("language", "fr").unwrap();
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    assert_eq!(switcher.locale(), Locale::Ar);
}

#[test]
fn failed_locale_falls_back_once() {
    let (backend, _page) = setup();
    backend.store_preference("language", "en").unwrap();
    backend.serve_status(EN_URL, 500);
    backend.serve(AR_URL, AR);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    block_on(switcher.initialize()).unwrap();
    assert_eq!(
        backend.fetch_log(),
        vec![EN_URL.to_string(), AR_URL.to_string()]
    );
    assert_eq!(switcher.locale(), Locale::Ar);
    assert_eq!(root_attr(&backend, "dir").as_deref(), Some("rtl"));
    switcher.with_table(|t| assert_eq!(t.locale(), Locale::Ar));
    // the forced fallback is not stored
    assert_eq!(backend.load_preference("language").as_deref(), Some("en"));
}

#[test]
fn unparsable_locale_falls_back() {
    let (backend, _page) = setup();
    backend.serve(EN_URL, r#"["not", "an", "object"]"#);
    backend.serve(AR_URL, AR);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    let outcome = block_on(switcher.load(Locale::En)).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(Locale::Ar));
}

#[test]
fn failed_fallback_is_reported() {
    let (backend, page) = setup();
    backend.store_preference("language", "en").unwrap();
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    let err = block_on(switcher.initialize()).unwrap_err();
    assert!(matches!(err, Error::FallbackFailed { .. }));
    assert_eq!(
        backend.fetch_log(),
        vec![EN_URL.to_string(), AR_URL.to_string()]
    );
    assert_eq!(switcher.locale(), Locale::Ar);
    switcher.with_table(|t| {
        assert!(t.is_empty());
        assert_eq!(t.locale(), Locale::Ar);
    });
    assert_eq!(root_attr(&backend, "dir").as_deref(), Some("rtl"));
    assert_eq!(backend.title(), "Al-Khwarizmi Smart Solutions");
    assert_eq!(page.title.text_content(), "placeholder title");
    assert_eq!(
        backend.toasts(),
        vec![SwitcherConfig::default().load_failed_message]
    );

    // the toggle still works once the resources are back
    backend.serve(EN_URL, EN);
    page.toggle.click();
    MemBackend::run_until_stalled();
    assert_eq!(switcher.locale(), Locale::En);
    assert_eq!(page.title.text_content(), "Smart solutions for your business");
}

#[test]
fn primary_failure_is_not_retried() {
    let (backend, _page) = setup();
    backend.serve_status(AR_URL, 404);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    let err = block_on(switcher.load(Locale::Ar)).unwrap_err();
    assert!(matches!(err, Error::FallbackFailed { .. }));
    assert_eq!(backend.fetch_log(), vec![AR_URL.to_string()]);
}

#[test]
fn stale_load_does_not_overwrite() {
    let (backend, _page) = setup();
    backend.hold(EN_URL);
    backend.hold(AR_URL);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    let first = spawn_load(&switcher, Locale::En);
    let second = spawn_load(&switcher, Locale::Ar);
    assert_eq!(switcher.generation(), 2);
    assert!(backend.release(AR_URL, Ok(AR.to_string())));
    assert!(matches!(
        *second.borrow(),
        Some(Ok(LoadOutcome::Loaded(Locale::Ar)))
    ));
    assert!(backend.release(EN_URL, Ok(EN.to_string())));
    assert!(matches!(*first.borrow(), Some(Ok(LoadOutcome::Stale))));
    assert_eq!(switcher.locale(), Locale::Ar);
    assert_eq!(switcher.get_translation("hero_title"), "حلول ذكية لأعمالك");
}

#[test]
fn stale_failure_is_not_retried() {
    let (backend, _page) = setup();
    backend.hold(EN_URL);
    backend.serve(AR_URL, AR);
    let switcher = LocaleSwitcher::new(backend.clone(), SwitcherConfig::default());
    let first = spawn_load(&switcher, Locale::En);
    let second = spawn_load(&switcher, Locale::Ar);
    assert!(matches!(
        *second.borrow(),
        Some(Ok(LoadOutcome::Loaded(Locale::Ar)))
    ));
    assert!(backend.release(EN_URL, Err(Error::backend("offline"))));
    assert!(matches!(*first.borrow(), Some(Ok(LoadOutcome::Stale))));
    assert_eq!(
        backend.fetch_log(),
        vec![EN_URL.to_string(), AR_URL.to_string()]
    );
    switcher.with_table(|t| assert_eq!(t.len(), 5));
}

#[test]
fn custom_resource_url() {
    let (backend, _page) = setup();
    backend.serve("/i18n/ar.json", AR);
    let config = SwitcherConfig {
        resource_url: "/i18n/{code}.json".into(),
        storage_key: "site-lang".into(),
        ..Default::default()
    };
    backend.store_preference("site-lang", "ar").unwrap();
    let switcher = LocaleSwitcher::new(backend.clone(), config);
    block_on(switcher.initialize()).unwrap();
    assert_eq!(backend.fetch_log(), vec!["/i18n/ar.json".to_string()]);
}
