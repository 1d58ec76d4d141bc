//! Wiring the whole site onto a document.

use std::rc::Rc;

use crate::{
    backend::{Backend, BackendElement, EventDetail, EventKind, WindowEventKind},
    config::{EffectsConfig, SiteConfig},
    effects::{Ripple, ScrollState, CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM},
    error::Error,
    forms,
    switcher::LocaleSwitcher,
    timing::{Debounce, Throttle},
};

/// The site behavior: the language switcher and all page glue.
///
/// Handlers only hold weak references to the site.
/// The host must keep the `Rc<Site>` alive (usually for the whole page lifetime).
pub struct Site<B: Backend> {
    switcher: Rc<LocaleSwitcher<B>>,
    config: SiteConfig,
}

impl<B: Backend> Site<B> {
    /// Create the site with a backend.
    pub fn new(backend: Rc<B>, config: SiteConfig) -> Rc<Self> {
        let switcher = LocaleSwitcher::new(backend, config.switcher.clone());
        Rc::new(Self { switcher, config })
    }

    /// The language switcher.
    pub fn switcher(&self) -> &Rc<LocaleSwitcher<B>> {
        &self.switcher
    }

    /// The backend.
    pub fn backend(&self) -> &Rc<B> {
        self.switcher.backend()
    }

    /// Wire everything, then load and apply the translations.
    ///
    /// A wiring failure is logged and does not stop the other parts.
    pub async fn start(self: &Rc<Self>) -> Result<(), Error> {
        self.backend().init_scroll_animations();
        let wirings: [(&str, Result<(), Error>); 7] = [
            ("scroll-to-top button", self.wire_scroll_to_top()),
            ("anchor links", self.wire_anchors()),
            ("forms", forms::wire_all(&self.switcher, self.config.forms.clone())),
            ("scroll effects", self.wire_scroll_effects()),
            ("resize handling", self.wire_resize()),
            ("button ripples", self.wire_ripples()),
            ("card hovering", self.wire_cards()),
        ];
        for (name, ret) in wirings {
            if let Err(err) = ret {
                log::error!("Cannot wire {}: {}", name, err);
            }
        }
        self.switcher.initialize().await
    }

    fn effects(&self) -> &EffectsConfig {
        &self.config.effects
    }

    fn wire_scroll_to_top(self: &Rc<Self>) -> Result<(), Error> {
        let backend = self.backend();
        let button = backend.create_element("button")?;
        button.set_class_name(&self.effects().scroll_top_class);
        button.set_decorated_label("i", &self.effects().scroll_top_icon_class, "")?;
        let body = backend
            .body()
            .ok_or_else(|| Error::backend("Cannot find the <body> element"))?;
        body.append_child(&button)?;
        let this = Rc::downgrade(self);
        backend.listen(
            &button,
            EventKind::Click,
            Box::new(move |_: &EventDetail| {
                if let Some(this) = this.upgrade() {
                    this.backend().scroll_to_top();
                }
            }),
        )
    }

    fn wire_anchors(self: &Rc<Self>) -> Result<(), Error> {
        let backend = self.backend();
        for anchor in backend.query_selector_all(&self.effects().anchor_selector) {
            let this = Rc::downgrade(self);
            let anchor2 = anchor.clone();
            backend.listen(
                &anchor,
                EventKind::Click,
                Box::new(move |ev: &EventDetail| {
                    ev.prevent_default();
                    let this = match this.upgrade() {
                        Some(x) => x,
                        None => return,
                    };
                    let target = anchor2
                        .attribute("href")
                        .and_then(|href| href.strip_prefix('#').map(|x| x.to_string()))
                        .filter(|id| !id.is_empty())
                        .and_then(|id| this.backend().element_by_id(&id));
                    if let Some(target) = target {
                        target.scroll_into_view();
                    }
                }),
            )?;
        }
        Ok(())
    }

    /// Update the navigation bar, the scroll-to-top button and the hero section for a scroll offset.
    pub fn update_scroll_effects(&self, scroll_y: f64) {
        let backend = self.backend();
        let effects = self.effects();
        let state = ScrollState::at(scroll_y);
        let warn = |ret: Result<(), Error>| {
            if let Err(err) = ret {
                log::warn!("{}", err);
            }
        };
        for navbar in backend.query_selector_all(&effects.navbar_selector) {
            warn(navbar.set_class(&effects.navbar_scrolled_class, state.navbar_scrolled));
        }
        for button in backend.query_selector_all(&format!(".{}", effects.scroll_top_class)) {
            warn(button.set_class(&effects.visible_class, state.scroll_top_visible));
        }
        for hero in backend.query_selector_all(&effects.hero_selector) {
            warn(hero.set_style("transform", &state.hero_transform()));
        }
    }

    fn wire_scroll_effects(self: &Rc<Self>) -> Result<(), Error> {
        let weak = Rc::downgrade(self);
        let throttle = Throttle::new(self.effects().scroll_throttle_ms);
        self.backend().listen_window(
            WindowEventKind::Scroll,
            Box::new(move || {
                let this = match weak.upgrade() {
                    Some(x) => x,
                    None => return,
                };
                // reads the offset when it runs, so a held update sees the final position
                let weak = weak.clone();
                throttle.call(&**this.backend(), move || {
                    if let Some(this) = weak.upgrade() {
                        this.update_scroll_effects(this.backend().scroll_y());
                    }
                });
            }),
        )
    }

    fn wire_resize(self: &Rc<Self>) -> Result<(), Error> {
        let this = Rc::downgrade(self);
        let debounce = Debounce::new(self.effects().resize_debounce_ms);
        self.backend().listen_window(
            WindowEventKind::Resize,
            Box::new(move || {
                let this = match this.upgrade() {
                    Some(x) => x,
                    None => return,
                };
                let backend = this.backend().clone();
                debounce.call(&**this.backend(), move || backend.refresh_scroll_animations());
            }),
        )
    }

    fn wire_ripples(self: &Rc<Self>) -> Result<(), Error> {
        let backend = self.backend();
        for button in backend.query_selector_all(&self.effects().button_selector) {
            let this = Rc::downgrade(self);
            let button2 = button.clone();
            backend.listen(
                &button,
                EventKind::Click,
                Box::new(move |ev: &EventDetail| {
                    let this = match this.upgrade() {
                        Some(x) => x,
                        None => return,
                    };
                    if let Err(err) = this.spawn_ripple(&button2, ev) {
                        log::warn!("Cannot show the ripple: {}", err);
                    }
                }),
            )?;
        }
        Ok(())
    }

    fn spawn_ripple(&self, button: &B::Element, ev: &EventDetail) -> Result<(), Error> {
        let backend = self.backend();
        let effects = self.effects();
        let rect = button.bounding_rect();
        let pos = ev.pointer().unwrap_or(crate::backend::PointerPos {
            x: rect.left + rect.width / 2.,
            y: rect.top + rect.height / 2.,
        });
        let ripple = Ripple::centered(rect, pos);
        let elem = backend.create_element("span")?;
        for (prop, value) in ripple.style() {
            elem.set_style(prop, &value)?;
        }
        elem.set_class(&effects.ripple_class, true)?;
        button.append_child(&elem)?;
        let sleep = backend.sleep(effects.ripple_ms);
        B::async_task(async move {
            sleep.await;
            elem.remove();
        });
        Ok(())
    }

    fn wire_cards(self: &Rc<Self>) -> Result<(), Error> {
        let backend = self.backend();
        for card in backend.query_selector_all(&self.effects().card_selector) {
            for (kind, transform) in [
                (EventKind::MouseEnter, CARD_HOVER_TRANSFORM),
                (EventKind::MouseLeave, CARD_REST_TRANSFORM),
            ] {
                let card2 = card.clone();
                backend.listen(
                    &card,
                    kind,
                    Box::new(move |_: &EventDetail| {
                        if let Err(err) = card2.set_style("transform", transform) {
                            log::warn!("{}", err);
                        }
                    }),
                )?;
            }
        }
        Ok(())
    }
}
