//! Geometry of the scroll effects and decorations.

use crate::backend::{PointerPos, Rect};

/// The navigation bar turns solid after this offset.
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.;

/// The scroll-to-top button appears after this offset.
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 300.;

/// The hero section moves at this fraction of the scroll speed.
pub const PARALLAX_RATE: f64 = 0.5;

/// The transform of a hovered card.
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px)";

/// The transform of a card at rest.
pub const CARD_REST_TRANSFORM: &str = "translateY(0)";

/// What the page looks like at a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Whether the navigation bar is in its scrolled style.
    pub navbar_scrolled: bool,
    /// Whether the scroll-to-top button is visible.
    pub scroll_top_visible: bool,
    /// The vertical offset of the hero section in pixels.
    pub hero_offset: f64,
}

impl ScrollState {
    /// Compute the state at a vertical scroll offset.
    pub fn at(scroll_y: f64) -> Self {
        Self {
            navbar_scrolled: scroll_y > NAVBAR_SCROLLED_AFTER,
            scroll_top_visible: scroll_y > SCROLL_TOP_VISIBLE_AFTER,
            hero_offset: scroll_y * PARALLAX_RATE,
        }
    }

    /// The CSS transform of the hero section.
    pub fn hero_transform(&self) -> String {
        translate_y(self.hero_offset)
    }
}

/// A `translateY` transform.
pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}

/// The square of a ripple, relative to the clicked button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Width and height.
    pub size: f64,
    /// Left offset.
    pub left: f64,
    /// Top offset.
    pub top: f64,
}

impl Ripple {
    /// A ripple covering the button, centered on the click.
    pub fn centered(rect: Rect, click: PointerPos) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: click.x - rect.left - size / 2.,
            top: click.y - rect.top - size / 2.,
        }
    }

    /// The inline style properties of the ripple element.
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scroll_thresholds() {
        let top = ScrollState::at(0.);
        assert!(!top.navbar_scrolled && !top.scroll_top_visible);
        assert_eq!(top.hero_transform(), "translateY(0px)");
        let s = ScrollState::at(50.);
        assert!(!s.navbar_scrolled);
        let s = ScrollState::at(301.);
        assert!(s.navbar_scrolled && s.scroll_top_visible);
        assert_eq!(s.hero_transform(), "translateY(150.5px)");
    }

    #[test]
    fn ripple_is_centered_on_click() {
        let rect = Rect {
            left: 10.,
            top: 20.,
            width: 120.,
            height: 40.,
        };
        let ripple = Ripple::centered(rect, PointerPos { x: 30., y: 40. });
        assert_eq!(
            ripple,
            Ripple {
                size: 120.,
                left: -40.,
                top: -40.,
            }
        );
        assert_eq!(ripple.style()[0], ("width", "120px".to_string()));
        assert_eq!(ripple.style()[2], ("left", "-40px".to_string()));
    }
}
