//! Nav bar styling driven by scroll position.
//!
//! While the hero banner fills the top of the viewport the bar is transparent
//! with white links. Once the page scrolls within `hero_margin` of the hero's
//! bottom edge, it switches to a near-opaque themed background. This runs on
//! every scroll event, unthrottled.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::Deserialize;

use crate::config::NavConfig;
use crate::theme::Theme;

/// Inline styles written onto the nav bar and its links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavStyle {
    pub background: String,
    pub shadow: String,
    pub link_color: String,
}

impl NavStyle {
    #[must_use]
    pub fn new(background: &str, shadow: &str, link_color: &str) -> Self {
        Self { background: background.into(), shadow: shadow.into(), link_color: link_color.into() }
    }
}

/// Which look the bar should have at the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Transparent,
    Solid,
}

/// Picks the nav style on each scroll and remembers the last scroll offset.
#[derive(Debug, Clone, Default)]
pub struct NavBarStyler {
    config: NavConfig,
    last_scroll: f64,
}

impl NavBarStyler {
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        Self { config, last_scroll: 0.0 }
    }

    /// Solid once `scroll_y` passes `hero_height - hero_margin`.
    #[must_use]
    pub fn mode(&self, scroll_y: f64, hero_height: f64) -> NavMode {
        if scroll_y > hero_height - self.config.hero_margin { NavMode::Solid } else { NavMode::Transparent }
    }

    #[must_use]
    pub fn style(&self, mode: NavMode, theme: Theme) -> &NavStyle {
        match (mode, theme) {
            (NavMode::Transparent, _) => &self.config.transparent,
            (NavMode::Solid, Theme::Light) => &self.config.light,
            (NavMode::Solid, Theme::Dark) => &self.config.dark,
        }
    }

    /// Handle one scroll event and return the style to apply.
    pub fn on_scroll(&mut self, scroll_y: f64, hero_height: f64, theme: Theme) -> &NavStyle {
        self.last_scroll = scroll_y;
        self.style(self.mode(scroll_y, hero_height), theme)
    }

    /// Scroll offset seen by the most recent [`Self::on_scroll`].
    #[must_use]
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}
