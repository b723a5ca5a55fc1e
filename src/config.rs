//! Page configuration.
//!
//! Every selector, pixel offset and color the behaviors depend on lives here.
//! The defaults reproduce the tuned values the stylesheet was designed
//! against; a page may override any subset through a JSON document (see
//! [`PageConfig::from_json`]).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::nav::NavStyle;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_DARK_ICON: &str = "☀️";
pub const DEFAULT_LIGHT_ICON: &str = "🌙";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document is not valid JSON for [`PageConfig`].
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration for all page behaviors.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub theme: ThemeConfig,
    pub scroll: ScrollConfig,
    pub nav: NavConfig,
    pub visibility: VisibilityConfig,
    pub parallax: ParallaxConfig,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: Option<String>,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Console log level; unknown names fall back to `info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_deref().map(str::parse::<log::Level>) {
            Some(Ok(level)) => level,
            _ => DEFAULT_LOG_LEVEL,
        }
    }
}

/// CSS selectors and element ids making up the DOM contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub anchor: String,
    pub hero: String,
    pub nav: String,
    pub nav_link: String,
    pub section_title: String,
    pub fade_in: String,
    pub hero_fade_in: String,
    pub project_image: String,
    pub project_content: String,
    pub skill_category: String,
    /// Element id (not a selector) of the theme toggle button.
    pub theme_toggle_id: String,
    /// Selector of the icon, resolved inside the toggle button.
    pub theme_icon: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            anchor: "a[href^=\"#\"]".into(),
            hero: ".hero".into(),
            nav: ".nav".into(),
            nav_link: ".nav-link".into(),
            section_title: ".section-title".into(),
            fade_in: ".fade-in-up".into(),
            hero_fade_in: ".hero .fade-in-up".into(),
            project_image: ".project-image-wrapper".into(),
            project_content: ".project-content".into(),
            skill_category: ".skill-category".into(),
            theme_toggle_id: "theme-toggle".into(),
            theme_icon: ".theme-icon".into(),
        }
    }
}

/// Theme persistence and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub root_attribute: String,
    /// Glyph shown while the dark theme is active.
    pub dark_icon: String,
    /// Glyph shown while the light theme is active.
    pub light_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            root_attribute: DEFAULT_THEME_ATTRIBUTE.into(),
            dark_icon: DEFAULT_DARK_ICON.into(),
            light_icon: DEFAULT_LIGHT_ICON.into(),
        }
    }
}

/// Anchor scroll landmarks and pixel adjustments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Section scrolled to exactly the hero height.
    pub projects_id: String,
    /// Section aligned on its nested title.
    pub skills_id: String,
    /// Gap kept above the skills title.
    pub title_gap: f64,
    /// Gap above the skills section when it has no title.
    pub untitled_skills_gap: f64,
    /// Gap above every other section.
    pub section_gap: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            projects_id: "projects".into(),
            skills_id: "skills".into(),
            title_gap: 20.0,
            untitled_skills_gap: 100.0,
            section_gap: 60.0,
        }
    }
}

/// Nav bar threshold and palettes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// The bar turns solid once the page scrolls past `hero height - hero_margin`.
    pub hero_margin: f64,
    pub light: NavStyle,
    pub dark: NavStyle,
    pub transparent: NavStyle,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hero_margin: 100.0,
            light: NavStyle::new("rgba(255, 255, 255, 0.98)", "0 2px 10px rgba(0, 0, 0, 0.05)", "#1a1a1a"),
            dark: NavStyle::new("rgba(26, 26, 26, 0.98)", "0 2px 10px rgba(0, 0, 0, 0.3)", "#e5e5e5"),
            transparent: NavStyle::new("transparent", "none", "#ffffff"),
        }
    }
}

/// Intersection options for the fade-in observer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport.
    pub bottom_margin: f64,
    pub visible_class: String,
    /// Delay between consecutive hero elements on load.
    pub stagger_ms: u32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { threshold: 0.15, bottom_margin: 50.0, visible_class: "visible".into(), stagger_ms: 100 }
    }
}

/// Parallax factors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Multiplier on the image center's distance from the viewport center.
    pub image_speed: f64,
    /// Maximum content offset in pixels, applied when just entering.
    pub content_travel: f64,
    /// Maximum skill category offset in pixels.
    pub skill_travel: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { image_speed: 0.15, content_travel: 20.0, skill_travel: 10.0 }
    }
}
