//! Smooth scrolling for same-page anchors.
//!
//! Sections need different alignment under the fixed nav bar, so the target
//! offset is not the section's top edge but a per-landmark rule:
//!
//! - the projects section lands exactly below the hero banner,
//! - the skills section aligns on its title (or a wider gap without one),
//! - everything else keeps a fixed gap below the nav bar.
//!
//! All offsets are floored at zero. The measurements come from a
//! [`PageLayout`], which the browser layer implements over the live DOM.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;

/// Measurements of an anchor's destination section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMetrics {
    pub id: String,
    /// The section's `offsetTop` in document pixels.
    pub offset_top: f64,
    /// Absolute document top of the nested section title, if there is one.
    pub title_top: Option<f64>,
}

/// Read-only view of the page geometry needed to resolve an anchor.
pub trait PageLayout {
    /// Rendered height of the hero banner, `None` when the page has none.
    fn hero_height(&self) -> Option<f64>;
    /// Rendered height of the nav bar, `None` when the page has none.
    fn nav_height(&self) -> Option<f64>;
    /// The section whose id equals `fragment`.
    fn section(&self, fragment: &str) -> Option<SectionMetrics>;
}

/// The fragment identifier of an in-page link, without the leading `#`.
///
/// Returns `None` for links that leave the page and for a bare `#`.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Computes scroll destinations for anchor clicks.
#[derive(Debug, Clone, Default)]
pub struct ScrollRouter {
    config: ScrollConfig,
}

impl ScrollRouter {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    /// Resolve `href` against the page and return where to scroll, if anywhere.
    pub fn resolve(&self, href: &str, layout: &impl PageLayout) -> Option<f64> {
        let section = layout.section(fragment(href)?)?;
        if section.id == self.config.projects_id {
            return Some(layout.hero_height().unwrap_or(0.0));
        }
        let nav_height = layout.nav_height().unwrap_or(0.0);
        Some(self.offset_for(&section, nav_height))
    }

    /// Offset for any section other than projects, given the nav bar height.
    #[must_use]
    pub fn offset_for(&self, section: &SectionMetrics, nav_height: f64) -> f64 {
        let target = if section.id == self.config.skills_id {
            match section.title_top {
                Some(title_top) => title_top - nav_height - self.config.title_gap,
                None => section.offset_top - nav_height - self.config.untitled_skills_gap,
            }
        } else {
            section.offset_top - nav_height - self.config.section_gap
        };
        target.max(0.0)
    }
}
