//! Scroll-coupled parallax transforms.
//!
//! Three element layers move at different rates as the page scrolls:
//!
//! | Layer | Offset |
//! |-------|--------|
//! | project images | distance from viewport center × `image_speed` |
//! | project content | `(1 - progress) × content_travel` |
//! | skill categories | `(1 - progress) × skill_travel`, composited |
//!
//! Elements outside the viewport are left untouched so they keep their last
//! transform. Updates run at most once per animation frame (see
//! [`crate::frame`]).

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use std::fmt;

use crate::config::ParallaxConfig;
use crate::geom::{Rect, px};

/// Element classes that receive parallax transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    ProjectImage,
    ProjectContent,
    SkillCategory,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::ProjectImage, Layer::ProjectContent, Layer::SkillCategory];
}

/// A CSS `transform` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    TranslateY(f64),
    /// Vertical shift plus a flat `translateZ(0)` to keep the element on its own layer.
    TranslateYComposited(f64),
}

impl Transform {
    #[must_use]
    pub fn offset(&self) -> f64 {
        match *self {
            Self::TranslateY(y) | Self::TranslateYComposited(y) => y,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TranslateY(y) => write!(f, "translateY({})", px(y)),
            Self::TranslateYComposited(y) => write!(f, "translateY({}) translateZ(0)", px(y)),
        }
    }
}

/// How far an element has traveled through the viewport, in `[0, 1]`.
///
/// 0 when its top edge sits on the viewport's bottom edge, 1 when its bottom
/// edge reaches the viewport's top.
#[must_use]
pub fn progress(rect: Rect, viewport_height: f64) -> f64 {
    ((viewport_height - rect.top) / (viewport_height + rect.height)).clamp(0.0, 1.0)
}

/// Vertical distance from the element's center to the viewport's center.
///
/// Measured in document coordinates; positive while the element sits above
/// the viewport center.
#[must_use]
pub fn center_distance(rect: Rect, viewport_height: f64, scroll_y: f64) -> f64 {
    let window_center = scroll_y + viewport_height / 2.0;
    let element_center = rect.top + scroll_y + rect.height / 2.0;
    window_center - element_center
}

/// Computes per-layer transforms for one frame.
#[derive(Debug, Clone, Default)]
pub struct ParallaxUpdater {
    config: ParallaxConfig,
}

impl ParallaxUpdater {
    #[must_use]
    pub fn new(config: ParallaxConfig) -> Self {
        Self { config }
    }

    /// Transform for an element of `layer`, or `None` when it is off screen.
    #[must_use]
    pub fn transform(&self, layer: Layer, rect: Rect, viewport_height: f64, scroll_y: f64) -> Option<Transform> {
        if !rect.intersects_viewport(viewport_height) {
            return None;
        }
        let transform = match layer {
            Layer::ProjectImage => {
                Transform::TranslateY(center_distance(rect, viewport_height, scroll_y) * self.config.image_speed)
            }
            Layer::ProjectContent => {
                Transform::TranslateY((1.0 - progress(rect, viewport_height)) * self.config.content_travel)
            }
            Layer::SkillCategory => {
                Transform::TranslateYComposited((1.0 - progress(rect, viewport_height)) * self.config.skill_travel)
            }
        };
        Some(transform)
    }
}
