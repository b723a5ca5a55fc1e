#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// An element's bounding box relative to the viewport, vertical axis only.
///
/// `top` is the distance from the viewport's top edge in CSS pixels and may be
/// negative once the element has scrolled past.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// True when any part of the element lies inside a viewport of the given height.
    #[must_use]
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom() > 0.0
    }
}

/// Format a pixel length the way the browser stringifies numbers.
///
/// Integral values print without a fraction and negative zero prints as `0`.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{}px", value + 0.0)
}
