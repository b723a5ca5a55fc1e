//! Fade-in visibility for marked elements.
//!
//! The stylesheet animates elements when they gain the visible class. The
//! class follows the intersection state both ways, so an element that leaves
//! and re-enters the viewport animates again. Hero elements are also revealed
//! on load, one after another.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use crate::config::VisibilityConfig;
use crate::geom::px;

/// Class list edit for one intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassChange {
    Add,
    Remove,
}

/// Map an intersection report to a class edit. Never latches.
#[must_use]
pub fn class_change(is_intersecting: bool) -> ClassChange {
    if is_intersecting { ClassChange::Add } else { ClassChange::Remove }
}

/// Root margin string for the observer, shrinking only the bottom edge.
#[must_use]
pub fn root_margin(config: &VisibilityConfig) -> String {
    format!("0px 0px {} 0px", px(-config.bottom_margin))
}

/// Delay before the hero element at `index` is revealed.
#[must_use]
pub fn stagger_delay(index: usize, config: &VisibilityConfig) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(config.stagger_ms))
}
