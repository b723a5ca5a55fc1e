#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeLayout {
    hero: Option<f64>,
    nav: Option<f64>,
    sections: Vec<SectionMetrics>,
}

impl PageLayout for FakeLayout {
    fn hero_height(&self) -> Option<f64> {
        self.hero
    }

    fn nav_height(&self) -> Option<f64> {
        self.nav
    }

    fn section(&self, fragment: &str) -> Option<SectionMetrics> {
        self.sections.iter().find(|s| s.id == fragment).cloned()
    }
}

fn section(id: &str, offset_top: f64) -> SectionMetrics {
    SectionMetrics { id: id.into(), offset_top, title_top: None }
}

fn titled(id: &str, offset_top: f64, title_top: f64) -> SectionMetrics {
    SectionMetrics { id: id.into(), offset_top, title_top: Some(title_top) }
}

fn layout(hero: Option<f64>, nav: Option<f64>, sections: Vec<SectionMetrics>) -> FakeLayout {
    FakeLayout { hero, nav, sections }
}

// =============================================================
// fragment
// =============================================================

#[test]
fn fragment_strips_hash() {
    assert_eq!(fragment("#about"), Some("about"));
}

#[test]
fn fragment_rejects_bare_hash() {
    assert_eq!(fragment("#"), None);
}

#[test]
fn fragment_rejects_other_pages() {
    assert_eq!(fragment("/resume.pdf"), None);
    assert_eq!(fragment("https://example.com/#about"), None);
}

// =============================================================
// Plain sections
// =============================================================

#[test]
fn plain_section_subtracts_nav_and_gap() {
    let router = ScrollRouter::default();
    let page = layout(Some(900.0), Some(80.0), vec![section("contact", 500.0)]);
    assert_eq!(router.resolve("#contact", &page), Some(360.0));
}

#[test]
fn plain_section_is_floored_at_zero() {
    let router = ScrollRouter::default();
    let page = layout(None, Some(80.0), vec![section("about", 100.0)]);
    assert_eq!(router.resolve("#about", &page), Some(0.0));
}

#[test]
fn missing_nav_counts_as_zero_height() {
    let router = ScrollRouter::default();
    let page = layout(None, None, vec![section("about", 500.0)]);
    assert_eq!(router.resolve("#about", &page), Some(440.0));
}

#[test]
fn missing_target_is_a_noop() {
    let router = ScrollRouter::default();
    let page = layout(Some(900.0), Some(80.0), vec![section("about", 500.0)]);
    assert_eq!(router.resolve("#nowhere", &page), None);
    assert_eq!(router.resolve("#", &page), None);
}

// =============================================================
// Projects
// =============================================================

#[test]
fn projects_scrolls_to_hero_height() {
    let router = ScrollRouter::default();
    let page = layout(Some(742.0), Some(80.0), vec![section("projects", 1200.0)]);
    assert_eq!(router.resolve("#projects", &page), Some(742.0));
}

#[test]
fn projects_without_hero_scrolls_to_top() {
    let router = ScrollRouter::default();
    let page = layout(None, Some(80.0), vec![section("projects", 1200.0)]);
    assert_eq!(router.resolve("#projects", &page), Some(0.0));
}

#[test]
fn projects_ignores_its_title() {
    let router = ScrollRouter::default();
    let page = layout(Some(700.0), Some(80.0), vec![titled("projects", 1200.0, 1250.0)]);
    assert_eq!(router.resolve("#projects", &page), Some(700.0));
}

// =============================================================
// Skills
// =============================================================

#[test]
fn skills_aligns_on_title() {
    let router = ScrollRouter::default();
    let page = layout(Some(700.0), Some(80.0), vec![titled("skills", 2000.0, 2064.0)]);
    assert_eq!(router.resolve("#skills", &page), Some(1964.0));
}

#[test]
fn skills_without_title_uses_wider_gap() {
    let router = ScrollRouter::default();
    let page = layout(Some(700.0), Some(80.0), vec![section("skills", 2000.0)]);
    assert_eq!(router.resolve("#skills", &page), Some(1820.0));
}

#[test]
fn skills_offsets_are_floored_at_zero() {
    let router = ScrollRouter::default();
    let with_title = titled("skills", 10.0, 50.0);
    let without_title = section("skills", 150.0);
    assert_eq!(router.offset_for(&with_title, 80.0), 0.0);
    assert_eq!(router.offset_for(&without_title, 80.0), 0.0);
}

#[test]
fn title_is_only_used_for_skills() {
    let router = ScrollRouter::default();
    let about = titled("about", 500.0, 540.0);
    assert_eq!(router.offset_for(&about, 80.0), 360.0);
}

// =============================================================
// Config overrides
// =============================================================

#[test]
fn custom_landmarks_and_gaps_are_honored() {
    let router = ScrollRouter::new(ScrollConfig {
        projects_id: "work".into(),
        skills_id: "stack".into(),
        title_gap: 5.0,
        untitled_skills_gap: 10.0,
        section_gap: 15.0,
    });
    let page = layout(
        Some(600.0),
        Some(50.0),
        vec![section("work", 900.0), titled("stack", 1500.0, 1550.0), section("about", 300.0)],
    );
    assert_eq!(router.resolve("#work", &page), Some(600.0));
    assert_eq!(router.resolve("#stack", &page), Some(1495.0));
    assert_eq!(router.resolve("#about", &page), Some(235.0));
}
