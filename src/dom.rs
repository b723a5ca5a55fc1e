//! web-sys adapters for the browser-facing traits.
//!
//! Requires a browser environment. Lookups that find nothing return `None`
//! and the caller disables the dependent behavior; JS exceptions are turned
//! into [`DomError`] or logged, never thrown back into the page.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

use crate::config::Selectors;
use crate::frame::{FrameError, FrameScheduler};
use crate::geom::Rect;
use crate::scroll::{PageLayout, SectionMetrics};
use crate::theme::{PreferenceStore, StorageError, Theme, ThemeSurface};

/// Failure while wiring behaviors to the document.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
}

impl DomError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        Self::Js { context, message: describe(&value) }
    }
}

/// Human-readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================
// Queries
// =============================================================

/// First element in the document matching `selector`.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {}", describe(&err));
            None
        }
    }
}

/// First descendant of `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {}", describe(&err));
            None
        }
    }
}

/// Every element in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {}", describe(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Rendered `offsetHeight` of the first match, as the layout engine reports it.
pub fn offset_height(document: &Document, selector: &str) -> Option<f64> {
    let element = query(document, selector)?;
    element.dyn_ref::<HtmlElement>().map(|el| f64::from(el.offset_height()))
}

/// Current vertical scroll offset of the page.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_else(|err| {
        log::trace!("scrollY unavailable: {}", describe(&err));
        0.0
    })
}

/// Layout viewport height (`innerHeight`).
pub fn viewport_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::trace!("innerHeight unavailable: {}", describe(&err));
            0.0
        }
    }
}

/// Bounding rectangle of `element` relative to the viewport.
pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.height())
}

/// Set one inline style property, logging instead of throwing.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::debug!("style {property} not applied: {}", describe(&err));
    }
}

/// Animated scroll of the window to `top`.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// =============================================================
// PageLayout
// =============================================================

/// [`PageLayout`] measured from the live document at call time.
pub struct DomLayout<'a> {
    pub window: &'a Window,
    pub document: &'a Document,
    pub selectors: &'a Selectors,
}

impl PageLayout for DomLayout<'_> {
    fn hero_height(&self) -> Option<f64> {
        offset_height(self.document, &self.selectors.hero)
    }

    fn nav_height(&self) -> Option<f64> {
        offset_height(self.document, &self.selectors.nav)
    }

    fn section(&self, fragment: &str) -> Option<SectionMetrics> {
        let target = self.document.get_element_by_id(fragment)?;
        let offset_top = target.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()));
        let title_top = query_within(&target, &self.selectors.section_title)
            .map(|title| client_rect(&title).top + scroll_y(self.window));
        Some(SectionMetrics { id: target.id(), offset_top, title_top })
    }
}

// =============================================================
// PreferenceStore
// =============================================================

/// `window.localStorage` as a [`PreferenceStore`].
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Result<Self, StorageError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable),
            Err(err) => Err(StorageError::Backend(describe(&err))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::Backend(describe(&err)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|err| StorageError::Backend(describe(&err)))
    }
}

// =============================================================
// ThemeSurface
// =============================================================

/// The `<html>` theme attribute plus the optional toggle icon.
pub struct DocumentThemeSurface {
    pub root: Option<Element>,
    pub icon: Option<Element>,
    pub attribute: String,
}

impl ThemeSurface for DocumentThemeSurface {
    fn apply_theme(&self, theme: Theme, icon: &str) {
        if let Some(root) = &self.root {
            if let Err(err) = root.set_attribute(&self.attribute, theme.as_str()) {
                log::warn!("theme attribute not set: {}", describe(&err));
            }
        }
        if let Some(el) = &self.icon {
            el.set_text_content(Some(icon));
        }
    }
}

// =============================================================
// FrameScheduler
// =============================================================

/// `window.requestAnimationFrame` as a [`FrameScheduler`].
pub struct AnimationFrames {
    pub window: Window,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), FrameError> {
        let js = Closure::once_into_js(move |_ts: f64| callback());
        self.window
            .request_animation_frame(js.unchecked_ref())
            .map(|_handle| ())
            .map_err(|err| FrameError(describe(&err)))
    }
}
