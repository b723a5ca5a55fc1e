//! Wires every behavior to the live document.
//!
//! Each `install_*` function resolves its elements, registers its listeners
//! and returns. Components never call each other; they share only the DOM
//! and the [`ScrollState`] held here. A component whose elements are missing
//! logs at debug and stays disabled. Listeners live for the page lifetime, so
//! their closures are intentionally leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::config::{ConfigError, PageConfig, VisibilityConfig};
use crate::dom::{self, AnimationFrames, DocumentThemeSurface, DomError, DomLayout, LocalStorage};
use crate::frame::FrameGate;
use crate::nav::NavBarStyler;
use crate::parallax::{Layer, ParallaxUpdater};
use crate::scroll::ScrollRouter;
use crate::theme::{MemoryStore, PreferenceStore, Theme, ThemeStore};
use crate::visibility::{self, ClassChange};

/// Id of the optional `<script type="application/json">` holding a config override.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Scroll bookkeeping shared by the scroll listeners.
#[derive(Debug, Default)]
pub struct ScrollState {
    pub nav: RefCell<NavBarStyler>,
    pub frame: FrameGate,
}

/// Read the page's config override, defaulting when there is none.
pub fn read_config() -> Result<PageConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}

/// Install all five behaviors. One failing behavior does not stop the others.
pub fn install(config: &PageConfig) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let config = Rc::new(config.clone());
    let state = Rc::new(ScrollState {
        nav: RefCell::new(NavBarStyler::new(config.nav.clone())),
        frame: FrameGate::new(),
    });

    let results = [
        ("theme toggle", install_theme_toggle(&window, &document, &config)),
        ("smooth scroll", install_smooth_scroll(&window, &document, &config)),
        ("nav styler", install_nav_styler(&window, &document, &config, &state)),
        ("fade-in", install_visibility_observer(&document, &config.visibility, &config.selectors.fade_in)),
        ("hero reveal", install_hero_reveal(&window, &document, &config)),
        ("parallax", install_parallax(&window, &document, &config, &state)),
    ];
    for (name, result) in results {
        if let Err(err) = result {
            log::warn!("{name} disabled: {err}");
        }
    }
    log::info!("page behaviors installed");
    Ok(())
}

fn add_listener(
    target: &web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
) -> Result<(), DomError> {
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| DomError::js("addEventListener", err))?;
    closure.forget();
    Ok(())
}

// =============================================================
// Theme
// =============================================================

/// Apply the stored theme and wire `#theme-toggle`, if present.
pub fn install_theme_toggle(window: &Window, document: &Document, config: &PageConfig) -> Result<(), DomError> {
    let store: Box<dyn PreferenceStore> = match LocalStorage::open(window) {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            log::warn!("{err}; theme will not persist");
            Box::new(MemoryStore::default())
        }
    };
    let mut themes = ThemeStore::new(store, config.theme.clone());

    let toggle = document.get_element_by_id(&config.selectors.theme_toggle_id);
    let surface = DocumentThemeSurface {
        root: document.document_element(),
        icon: toggle.as_ref().and_then(|t| dom::query_within(t, &config.selectors.theme_icon)),
        attribute: config.theme.root_attribute.clone(),
    };
    let restored = themes.restore(&surface);
    log::debug!("theme restored: {restored}");

    let Some(toggle) = toggle else {
        log::debug!("no #{} element, theme toggle disabled", config.selectors.theme_toggle_id);
        return Ok(());
    };

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let next = themes.toggle(&surface);
        log::debug!("theme switched to {next}");
    });
    add_listener(&toggle, "click", on_click)
}

// =============================================================
// Smooth scroll
// =============================================================

/// Intercept every in-page anchor and scroll smoothly to its section.
pub fn install_smooth_scroll(window: &Window, document: &Document, config: &Rc<PageConfig>) -> Result<(), DomError> {
    let router = Rc::new(ScrollRouter::new(config.scroll.clone()));
    let anchors = dom::query_all(document, &config.selectors.anchor);
    log::debug!("smooth scroll: {} anchors", anchors.len());

    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let config = Rc::clone(config);
        let router = Rc::clone(&router);
        let link = anchor.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let layout = DomLayout { window: &window, document: &document, selectors: &config.selectors };
            if let Some(top) = router.resolve(&href, &layout) {
                log::trace!("scrolling to {href} at {top}");
                dom::smooth_scroll_to(&window, top);
            }
        });
        add_listener(&anchor, "click", on_click)?;
    }
    Ok(())
}

// =============================================================
// Nav bar
// =============================================================

/// Restyle the nav bar on every scroll event.
pub fn install_nav_styler(
    window: &Window,
    document: &Document,
    config: &Rc<PageConfig>,
    state: &Rc<ScrollState>,
) -> Result<(), DomError> {
    let Some(nav) = dom::query(document, &config.selectors.nav).and_then(|el| el.dyn_ref::<HtmlElement>().cloned()) else {
        log::debug!("no {} element, nav styling disabled", config.selectors.nav);
        return Ok(());
    };
    let links: Vec<HtmlElement> = dom::query_all(document, &config.selectors.nav_link)
        .into_iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect();
    let root = document.document_element();

    let handler_window = window.clone();
    let document = document.clone();
    let config = Rc::clone(config);
    let state = Rc::clone(state);
    let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let scroll_y = dom::scroll_y(&handler_window);
        let hero_height = dom::offset_height(&document, &config.selectors.hero).unwrap_or(0.0);
        let theme = Theme::from_attribute(
            root.as_ref()
                .and_then(|r| r.get_attribute(&config.theme.root_attribute))
                .as_deref(),
        );
        let mut styler = state.nav.borrow_mut();
        let style = styler.on_scroll(scroll_y, hero_height, theme);
        dom::set_style(&nav, "background-color", &style.background);
        dom::set_style(&nav, "box-shadow", &style.shadow);
        for link in &links {
            dom::set_style(link, "color", &style.link_color);
        }
    });
    add_listener(window, "scroll", on_scroll)
}

// =============================================================
// Visibility
// =============================================================

/// Toggle the visible class on every fade-in element as it crosses the viewport.
pub fn install_visibility_observer(
    document: &Document,
    config: &VisibilityConfig,
    selector: &str,
) -> Result<(), DomError> {
    let targets = dom::query_all(document, selector);
    if targets.is_empty() {
        log::debug!("no {selector} elements, fade-in disabled");
        return Ok(());
    }

    let visible_class = config.visible_class.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let class_list = entry.target().class_list();
                let result = match visibility::class_change(entry.is_intersecting()) {
                    ClassChange::Add => class_list.add_1(&visible_class),
                    ClassChange::Remove => class_list.remove_1(&visible_class),
                };
                if let Err(err) = result {
                    log::debug!("visibility class not updated: {}", dom::describe(&err));
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config.threshold.into());
    options.set_root_margin(&visibility::root_margin(config));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| DomError::js("IntersectionObserver", err))?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    // The browser keeps an observer alive while it has targets.
    log::debug!("observing {} fade-in elements", targets.len());
    Ok(())
}

/// Reveal hero fade-in elements one after another once the page has loaded.
pub fn install_hero_reveal(window: &Window, document: &Document, config: &Rc<PageConfig>) -> Result<(), DomError> {
    if document.ready_state() == "complete" {
        reveal_hero(document, config);
        return Ok(());
    }
    let document = document.clone();
    let config = Rc::clone(config);
    let on_load = Closure::<dyn FnMut(Event)>::new(move |_event: Event| reveal_hero(&document, &config));
    add_listener(window, "load", on_load)
}

fn reveal_hero(document: &Document, config: &PageConfig) {
    let elements = dom::query_all(document, &config.selectors.hero_fade_in);
    for (index, element) in elements.into_iter().enumerate() {
        let visible_class = config.visibility.visible_class.clone();
        let delay = visibility::stagger_delay(index, &config.visibility);
        Timeout::new(delay, move || {
            if let Err(err) = element.class_list().add_1(&visible_class) {
                log::debug!("hero element not revealed: {}", dom::describe(&err));
            }
        })
        .forget();
    }
}

// =============================================================
// Parallax
// =============================================================

/// Recompute parallax transforms at most once per animation frame.
pub fn install_parallax(
    window: &Window,
    document: &Document,
    config: &Rc<PageConfig>,
    state: &Rc<ScrollState>,
) -> Result<(), DomError> {
    let updater = Rc::new(ParallaxUpdater::new(config.parallax.clone()));
    let frames = AnimationFrames { window: window.clone() };

    let handler_window = window.clone();
    let document = document.clone();
    let config = Rc::clone(config);
    let state = Rc::clone(state);
    let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if state.frame.is_pending() {
            return;
        }
        let window = handler_window.clone();
        let document = document.clone();
        let config = Rc::clone(&config);
        let updater = Rc::clone(&updater);
        state.frame.request(&frames, move || update_parallax(&window, &document, &config, &updater));
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|err| DomError::js("addEventListener", err))?;
    on_scroll.forget();
    Ok(())
}

fn layer_selector(config: &PageConfig, layer: Layer) -> &str {
    match layer {
        Layer::ProjectImage => &config.selectors.project_image,
        Layer::ProjectContent => &config.selectors.project_content,
        Layer::SkillCategory => &config.selectors.skill_category,
    }
}

fn update_parallax(window: &Window, document: &Document, config: &PageConfig, updater: &ParallaxUpdater) {
    let scroll_y = dom::scroll_y(window);
    let viewport_height = dom::viewport_height(window);
    for layer in Layer::ALL {
        for element in dom::query_all(document, layer_selector(config, layer)) {
            let Some(element) = element.dyn_ref::<HtmlElement>() else {
                continue;
            };
            if let Some(transform) = updater.transform(layer, dom::client_rect(element), viewport_height, scroll_y) {
                dom::set_style(element, "transform", &transform.to_string());
            }
        }
    }
}
