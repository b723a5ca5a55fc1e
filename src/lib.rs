//! Page behaviors for the portfolio site.
//!
//! This crate is compiled to WebAssembly and started by the page. It owns the
//! scroll-and-animation orchestration: anchor offsets for smooth scrolling,
//! the scroll-reactive nav bar, replayable fade-in visibility, frame-coalesced
//! parallax, and the persisted light/dark theme.
//!
//! Every decision is made by plain Rust over measured values so it can be
//! tested natively. The browser glue lives in [`dom`] and [`page`] and is only
//! compiled with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Selectors, offsets, colors and other tunables |
//! | [`theme`] | Theme preference store and toggle |
//! | [`scroll`] | Anchor target resolution and scroll offsets |
//! | [`nav`] | Nav bar style selection on scroll |
//! | [`visibility`] | Fade-in class toggling and hero stagger |
//! | [`parallax`] | Per-frame translation transforms |
//! | [`frame`] | Single-pending animation frame gate |
//! | [`geom`] | Viewport-relative element rectangles |
//! | `dom` | web-sys adapters for storage, layout and frames (hydrate) |
//! | `page` | Wires every component to the live document (hydrate) |

pub mod config;
pub mod frame;
pub mod geom;
pub mod nav;
pub mod parallax;
pub mod scroll;
pub mod theme;
pub mod visibility;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod page;

/// WASM entry point: installs logging and wires the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = page::read_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("console logger already installed");
    }
    if let Err(err) = &loaded {
        log::warn!("ignoring page config override: {err}");
    }

    if let Err(err) = page::install(&config) {
        log::error!("page behaviors disabled: {err}");
    }
}
