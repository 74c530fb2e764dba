#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod anchors;
mod config;
mod constants;
mod controller;
mod cta;
mod disposer;
mod dom;
mod geometry;
mod reveal;
mod sticky_flow;

use config::{FlowConfig, PageConfig};
use disposer::Disposer;

thread_local! {
    // Effects wired by `start()`; they live until `teardown()` or page unload.
    static PAGE: RefCell<Vec<Disposer>> = const { RefCell::new(Vec::new()) };
}

/// Handle returned to JS by [`attach_sticky_flow`].
#[wasm_bindgen]
pub struct FlowHandle {
    inner: Disposer,
}

#[wasm_bindgen]
impl FlowHandle {
    /// Remove the scroll/resize listeners. Safe to call more than once.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}

/// Attach an additional sticky flow instance from JS.
#[wasm_bindgen]
pub fn attach_sticky_flow(
    container: Option<web::HtmlElement>,
    track: Option<web::HtmlElement>,
) -> FlowHandle {
    let config = FlowConfig::default();
    let steps = track
        .as_ref()
        .map(|t| dom::query_all(t, &config.step_selector))
        .unwrap_or_default();
    FlowHandle {
        inner: sticky_flow::attach(container, track, steps, config),
    }
}

#[wasm_bindgen(js_name = computeProgress)]
pub fn compute_progress(
    scroll_y: f64,
    container_top: f64,
    container_height: f64,
    viewport_height: f64,
) -> f64 {
    geometry::compute_progress(scroll_y, container_top, container_height, viewport_height)
}

#[wasm_bindgen(js_name = computeTranslateX)]
pub fn compute_translate_x(progress: f64, track_scroll_width: f64, viewport_width: f64) -> f64 {
    geometry::compute_translate_x(progress, track_scroll_width, viewport_width)
}

/// Dispose everything `start()` wired.
#[wasm_bindgen]
pub fn teardown() {
    let parts = PAGE.with(|p| std::mem::take(&mut *p.borrow_mut()));
    log::info!("[page] tearing down {} effects", parts.len());
    drop(Disposer::merge(parts));
}

fn wire_page(document: &web::Document, config: &PageConfig) -> Vec<Disposer> {
    let mut parts = vec![
        sticky_flow::attach_in(document, config.flow.clone()),
        cta::attach_floating_cta(
            document.get_element_by_id(&config.cta_element_id),
            config.cta_scroll_threshold_px,
            &config.visible_class,
        ),
        anchors::attach_anchor_scroll(document, config),
    ];
    match reveal::attach_reveal(document, config) {
        Ok(d) => parts.push(d),
        Err(e) => log::warn!("[page] fade-up reveal disabled: {e:?}"),
    }
    parts
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = PageConfig::default();
    if let Err(e) = config.validate() {
        log::error!("[page] invalid configuration: {}", e);
        return;
    }
    let Some(document) = dom::window_document() else {
        log::warn!("[page] no document; nothing to wire");
        return;
    };
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let pending = dom::listen(&document, &["DOMContentLoaded"], move |_ev| {
            wire_and_keep(&doc, &config)
        });
        PAGE.with(|p| p.borrow_mut().push(pending));
    } else {
        wire_and_keep(&document, &config);
    }
}

fn wire_and_keep(document: &web::Document, config: &PageConfig) {
    let parts = wire_page(document, config);
    log::info!("[page] landing page loaded ({} effects)", parts.len());
    PAGE.with(|p| p.borrow_mut().extend(parts));
}
