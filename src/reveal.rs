//! Run-once "fade-up" reveal driven by an IntersectionObserver.

use crate::config::PageConfig;
use crate::disposer::Disposer;
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn attach_reveal(document: &web::Document, config: &PageConfig) -> anyhow::Result<Disposer> {
    let targets = dom::query_all_in(document, &config.reveal_selector);
    if targets.is_empty() {
        log::debug!("[reveal] nothing matches {:?}", config.reveal_selector);
        return Ok(Disposer::noop());
    }

    let class = config.visible_class.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, &class, true);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&config.reveal_root_margin);
    init.set_threshold(&JsValue::from_f64(config.reveal_intersection_ratio));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("{:?}", e))?;
    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());

    Ok(Disposer::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}
