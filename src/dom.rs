use crate::disposer::Disposer;
use crate::geometry::{ContainerGeometry, TrackGeometry, ViewportMetrics};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Register `handler` for every event in `events` on `target`.
///
/// The returned disposer removes each registration and then drops the
/// closure. Registrations that fail are logged and skipped.
pub fn listen(
    target: &web::EventTarget,
    events: &'static [&'static str],
    handler: impl FnMut(web::Event) + 'static,
) -> Disposer {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    for ev in events {
        if let Err(e) = target.add_event_listener_with_callback(ev, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] addEventListener({}) failed: {:?}", ev, e);
        }
    }
    let target = target.clone();
    Disposer::new(move || {
        for ev in events {
            if let Err(e) =
                target.remove_event_listener_with_callback(ev, closure.as_ref().unchecked_ref())
            {
                log::warn!("[dom] removeEventListener({}) failed: {:?}", ev, e);
            }
        }
        drop(closure);
    })
}

pub fn query_html(root: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    match root.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
        Err(e) => {
            log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
            None
        }
    }
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_nodes(root.query_selector_all(selector), selector)
}

pub fn query_all_in(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_nodes(document.query_selector_all(selector), selector)
}

fn collect_nodes(
    list: Result<web::NodeList, wasm_bindgen::JsValue>,
    selector: &str,
) -> Vec<web::Element> {
    let list = match list {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

// ---------------- Reads ----------------
pub fn viewport_metrics(window: &web::Window) -> ViewportMetrics {
    ViewportMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        inner_height: js_number(window.inner_height()),
        inner_width: js_number(window.inner_width()),
    }
}

#[inline]
pub fn container_geometry(container: &web::HtmlElement) -> ContainerGeometry {
    ContainerGeometry {
        top: container.offset_top() as f64,
        height: container.offset_height() as f64,
    }
}

#[inline]
pub fn track_geometry(track: &web::HtmlElement) -> TrackGeometry {
    TrackGeometry {
        scroll_width: track.scroll_width() as f64,
    }
}

#[inline]
pub fn center_x(el: &web::Element) -> f64 {
    let rect = el.get_bounding_client_rect();
    rect.left() + rect.width() / 2.0
}

#[inline]
pub fn transform_of(el: &web::HtmlElement) -> String {
    el.style().get_property_value("transform").unwrap_or_default()
}

#[inline]
fn js_number(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

// ---------------- Writes ----------------
pub fn set_transform(el: &web::HtmlElement, value: &str) {
    if let Err(e) = el.style().set_property("transform", value) {
        log::warn!("[dom] transform write failed: {:?}", e);
    }
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    let res = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = res {
        log::warn!("[dom] class {:?} toggle failed: {:?}", class, e);
    }
}
