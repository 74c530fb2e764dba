//! Sticky horizontal flow: vertical scroll through a tall container scrubs a
//! wide track sideways and highlights the steps near the viewport center.

use crate::config::FlowConfig;
use crate::controller::{self, EventSource, FlowSurface};
use crate::disposer::Disposer;
use crate::dom;
use crate::geometry::{self, FlowFrame, FlowUpdate};
use web_sys as web;

const EVENTS: &[&str] = &["scroll", "resize"];

struct DomFlow {
    window: web::Window,
    container: web::HtmlElement,
    track: web::HtmlElement,
    steps: Vec<web::Element>,
    active_class: String,
}

impl FlowSurface for DomFlow {
    fn read(&self) -> FlowFrame {
        FlowFrame {
            viewport: dom::viewport_metrics(&self.window),
            container: dom::container_geometry(&self.container),
            track: dom::track_geometry(&self.track),
            applied_translate_x: geometry::parse_translate_x(&dom::transform_of(&self.track)),
            step_centers: self.steps.iter().map(dom::center_x).collect(),
            step_active: self
                .steps
                .iter()
                .map(|s| s.class_list().contains(&self.active_class))
                .collect(),
        }
    }

    fn write(&self, update: &FlowUpdate) {
        dom::set_transform(&self.track, &geometry::format_translate_x(update.translate_x));
        for &(i, on) in &update.changes {
            if let Some(step) = self.steps.get(i) {
                dom::set_class(step, &self.active_class, on);
            }
        }
    }
}

struct WindowEvents(web::Window);

impl EventSource for WindowEvents {
    fn subscribe(&self, mut handler: Box<dyn FnMut()>) -> Disposer {
        dom::listen(&self.0, EVENTS, move |_ev| handler())
    }
}

/// Wire the flow for `container`/`track` with the given steps.
///
/// Missing elements disable the effect and yield a no-op disposer. The
/// layout is updated once before returning so the first paint is correct.
pub fn attach(
    container: Option<web::HtmlElement>,
    track: Option<web::HtmlElement>,
    steps: Vec<web::Element>,
    config: FlowConfig,
) -> Disposer {
    let Some(window) = web::window() else {
        return Disposer::noop();
    };
    let mut config = config;
    let surface = match (container, track) {
        (Some(container), Some(track)) => {
            let attr = container.get_attribute(crate::constants::ACTIVE_THRESHOLD_ATTR);
            if let Err(e) = config.apply_threshold_attr(attr.as_deref()) {
                log::warn!("[flow] ignoring override: {}", e);
            }
            log::info!(
                "[flow] attached steps={} threshold={}px",
                steps.len(),
                config.active_threshold_px
            );
            Some(DomFlow {
                window: window.clone(),
                container,
                track,
                steps,
                active_class: config.active_class.clone(),
            })
        }
        _ => None,
    };
    controller::attach(surface, &WindowEvents(window), config.active_threshold_px)
}

/// Look the flow elements up by the selectors in `config` and attach.
pub fn attach_in(document: &web::Document, config: FlowConfig) -> Disposer {
    let container = dom::query_html(document, &config.container_selector);
    let track = dom::query_html(document, &config.track_selector);
    let steps = track
        .as_ref()
        .map(|t| dom::query_all(t, &config.step_selector))
        .unwrap_or_default();
    attach(container, track, steps, config)
}
