// Attach/refresh cycle for the sticky flow, independent of the DOM.
//
// `sticky_flow.rs` supplies the browser-backed surface and event source.

use crate::disposer::Disposer;
use crate::geometry::{self, FlowFrame, FlowUpdate};
use std::rc::Rc;

/// Where a flow reads its geometry from and writes its transform/classes to.
pub trait FlowSurface {
    fn read(&self) -> FlowFrame;
    fn write(&self, update: &FlowUpdate);
}

/// Source of the "viewport scrolled/resized" signal.
pub trait EventSource {
    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Disposer;
}

/// One read, compute, write pass.
pub fn refresh<S: FlowSurface + ?Sized>(surface: &S, threshold: f64) -> FlowUpdate {
    let frame = surface.read();
    let update = geometry::plan(&frame, threshold);
    log::trace!(
        "[flow] y={:.0} progress={:.3} tx={:.1} active={}",
        frame.viewport.scroll_y,
        update.progress,
        update.translate_x,
        update.active.len()
    );
    surface.write(&update);
    update
}

/// Refresh once, then on every event from `events` until disposed.
///
/// A missing surface attaches nothing and returns an already-disposed handle.
pub fn attach<S, E>(surface: Option<S>, events: &E, threshold: f64) -> Disposer
where
    S: FlowSurface + 'static,
    E: EventSource + ?Sized,
{
    let Some(surface) = surface else {
        log::debug!("[flow] container or track missing; not attaching");
        return Disposer::noop();
    };
    let surface = Rc::new(surface);
    refresh(surface.as_ref(), threshold);

    let handler_surface = Rc::clone(&surface);
    let subscription = events.subscribe(Box::new(move || {
        refresh(handler_surface.as_ref(), threshold);
    }));
    Disposer::new(move || {
        subscription.dispose();
        drop(surface);
        log::info!("[flow] detached");
    })
}
