use crate::disposer::Disposer;
use crate::dom;
use crate::geometry::cta_visible;
use web_sys as web;

/// Show the floating call-to-action once the page is scrolled past
/// `threshold_px`; hide it again above that.
pub fn attach_floating_cta(
    element: Option<web::Element>,
    threshold_px: f64,
    visible_class: &str,
) -> Disposer {
    let (Some(el), Some(window)) = (element, web::window()) else {
        log::debug!("[cta] no floating call-to-action on this page");
        return Disposer::noop();
    };
    let class = visible_class.to_string();
    let update = {
        let window = window.clone();
        move || {
            let y = window.scroll_y().unwrap_or(0.0);
            dom::set_class(&el, &class, cta_visible(y, threshold_px));
        }
    };
    update();
    dom::listen(&window, &["scroll"], move |_ev| update())
}
