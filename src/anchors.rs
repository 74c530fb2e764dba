use crate::config::PageConfig;
use crate::disposer::Disposer;
use crate::dom;
use crate::geometry::anchor_target;
use web_sys as web;

fn scroll_to_fragment(document: &web::Document, href: &str) {
    let Some(selector) = anchor_target(href) else {
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        Ok(None) => log::debug!("[anchors] no element for {}", selector),
        Err(e) => log::debug!("[anchors] unusable fragment {}: {:?}", selector, e),
    }
}

/// Replace the jump to in-page anchors with a smooth scroll.
pub fn attach_anchor_scroll(document: &web::Document, config: &PageConfig) -> Disposer {
    let anchors = dom::query_all_in(document, &config.anchor_selector);
    let parts = anchors
        .into_iter()
        .map(|anchor| {
            let document = document.clone();
            let link = anchor.clone();
            dom::listen(&anchor, &["click"], move |ev| {
                ev.prevent_default();
                if let Some(href) = link.get_attribute("href") {
                    scroll_to_fragment(&document, &href);
                }
            })
        })
        .collect::<Vec<_>>();
    log::debug!("[anchors] wired {} links", parts.len());
    Disposer::merge(parts)
}
