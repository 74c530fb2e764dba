/// Landing page selectors and tuning constants.
///
/// Selectors and class names mirror the page markup; numeric values are in
/// CSS pixels unless noted otherwise.
// Sticky horizontal flow
pub const FLOW_CONTAINER_SELECTOR: &str = ".sticky-flow-container";
pub const FLOW_TRACK_SELECTOR: &str = ".sticky-flow-track";
pub const FLOW_STEP_SELECTOR: &str = ".flow-step";
pub const FLOW_ACTIVE_CLASS: &str = "is-active";
pub const ACTIVE_THRESHOLD_PX: f64 = 300.0; // distance from viewport center
pub const ACTIVE_THRESHOLD_ATTR: &str = "data-active-threshold";

// Floating call-to-action
pub const CTA_ELEMENT_ID: &str = "floating-cta";
pub const CTA_SCROLL_THRESHOLD_PX: f64 = 500.0;

// Fade-up reveal
pub const REVEAL_SELECTOR: &str = ".fade-up";
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const REVEAL_INTERSECTION_RATIO: f64 = 0.1; // fraction of the element in view

// Shared marker for CTA and reveal
pub const VISIBLE_CLASS: &str = "visible";

// In-page anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
