// Host-side tests for configuration defaults and overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use constants::*;

#[test]
fn defaults_follow_constants() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.flow.active_threshold_px, 300.0);
    assert_eq!(cfg.flow.active_class, "is-active");
    assert_eq!(cfg.flow.container_selector, FLOW_CONTAINER_SELECTOR);
    assert_eq!(cfg.cta_scroll_threshold_px, 500.0);
    assert_eq!(cfg.reveal_intersection_ratio, 0.1);
    assert_eq!(cfg.visible_class, "visible");
    assert!(cfg.validate().is_ok());
}

#[test]
fn threshold_attr_overrides_default() {
    let mut flow = FlowConfig::default();
    flow.apply_threshold_attr(Some(" 120 ")).unwrap();
    assert_eq!(flow.active_threshold_px, 120.0);

    let mut untouched = FlowConfig::default();
    untouched.apply_threshold_attr(None).unwrap();
    assert_eq!(untouched, FlowConfig::default());
}

#[test]
fn bad_threshold_attr_leaves_config_unchanged() {
    let mut flow = FlowConfig::default();
    assert_eq!(
        flow.apply_threshold_attr(Some("wide")),
        Err(ConfigError::Unparsable {
            attr: ACTIVE_THRESHOLD_ATTR,
            value: "wide".to_string(),
        })
    );
    assert_eq!(
        flow.apply_threshold_attr(Some("-5")),
        Err(ConfigError::InvalidThreshold(-5.0))
    );
    assert!(flow.apply_threshold_attr(Some("inf")).is_err());
    assert_eq!(flow.active_threshold_px, ACTIVE_THRESHOLD_PX);
}

#[test]
fn validate_rejects_bad_values() {
    let mut flow = FlowConfig::default();
    flow.active_threshold_px = 0.0;
    assert_eq!(flow.validate(), Err(ConfigError::InvalidThreshold(0.0)));

    let mut flow = FlowConfig::default();
    flow.step_selector = "  ".to_string();
    assert_eq!(flow.validate(), Err(ConfigError::EmptySelector("step")));

    let mut page = PageConfig::default();
    page.reveal_intersection_ratio = 1.5;
    assert_eq!(page.validate(), Err(ConfigError::InvalidRatio(1.5)));
}

#[test]
fn errors_render_readably() {
    let err = ConfigError::InvalidThreshold(-1.0);
    assert_eq!(
        err.to_string(),
        "active threshold must be a positive finite number, got -1"
    );
}
