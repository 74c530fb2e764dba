// Runtime configuration for the landing page effects.
//
// Defaults come from `constants.rs`. The sticky container may carry a
// `data-active-threshold` attribute which overrides the step activation
// distance for that instance only.

use crate::constants::*;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("active threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),
    #[error("cannot parse {attr}={value:?} as a number")]
    Unparsable { attr: &'static str, value: String },
    #[error("intersection ratio must be within [0, 1], got {0}")]
    InvalidRatio(f64),
    #[error("empty selector for {0}")]
    EmptySelector(&'static str),
}

/// Settings for one sticky horizontal flow instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowConfig {
    pub container_selector: String,
    pub track_selector: String,
    pub step_selector: String,
    pub active_class: String,
    pub active_threshold_px: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            container_selector: FLOW_CONTAINER_SELECTOR.to_string(),
            track_selector: FLOW_TRACK_SELECTOR.to_string(),
            step_selector: FLOW_STEP_SELECTOR.to_string(),
            active_class: FLOW_ACTIVE_CLASS.to_string(),
            active_threshold_px: ACTIVE_THRESHOLD_PX,
        }
    }
}

impl FlowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold(self.active_threshold_px)?;
        for (name, sel) in [
            ("container", &self.container_selector),
            ("track", &self.track_selector),
            ("step", &self.step_selector),
        ] {
            if sel.trim().is_empty() {
                return Err(ConfigError::EmptySelector(name));
            }
        }
        Ok(())
    }

    /// Apply the value of `data-active-threshold`, if the element had one.
    ///
    /// On error the config is left unchanged.
    pub fn apply_threshold_attr(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = raw else {
            return Ok(());
        };
        let px: f64 = raw.trim().parse().map_err(|_| ConfigError::Unparsable {
            attr: ACTIVE_THRESHOLD_ATTR,
            value: raw.to_string(),
        })?;
        check_threshold(px)?;
        self.active_threshold_px = px;
        Ok(())
    }
}

/// Settings for everything `start()` wires on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub flow: FlowConfig,
    pub cta_element_id: String,
    pub cta_scroll_threshold_px: f64,
    pub reveal_selector: String,
    pub reveal_root_margin: String,
    pub reveal_intersection_ratio: f64,
    pub visible_class: String,
    pub anchor_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            flow: FlowConfig::default(),
            cta_element_id: CTA_ELEMENT_ID.to_string(),
            cta_scroll_threshold_px: CTA_SCROLL_THRESHOLD_PX,
            reveal_selector: REVEAL_SELECTOR.to_string(),
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            reveal_intersection_ratio: REVEAL_INTERSECTION_RATIO,
            visible_class: VISIBLE_CLASS.to_string(),
            anchor_selector: ANCHOR_SELECTOR.to_string(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flow.validate()?;
        if !self.cta_scroll_threshold_px.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.cta_scroll_threshold_px));
        }
        if !(0.0..=1.0).contains(&self.reveal_intersection_ratio) {
            return Err(ConfigError::InvalidRatio(self.reveal_intersection_ratio));
        }
        if self.reveal_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector("reveal"));
        }
        if self.anchor_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector("anchor"));
        }
        Ok(())
    }
}

#[inline]
fn check_threshold(px: f64) -> Result<(), ConfigError> {
    if px.is_finite() && px > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold(px))
    }
}
