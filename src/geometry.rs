// Pure geometry for the sticky horizontal flow.
//
// Nothing here touches the DOM. A handler reads a [`FlowFrame`], hands it to
// [`plan`], and writes the resulting [`FlowUpdate`] back in one pass, which
// keeps every layout read ahead of every style write.

use fnv::FnvHashSet;

/// Window scroll position and inner size, read fresh per event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub inner_height: f64,
    pub inner_width: f64,
}

impl ViewportMetrics {
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.inner_width / 2.0
    }
}

/// Scroll container position and size in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerGeometry {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    pub scroll_width: f64,
}

/// Everything one scroll/resize handler invocation reads before writing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowFrame {
    pub viewport: ViewportMetrics,
    pub container: ContainerGeometry,
    pub track: TrackGeometry,
    /// Translation currently on the track, as parsed from its transform.
    pub applied_translate_x: f64,
    /// Step centers in viewport x, measured with `applied_translate_x` in effect.
    pub step_centers: Vec<f64>,
    pub step_active: Vec<bool>,
}

/// Output of the compute phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowUpdate {
    pub progress: f64,
    pub translate_x: f64,
    pub active: FnvHashSet<usize>,
    /// `(step index, new flag)` for each step whose flag flips.
    pub changes: Vec<(usize, bool)>,
}

/// Normalized position of `scroll_y` within the container's scroll range.
///
/// The range is `[top, top + height - viewport_height]`. A range of zero or
/// negative length pins progress to 0 before `top` and 1 from `top` onwards.
pub fn compute_progress(
    scroll_y: f64,
    container_top: f64,
    container_height: f64,
    viewport_height: f64,
) -> f64 {
    let start = container_top;
    let end = container_top + container_height - viewport_height;
    if end <= start {
        return if scroll_y >= start { 1.0 } else { 0.0 };
    }
    let progress = (scroll_y - start) / (end - start);
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Horizontal shift for the track; never negative.
#[inline]
pub fn compute_translate_x(progress: f64, track_scroll_width: f64, viewport_width: f64) -> f64 {
    let max_translate = (track_scroll_width - viewport_width).max(0.0);
    progress * max_translate
}

/// Indices of steps strictly closer than `threshold` to `viewport_center`.
pub fn compute_active_steps(
    step_centers: &[f64],
    viewport_center: f64,
    threshold: f64,
) -> FnvHashSet<usize> {
    step_centers
        .iter()
        .enumerate()
        .filter(|(_, c)| (viewport_center - **c).abs() < threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Shift measured centers to where they land once `next_translate_x` replaces
/// `applied_translate_x`. The track moves left as translation grows.
#[inline]
pub fn project_step_centers(
    measured: &[f64],
    applied_translate_x: f64,
    next_translate_x: f64,
) -> Vec<f64> {
    let delta = applied_translate_x - next_translate_x;
    measured.iter().map(|c| c + delta).collect()
}

/// Steps whose flag differs between `current` and `active`.
pub fn active_changes(current: &[bool], active: &FnvHashSet<usize>) -> Vec<(usize, bool)> {
    current
        .iter()
        .enumerate()
        .filter_map(|(i, &was)| {
            let now = active.contains(&i);
            (was != now).then_some((i, now))
        })
        .collect()
}

/// Compute phase: frame in, update out.
pub fn plan(frame: &FlowFrame, threshold: f64) -> FlowUpdate {
    let progress = compute_progress(
        frame.viewport.scroll_y,
        frame.container.top,
        frame.container.height,
        frame.viewport.inner_height,
    );
    let translate_x = compute_translate_x(
        progress,
        frame.track.scroll_width,
        frame.viewport.inner_width,
    );
    let centers = project_step_centers(
        &frame.step_centers,
        frame.applied_translate_x,
        translate_x,
    );
    let active = compute_active_steps(&centers, frame.viewport.center_x(), threshold);
    let changes = active_changes(&frame.step_active, &active);
    FlowUpdate {
        progress,
        translate_x,
        active,
        changes,
    }
}

/// CSS transform value for a track shifted left by `translate_x` pixels.
#[inline]
pub fn format_translate_x(translate_x: f64) -> String {
    format!("translateX(-{}px)", translate_x)
}

/// Inverse of [`format_translate_x`]. Anything else, including an empty
/// value, reads as no translation.
pub fn parse_translate_x(transform: &str) -> f64 {
    let inner = transform
        .trim()
        .strip_prefix("translateX(")
        .and_then(|s| s.strip_suffix(')'))
        .map(str::trim)
        .and_then(|s| s.strip_suffix("px"));
    match inner.and_then(|s| s.parse::<f64>().ok()) {
        Some(v) if v.is_finite() => -v,
        _ => 0.0,
    }
}

/// Whether the floating call-to-action should be shown.
#[inline]
pub fn cta_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Selector for an in-page anchor href, or `None` when it names no element.
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    (!fragment.is_empty() && !fragment.chars().any(char::is_whitespace)).then_some(href)
}
