use crate::metrics::MetricsSource;

/// The root font size `rem` is measured against, so `rem(1.0)` is 16px at a
/// font scale of 1.
pub const DEFAULT_REM_BASE: f64 = 16.0;

/// `size` percent of the window width. Conventionally `0..=100`, but any
/// value is passed through.
pub fn vw(metrics: &impl MetricsSource, size: f64) -> f64 {
    (metrics.window_size().width / 100.0) * size
}

/// `size` percent of the window height.
pub fn vh(metrics: &impl MetricsSource, size: f64) -> f64 {
    (metrics.window_size().height / 100.0) * size
}

/// The smaller of [`vw`] and [`vh`]. NaN if either is NaN.
pub fn vmin(metrics: &impl MetricsSource, size: f64) -> f64 {
    nan_or(vw(metrics, size), vh(metrics, size), f64::min)
}

/// The larger of [`vw`] and [`vh`]. NaN if either is NaN.
pub fn vmax(metrics: &impl MetricsSource, size: f64) -> f64 {
    nan_or(vw(metrics, size), vh(metrics, size), f64::max)
}

// `f64::min`/`max` return the other operand for a NaN one
fn nan_or(a: f64, b: f64, f: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        f(a, b)
    }
}

/// Restricts `value` to `min..=max`, like CSS `clamp()`.
///
/// The floor is applied before the ceiling, so inverted bounds resolve to
/// `max` instead of panicking the way [`f64::clamp`] does. A NaN operand
/// yields NaN.
pub fn clamp(min: f64, value: f64, max: f64) -> f64 {
    if min.is_nan() || value.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    value.max(min).min(max)
}

/// `value` root ems at the current font scale.
pub fn rem(metrics: &impl MetricsSource, value: f64) -> f64 {
    rem_with_base(metrics, value, DEFAULT_REM_BASE)
}

/// [`rem`] with a root font size other than [`DEFAULT_REM_BASE`].
pub fn rem_with_base(metrics: &impl MetricsSource, value: f64, base: f64) -> f64 {
    metrics.font_scale() * base * value
}

/// `part` percent of `total`.
pub fn percentage(part: f64, total: f64) -> f64 {
    (total / 100.0) * part
}
