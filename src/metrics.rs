//! Window metrics: the device state every unit is resolved against.
//!
//! The unit functions never reach for a global. They are handed a
//! [`MetricsSource`] and read it fresh on every call, so a rotation or a change
//! of the system font size shows up in the very next call.

use floem_reactive::{RwSignal, Scope, SignalGet, SignalTrack, SignalUpdate, batch};
use peniko::kurbo::Size;

/// A snapshot of the window metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Width of the application window, not of the physical screen.
    pub width: f64,
    /// Height of the application window, not of the physical screen.
    pub height: f64,
    /// The user's accessibility text size multiplier.
    pub font_scale: f64,
}

impl Metrics {
    pub const fn new(width: f64, height: f64, font_scale: f64) -> Self {
        Self {
            width,
            height,
            font_scale,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Something that can report the current window metrics.
pub trait MetricsSource {
    /// The current window size. Does not subscribe the running effect.
    fn window_size(&self) -> Size;

    /// The current font scale. Does not subscribe the running effect.
    fn font_scale(&self) -> f64;

    /// Subscribes the running effect to every metrics change.
    fn track(&self);

    fn metrics(&self) -> Metrics {
        let size = self.window_size();
        Metrics::new(size.width, size.height, self.font_scale())
    }
}

impl<T: MetricsSource + ?Sized> MetricsSource for &T {
    fn window_size(&self) -> Size {
        (**self).window_size()
    }

    fn font_scale(&self) -> f64 {
        (**self).font_scale()
    }

    fn track(&self) {
        (**self).track()
    }

    fn metrics(&self) -> Metrics {
        (**self).metrics()
    }
}

/// Live window metrics backed by signals.
///
/// The windowing layer calls [`set_size`](Self::set_size) and
/// [`set_font_scale`](Self::set_font_scale) as the platform reports changes;
/// any effect that called [`MetricsSource::track`] re-runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetrics {
    size: RwSignal<Size>,
    font_scale: RwSignal<f64>,
}

impl WindowMetrics {
    /// Creates the metrics in the current scope.
    pub fn new(size: Size, font_scale: f64) -> Self {
        Self::new_in(Scope::current(), size, font_scale)
    }

    pub fn new_in(cx: Scope, size: Size, font_scale: f64) -> Self {
        Self {
            size: cx.create_rw_signal(size),
            font_scale: cx.create_rw_signal(font_scale),
        }
    }

    pub fn set_size(&self, size: Size) {
        if self.size.get_untracked() == size {
            return;
        }
        tracing::trace!(width = size.width, height = size.height, "window size changed");
        self.size.set(size);
    }

    pub fn set_font_scale(&self, font_scale: f64) {
        if self.font_scale.get_untracked() == font_scale {
            return;
        }
        tracing::trace!(font_scale, "font scale changed");
        self.font_scale.set(font_scale);
    }

    /// Applies a whole snapshot at once; dependents re-run a single time.
    pub fn update(&self, metrics: Metrics) {
        batch(|| {
            self.set_size(metrics.size());
            self.set_font_scale(metrics.font_scale);
        });
    }

    pub fn size_signal(&self) -> RwSignal<Size> {
        self.size
    }
}

impl MetricsSource for WindowMetrics {
    fn window_size(&self) -> Size {
        self.size.get_untracked()
    }

    fn font_scale(&self) -> f64 {
        self.font_scale.get_untracked()
    }

    fn track(&self) {
        self.size.track();
        self.font_scale.track();
    }
}

/// A metrics source frozen at one snapshot, for headless rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics(pub Metrics);

impl FixedMetrics {
    pub const fn new(width: f64, height: f64, font_scale: f64) -> Self {
        Self(Metrics::new(width, height, font_scale))
    }
}

impl MetricsSource for FixedMetrics {
    fn window_size(&self) -> Size {
        self.0.size()
    }

    fn font_scale(&self) -> f64 {
        self.0.font_scale
    }

    fn track(&self) {}

    fn metrics(&self) -> Metrics {
        self.0
    }
}
