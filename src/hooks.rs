//! Bridges between the read-once unit functions and the reactive runtime.
//!
//! The unit functions read the metrics without subscribing. A render effect
//! that wants to be re-run on rotation or resize calls one of the hooks here
//! first; from then on every change re-runs it, and each run re-evaluates the
//! unit calls it makes against the new metrics.

use floem_reactive::Scope;

use crate::metrics::{Metrics, MetricsSource};

/// Re-runs the calling effect whenever the window metrics change.
///
/// Call it inside the effect that renders. The subscription is owned by that
/// effect: it is re-established on every run and removed when the effect's
/// scope is disposed.
pub fn use_rerender_on_dimension_change(metrics: &impl MetricsSource) {
    metrics.track();
}

/// The current metrics, subscribing the calling effect to future changes.
pub fn use_window_metrics(metrics: &impl MetricsSource) -> Metrics {
    metrics.track();
    metrics.metrics()
}

/// Calls `on_change` with the new metrics every time they change.
///
/// The callback is not invoked for the metrics current at registration. It
/// stays registered until the returned [`MetricsWatch`] is stopped or dropped,
/// independently of the scope it was created in.
pub fn watch_metrics<S>(source: S, on_change: impl Fn(Metrics) + 'static) -> MetricsWatch
where
    S: MetricsSource + 'static,
{
    // a root scope: disposing it leaves no entry behind in a parent
    let cx = Scope::new();
    cx.create_effect(move |prev: Option<()>| {
        let metrics = use_window_metrics(&source);
        if prev.is_some() {
            on_change(metrics);
        }
    });
    MetricsWatch { cx: Some(cx) }
}

/// Keeps a [`watch_metrics`] callback registered.
#[must_use = "the callback is unregistered as soon as the watch is dropped"]
#[derive(Debug)]
pub struct MetricsWatch {
    cx: Option<Scope>,
}

impl MetricsWatch {
    pub fn stop(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        if let Some(cx) = self.cx.take() {
            cx.dispose();
        }
    }
}

impl Drop for MetricsWatch {
    fn drop(&mut self) {
        self.dispose();
    }
}
