//! # vunit
//! Viewport-relative units, font scaling and breakpoint matching for reactive UIs.
//!
//! ## Units
//! The unit functions turn a relative magnitude into pixels against the window
//! metrics read at call time:
//!
//! ```rust
//! use vunit::{FixedMetrics, percentage, rem, vmin, vw};
//!
//! let window = FixedMetrics::new(400.0, 800.0, 1.0);
//!
//! assert_eq!(vw(&window, 10.0), 40.0);
//! assert_eq!(vmin(&window, 50.0), 200.0);
//! assert_eq!(rem(&window, 2.0), 32.0);
//! assert_eq!(percentage(50.0, 200.0), 100.0);
//! ```
//!
//! Nothing is cached. After a rotation the next call already sees the new
//! size, so there is no invalidation step.
//!
//! ## Metrics
//! The metrics are never read from a global. Every function takes a
//! [`MetricsSource`]: [`WindowMetrics`] is the live, signal-backed source a
//! windowing layer keeps up to date, and [`FixedMetrics`] is a frozen snapshot
//! for headless work and tests.
//!
//! ## Re-rendering
//! Reading units does not subscribe anything. A render effect that should
//! re-run on resize calls [`use_rerender_on_dimension_change`] (or reads
//! [`use_window_metrics`]) and then evaluates its units as usual:
//!
//! ```rust
//! use vunit::{WindowMetrics, use_rerender_on_dimension_change, vw};
//! use vunit::kurbo::Size;
//! use vunit::reactive::Scope;
//!
//! let window = WindowMetrics::new(Size::new(400.0, 800.0), 1.0);
//! let cx = Scope::new();
//!
//! cx.create_effect(move |_| {
//!     use_rerender_on_dimension_change(&window);
//!     let _gutter = vw(&window, 5.0);
//!     // lay out with `gutter`
//! });
//!
//! window.set_size(Size::new(800.0, 400.0)); // the effect runs again
//! cx.dispose(); // and never again
//! ```
//!
//! Outside a reactive render, [`watch_metrics`] registers a plain callback.
//!
//! ## Breakpoints
//! [`use_breakpoints`] matches the window width against a list of thresholds
//! and yields a [`Responsive`] handle whose [`Pick`] selects one value per
//! tier. See the [`responsive`] module for the matching rule.

mod error;
pub mod hooks;
pub mod metrics;
pub mod responsive;
pub mod unit;
pub mod units;

pub use floem_reactive as reactive;
pub use peniko::kurbo;

pub use error::ResponsiveError;
pub use hooks::{MetricsWatch, use_rerender_on_dimension_change, use_window_metrics, watch_metrics};
pub use metrics::{FixedMetrics, Metrics, MetricsSource, WindowMetrics};
pub use responsive::{Breakpoints, Pick, Responsive, use_breakpoints};
pub use unit::{ClampedLength, Length};
pub use units::{DEFAULT_REM_BASE, clamp, percentage, rem, rem_with_base, vh, vmax, vmin, vw};
