//! Breakpoint matching.
//!
//! Breakpoints are width thresholds that split the window widths into tiers.
//! Tier 0 is the implicit base (mobile) tier, used when no threshold matches;
//! the threshold at index `i` selects tier `i + 1`.
//!
//! Thresholds are scanned in the order given and the first one that is `<=`
//! the window width wins. They are never sorted: `[1024.0, 768.0]` and
//! `[768.0, 1024.0]` select different tiers for the same width.

use std::rc::Rc;

use floem_reactive::{Memo, create_memo};
use smallvec::SmallVec;

use crate::{error::ResponsiveError, metrics::MetricsSource};

/// A non-empty list of width thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    thresholds: SmallVec<[f64; 4]>,
}

impl Breakpoints {
    pub fn new(thresholds: impl IntoIterator<Item = f64>) -> Result<Self, ResponsiveError> {
        let thresholds: SmallVec<[f64; 4]> = thresholds.into_iter().collect();
        if thresholds.is_empty() {
            return Err(ResponsiveError::InvalidArgument(
                "breakpoints must contain at least one threshold",
            ));
        }
        Ok(Self { thresholds })
    }

    /// Index of the first threshold `<=` `width`, or `None` when the window is
    /// narrower than every threshold.
    pub fn match_index(&self, width: f64) -> Option<usize> {
        self.thresholds.iter().position(|&threshold| threshold <= width)
    }

    pub fn pick_for(&self, width: f64) -> Pick {
        Pick {
            matched: self.match_index(width),
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false; an empty list is rejected by [`Breakpoints::new`].
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

/// Selects the value for the matched tier out of a per-tier value list.
///
/// Two picks compare equal when they select the same tier, which is what
/// lets [`Responsive::tier_memo`] skip notifying dependents on resizes that
/// stay within a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pick {
    matched: Option<usize>,
}

impl Pick {
    /// The index of the matched threshold.
    pub fn matched(&self) -> Option<usize> {
        self.matched
    }

    /// The index into the value list this pick reads.
    pub fn tier(&self) -> usize {
        self.matched.map_or(0, |index| index + 1)
    }

    /// `values[tier]`, or `None` when the list is too short.
    pub fn pick<'a, T>(&self, values: &'a [T]) -> Option<&'a T> {
        values.get(self.tier())
    }
}

/// The breakpoint match for a live metrics source, returned by
/// [`use_breakpoints`].
///
/// [`get`](Self::get) always matches against the width the source reports at
/// the time of the call, so a render that reads both viewport units and the
/// pick never sees one without the other. It subscribes the running effect to
/// the window metrics, the same subscription
/// [`use_rerender_on_dimension_change`](crate::use_rerender_on_dimension_change)
/// makes.
///
/// Effects that read nothing but the pick can use
/// [`tier_memo`](Self::tier_memo) instead, which only notifies when the tier
/// changes. Mixing the memo with other window reads in one effect re-runs it
/// once per source.
#[derive(Clone)]
pub struct Responsive<S> {
    source: S,
    breakpoints: Rc<Breakpoints>,
    tier: Memo<Pick>,
}

impl<S: MetricsSource> Responsive<S> {
    /// The pick for the current width, subscribing the running effect to the
    /// window metrics.
    pub fn get(&self) -> Pick {
        self.source.track();
        self.get_untracked()
    }

    pub fn get_untracked(&self) -> Pick {
        self.breakpoints.pick_for(self.source.window_size().width)
    }

    /// Shorthand for `self.get().pick(values)`.
    pub fn pick<'a, T>(&self, values: &'a [T]) -> Option<&'a T> {
        values.get(self.get().tier())
    }

    /// The pick held in a memo whose dependents re-run only on tier changes.
    pub fn tier_memo(&self) -> Memo<Pick> {
        self.tier
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }
}

/// Matches the window width against `thresholds` and keeps the result current.
///
/// Call it once while setting up a component; the tier memo belongs to the
/// current scope.
///
/// ```
/// use vunit::{FixedMetrics, use_breakpoints};
///
/// let metrics = FixedMetrics::new(900.0, 1600.0, 1.0);
/// let pick = use_breakpoints(metrics, &[768.0, 1024.0]).unwrap();
/// assert_eq!(pick.pick(&["mobile", "tablet", "desktop"]), Some(&"tablet"));
/// ```
pub fn use_breakpoints<S>(
    source: S,
    thresholds: &[f64],
) -> Result<Responsive<S>, ResponsiveError>
where
    S: MetricsSource + Clone + 'static,
{
    let breakpoints = Rc::new(Breakpoints::new(thresholds.iter().copied())?);

    let tier = create_memo({
        let source = source.clone();
        let breakpoints = breakpoints.clone();
        move |prev: Option<&Pick>| {
            source.track();
            let width = source.window_size().width;
            let pick = breakpoints.pick_for(width);
            if prev.is_some_and(|prev| *prev != pick) {
                tracing::debug!(tier = pick.tier(), width, "breakpoint tier changed");
            }
            pick
        }
    });

    Ok(Responsive {
        source,
        breakpoints,
        tier,
    })
}
