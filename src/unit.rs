use crate::{
    metrics::MetricsSource,
    units::{clamp, rem, vh, vmax, vmin, vw},
};

/// A length that is only turned into pixels once the window metrics are known.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    Px(f64),
    Vw(f64),
    Vh(f64),
    Vmin(f64),
    Vmax(f64),
    Rem(f64),
}

impl Length {
    /// The length in pixels against the current metrics.
    pub fn resolve(&self, metrics: &impl MetricsSource) -> f64 {
        match *self {
            Length::Px(px) => px,
            Length::Vw(size) => vw(metrics, size),
            Length::Vh(size) => vh(metrics, size),
            Length::Vmin(size) => vmin(metrics, size),
            Length::Vmax(size) => vmax(metrics, size),
            Length::Rem(value) => rem(metrics, value),
        }
    }

    /// Whether the resolved value can change when the window is resized.
    pub fn is_viewport_relative(&self) -> bool {
        matches!(
            self,
            Length::Vw(_) | Length::Vh(_) | Length::Vmin(_) | Length::Vmax(_)
        )
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::Px(value)
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Length::Px(value as f64)
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Length::Px(value as f64)
    }
}

/// A fluid length held between two bounds, the equivalent of CSS
/// `clamp(min, preferred, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClampedLength {
    pub min: Length,
    pub preferred: Length,
    pub max: Length,
}

impl ClampedLength {
    pub fn new(
        min: impl Into<Length>,
        preferred: impl Into<Length>,
        max: impl Into<Length>,
    ) -> Self {
        Self {
            min: min.into(),
            preferred: preferred.into(),
            max: max.into(),
        }
    }

    pub fn resolve(&self, metrics: &impl MetricsSource) -> f64 {
        clamp(
            self.min.resolve(metrics),
            self.preferred.resolve(metrics),
            self.max.resolve(metrics),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::metrics::FixedMetrics;

    use super::{ClampedLength, Length};

    const PHONE: FixedMetrics = FixedMetrics::new(400.0, 800.0, 2.0);
    const TABLET: FixedMetrics = FixedMetrics::new(1200.0, 800.0, 1.0);

    #[test]
    fn resolves_each_unit() {
        assert_eq!(Length::Px(12.0).resolve(&PHONE), 12.0);
        assert_eq!(Length::Vw(50.0).resolve(&PHONE), 200.0);
        assert_eq!(Length::Vh(50.0).resolve(&PHONE), 400.0);
        assert_eq!(Length::Vmin(50.0).resolve(&PHONE), 200.0);
        assert_eq!(Length::Vmax(50.0).resolve(&PHONE), 400.0);
        assert_eq!(Length::Rem(1.0).resolve(&PHONE), 32.0);
    }

    #[test]
    fn plain_numbers_are_pixels() {
        assert_eq!(Length::from(8), Length::Px(8.0));
        assert_eq!(Length::from(8.5f32), Length::Px(8.5));
        assert!(!Length::from(8.0).is_viewport_relative());
        assert!(Length::Vmin(1.0).is_viewport_relative());
    }

    #[test]
    fn clamped_length_follows_window() {
        let gutter = ClampedLength::new(16, Length::Vw(5.0), 48);
        assert_eq!(gutter.resolve(&PHONE), 20.0);
        assert_eq!(gutter.resolve(&TABLET), 48.0);
        assert_eq!(gutter.resolve(&FixedMetrics::new(200.0, 400.0, 1.0)), 16.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn lengths_round_trip_through_json() {
        let gutter = ClampedLength::new(16, Length::Vw(5.0), Length::Rem(3.0));
        let json = serde_json::to_string(&gutter).unwrap();
        assert_eq!(
            json,
            r#"{"min":{"Px":16.0},"preferred":{"Vw":5.0},"max":{"Rem":3.0}}"#
        );
        assert_eq!(serde_json::from_str::<ClampedLength>(&json).unwrap(), gutter);
    }
}
