//! Time units for rendered averages
//!
//! The recorder accumulates in nanoseconds; reports and annotated copies
//! divide down to the requested unit at render time.

/// Unit used when rendering recorded averages
///
/// Discriminants match the numeric `type` argument of the prototype
/// (0 = ns, 1 = us, 2 = ms, 3 = s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Nanoseconds, rendered with no decimal places
    Nanoseconds = 0,
    /// Microseconds, rendered with 3 decimal places
    Microseconds = 1,
    /// Milliseconds, rendered with 6 decimal places (default)
    #[default]
    Milliseconds = 2,
    /// Seconds, rendered with 6 decimal places
    Seconds = 3,
}

impl TimeUnit {
    /// Resolve a numeric unit selector, rejecting anything outside 0..=3
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Nanoseconds),
            1 => Some(Self::Microseconds),
            2 => Some(Self::Milliseconds),
            3 => Some(Self::Seconds),
            _ => None,
        }
    }

    /// Divisor from nanoseconds into this unit
    pub fn divisor(self) -> f64 {
        match self {
            Self::Nanoseconds => 1.0,
            Self::Microseconds => 1e3,
            Self::Milliseconds => 1e6,
            Self::Seconds => 1e9,
        }
    }

    /// Decimal places used when rendering values in this unit
    pub fn decimals(self) -> usize {
        match self {
            Self::Nanoseconds => 0,
            Self::Microseconds => 3,
            Self::Milliseconds | Self::Seconds => 6,
        }
    }

    /// Column label used in reports and annotated copies
    pub fn label(self) -> &'static str {
        match self {
            Self::Nanoseconds => "Nanosecs",
            Self::Microseconds => "Microsecs",
            Self::Milliseconds => "Millisecs",
            Self::Seconds => "Secs",
        }
    }

    /// Convert an average in nanoseconds into this unit
    pub fn scale(self, avg_nanos: f64) -> f64 {
        avg_nanos / self.divisor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_milliseconds() {
        assert_eq!(TimeUnit::default(), TimeUnit::Milliseconds);
    }

    #[test]
    fn test_from_index_round_trip() {
        assert_eq!(TimeUnit::from_index(0), Some(TimeUnit::Nanoseconds));
        assert_eq!(TimeUnit::from_index(1), Some(TimeUnit::Microseconds));
        assert_eq!(TimeUnit::from_index(2), Some(TimeUnit::Milliseconds));
        assert_eq!(TimeUnit::from_index(3), Some(TimeUnit::Seconds));
        assert_eq!(TimeUnit::from_index(4), None);
    }

    #[test]
    fn test_scale_one_millisecond() {
        let nanos = 1_000_000.0;
        assert_eq!(TimeUnit::Nanoseconds.scale(nanos), 1_000_000.0);
        assert_eq!(TimeUnit::Microseconds.scale(nanos), 1_000.0);
        assert_eq!(TimeUnit::Milliseconds.scale(nanos), 1.0);
        assert_eq!(TimeUnit::Seconds.scale(nanos), 0.001);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeUnit::Nanoseconds.label(), "Nanosecs");
        assert_eq!(TimeUnit::Microseconds.label(), "Microsecs");
        assert_eq!(TimeUnit::Milliseconds.label(), "Millisecs");
        assert_eq!(TimeUnit::Seconds.label(), "Secs");
    }

    #[test]
    fn test_decimals_per_unit() {
        assert_eq!(TimeUnit::Nanoseconds.decimals(), 0);
        assert_eq!(TimeUnit::Microseconds.decimals(), 3);
        assert_eq!(TimeUnit::Milliseconds.decimals(), 6);
        assert_eq!(TimeUnit::Seconds.decimals(), 6);
    }
}
