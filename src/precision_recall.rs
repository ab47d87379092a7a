//! Precision/recall value type.

use serde::{Deserialize, Serialize};

/// Precision and recall for one key/response comparison.
///
/// Values are stored exactly as computed: an undefined ratio (0/0) is NaN and
/// passes through unguarded. No range validation is performed on
/// construction.
///
/// Equality compares each component with NaN == NaN, so scores built from
/// degenerate inputs still compare deterministically in tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PrecisionRecall {
    precision: f64,
    recall: f64,
}

impl PrecisionRecall {
    /// Create a score from raw precision and recall values.
    #[must_use]
    pub fn new(precision: f64, recall: f64) -> Self {
        Self { precision, recall }
    }

    /// Precision value.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Recall value.
    #[must_use]
    pub fn recall(&self) -> f64 {
        self.recall
    }

    /// Weighted harmonic mean of precision and recall.
    ///
    /// `F_beta = (1 + beta^2) * P * R / (beta^2 * (P + R))`. When the
    /// denominator is 0 the IEEE 754 result (NaN) is returned as-is.
    #[must_use]
    pub fn f_score(&self, beta: f64) -> f64 {
        let b2 = beta * beta;
        (1.0 + b2) * self.precision * self.recall / (b2 * (self.precision + self.recall))
    }

    /// Balanced F-score (`beta` = 1).
    #[must_use]
    pub fn f1(&self) -> f64 {
        self.f_score(1.0)
    }
}

impl PartialEq for PrecisionRecall {
    fn eq(&self, other: &Self) -> bool {
        fn component_eq(a: f64, b: f64) -> bool {
            a == b || (a.is_nan() && b.is_nan())
        }
        component_eq(self.precision, other.precision) && component_eq(self.recall, other.recall)
    }
}

impl std::fmt::Display for PrecisionRecall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Precision = {:.6}, Recall = {:.6}, F-score = {:.6}",
            self.precision,
            self.recall,
            self.f1()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_accessors() {
        let score = PrecisionRecall::new(0.75, 0.5);
        assert!((score.precision() - 0.75).abs() < TOLERANCE);
        assert!((score.recall() - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_f1_is_harmonic_mean() {
        let score = PrecisionRecall::new(0.75, 0.5);
        let expected = 2.0 * 0.75 * 0.5 / (0.75 + 0.5);
        assert!((score.f1() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_f_score_beta() {
        // beta = 2 weights recall: (1 + 4) * P * R / (4 * (P + R))
        let score = PrecisionRecall::new(0.6, 0.9);
        let expected = 5.0 * 0.6 * 0.9 / (4.0 * 1.5);
        assert!((score.f_score(2.0) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_f1_nan_when_both_zero() {
        let score = PrecisionRecall::new(0.0, 0.0);
        assert!(score.f1().is_nan());
    }

    #[test]
    fn test_nan_passes_through() {
        let score = PrecisionRecall::new(f64::NAN, 1.0);
        assert!(score.precision().is_nan());
        assert!(score.f1().is_nan());
    }

    #[test]
    fn test_equality_tolerates_nan() {
        let a = PrecisionRecall::new(f64::NAN, 0.5);
        let b = PrecisionRecall::new(f64::NAN, 0.5);
        let c = PrecisionRecall::new(0.5, f64::NAN);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(PrecisionRecall::new(1.0, 0.5), PrecisionRecall::new(1.0, 0.5));
    }

    #[test]
    fn test_display() {
        let score = PrecisionRecall::new(16.0 / 21.0, 1.0);
        assert_eq!(
            score.to_string(),
            "Precision = 0.761905, Recall = 1.000000, F-score = 0.864865"
        );
    }
}
