//! Micro and macro averages over a sequence of partition-pair scores.
//!
//! The micro average is the mean of the per-pair precision values and the
//! mean of the per-pair recall values. The macro average pools the raw terms
//! behind every pair (per-element ratios for B-Cubed, per-group link counts
//! for MUC) and computes one grand ratio, equivalent to scoring the whole
//! corpus at once. The two are not interchangeable and generally differ.
//!
//! Accumulators keep every raw term for the life of a corpus run, so memory
//! is O(total elements scored). That is a deliberate trade-off: the pooled
//! terms cannot be recovered from the per-pair scores alone.
//!
//! Accumulators are plain owned data (`Send`); to score documents in
//! parallel, build one accumulator per worker and [`BCubedAverages::merge`]
//! or [`MucAverages::merge`] them in a reduction step.

use crate::PrecisionRecall;

/// Per-pair scores for a sequence of equivalence-set pairs together with
/// their micro and macro averages.
pub trait PrecisionRecallAverages {
    /// Scores for the individual pairs, in the order they were added.
    fn scores(&self) -> &[PrecisionRecall];

    /// Mean of the per-pair precision values and of the per-pair recall
    /// values. NaN components when no pairs have been added.
    fn micro_average(&self) -> PrecisionRecall;

    /// Pooled-term average, equivalent to scoring all pairs at once. NaN
    /// components when no terms have been added or a pooled denominator is 0.
    fn macro_average(&self) -> PrecisionRecall;
}

/// Arithmetic mean; NaN for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of numerator terms over sum of denominator terms; NaN when the
/// denominator sum is 0.
pub(crate) fn pooled_ratio(numerators: &[usize], denominators: &[usize]) -> f64 {
    let numerator: usize = numerators.iter().sum();
    let denominator: usize = denominators.iter().sum();
    numerator as f64 / denominator as f64
}

fn micro(scores: &[PrecisionRecall]) -> PrecisionRecall {
    let n = scores.len() as f64;
    let precision = scores.iter().map(|s| s.precision()).sum::<f64>() / n;
    let recall = scores.iter().map(|s| s.recall()).sum::<f64>() / n;
    PrecisionRecall::new(precision, recall)
}

// =============================================================================
// B-Cubed
// =============================================================================

/// Accumulator for B-Cubed scores over many partition pairs.
///
/// Retains the per-element score ratios of every pair; their grand mean per
/// direction is the macro average.
#[derive(Debug, Clone, Default)]
pub struct BCubedAverages {
    scores: Vec<PrecisionRecall>,
    element_precisions: Vec<f64>,
    element_recalls: Vec<f64>,
}

impl BCubedAverages {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score for one key/response pair.
    pub fn add_score(&mut self, score: PrecisionRecall) {
        self.scores.push(score);
    }

    /// Record the per-element ratios behind one pair's score.
    pub fn add_element_scores(&mut self, precisions: Vec<f64>, recalls: Vec<f64>) {
        self.element_precisions.extend(precisions);
        self.element_recalls.extend(recalls);
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: Self) {
        self.scores.extend(other.scores);
        self.element_precisions.extend(other.element_precisions);
        self.element_recalls.extend(other.element_recalls);
    }
}

impl PrecisionRecallAverages for BCubedAverages {
    fn scores(&self) -> &[PrecisionRecall] {
        &self.scores
    }

    fn micro_average(&self) -> PrecisionRecall {
        micro(&self.scores)
    }

    fn macro_average(&self) -> PrecisionRecall {
        PrecisionRecall::new(mean(&self.element_precisions), mean(&self.element_recalls))
    }
}

// =============================================================================
// MUC
// =============================================================================

/// Accumulator for MUC scores over many partition pairs.
///
/// Retains the per-key-group integer numerator and denominator terms of every
/// pair, per direction; the pooled ratio per direction is the macro average.
#[derive(Debug, Clone, Default)]
pub struct MucAverages {
    scores: Vec<PrecisionRecall>,
    precision_numerators: Vec<usize>,
    precision_denominators: Vec<usize>,
    recall_numerators: Vec<usize>,
    recall_denominators: Vec<usize>,
}

impl MucAverages {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score for one key/response pair.
    pub fn add_score(&mut self, score: PrecisionRecall) {
        self.scores.push(score);
    }

    /// Record the precision-direction terms for one pair.
    pub fn add_precision_terms(&mut self, numerators: Vec<usize>, denominators: Vec<usize>) {
        self.precision_numerators.extend(numerators);
        self.precision_denominators.extend(denominators);
    }

    /// Record the recall-direction terms for one pair.
    pub fn add_recall_terms(&mut self, numerators: Vec<usize>, denominators: Vec<usize>) {
        self.recall_numerators.extend(numerators);
        self.recall_denominators.extend(denominators);
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: Self) {
        self.scores.extend(other.scores);
        self.precision_numerators.extend(other.precision_numerators);
        self.precision_denominators.extend(other.precision_denominators);
        self.recall_numerators.extend(other.recall_numerators);
        self.recall_denominators.extend(other.recall_denominators);
    }
}

impl PrecisionRecallAverages for MucAverages {
    fn scores(&self) -> &[PrecisionRecall] {
        &self.scores
    }

    fn micro_average(&self) -> PrecisionRecall {
        micro(&self.scores)
    }

    fn macro_average(&self) -> PrecisionRecall {
        PrecisionRecall::new(
            pooled_ratio(&self.precision_numerators, &self.precision_denominators),
            pooled_ratio(&self.recall_numerators, &self.recall_denominators),
        )
    }
}
