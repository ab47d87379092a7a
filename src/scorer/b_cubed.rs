//! B-Cubed coreference scorer.
//!
//! Bagga & Baldwin, LREC 1998, "Algorithms for scoring coreference chains".
//!
//! B-Cubed scores each element of a partition by how much of its group is
//! shared with the element's group in the other partition, then takes the
//! unweighted mean over elements. Every element contributes equally even
//! though elements of the same group share a ratio; the mean is over
//! elements, not groups.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::averages::{mean, BCubedAverages, PrecisionRecallAverages};
use crate::set_ops;
use crate::{PrecisionRecall, Result};

use super::{build_table, EquivalenceClassScorer, Partition};

/// B-Cubed scorer (element-based).
#[derive(Debug, Clone, Copy, Default)]
pub struct BCubed;

impl<T> EquivalenceClassScorer<T> for BCubed
where
    T: Eq + Hash + Clone + fmt::Debug + 'static,
{
    fn score(&self, key: &[HashSet<T>], response: &[HashSet<T>]) -> Result<PrecisionRecall> {
        let key_table = build_table(key)?;
        let response_table = build_table(response)?;

        let precision = mean(&element_scores(key, &key_table, response, &response_table));
        let recall = mean(&element_scores(response, &response_table, key, &key_table));

        Ok(PrecisionRecall::new(precision, recall))
    }

    fn score_pairs(
        &self,
        pairs: &[(Partition<T>, Partition<T>)],
    ) -> Result<Box<dyn PrecisionRecallAverages>> {
        let mut averages = BCubedAverages::new();
        for (key, response) in pairs {
            let key_table = build_table(key)?;
            let response_table = build_table(response)?;

            let element_precisions = element_scores(key, &key_table, response, &response_table);
            let element_recalls = element_scores(response, &response_table, key, &key_table);

            let score =
                PrecisionRecall::new(mean(&element_precisions), mean(&element_recalls));
            averages.add_score(score);
            averages.add_element_scores(element_precisions, element_recalls);
        }
        log::debug!("B-Cubed scored {} partition pairs", pairs.len());
        Ok(Box::new(averages))
    }
}

/// Per-element score ratios for one direction of a B-Cubed comparison.
///
/// For each element of the denominator partition, the overlap between its
/// groups in the two partitions over the size of its denominator group.
/// Elements absent from the numerator partition contribute 0; that is a
/// missed mention, not an error.
fn element_scores<T: Eq + Hash + Clone>(
    num_partition: &[HashSet<T>],
    num_table: &HashMap<&T, usize>,
    den_partition: &[HashSet<T>],
    den_table: &HashMap<&T, usize>,
) -> Vec<f64> {
    let mut scores = Vec::with_capacity(den_table.len());
    for (&element, &den_index) in den_table {
        let den_group = &den_partition[den_index];
        let numerator = match num_table.get(element) {
            Some(&num_index) => {
                set_ops::intersection(&num_partition[num_index], den_group).len() as f64
            }
            None => 0.0,
        };
        scores.push(numerator / den_group.len() as f64);
    }
    scores
}
