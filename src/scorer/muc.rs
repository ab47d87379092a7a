//! MUC coreference scorer.
//!
//! Vilain et al., MUC-6 1995; formulation follows Bagga & Baldwin, LREC 1998.
//!
//! MUC is link-based: each key group contributes the number of links the
//! response recovers (group size minus the number of pieces the response
//! partition splits the group into) over the number of links needed to join
//! the group (size minus one). Singleton groups contribute 0/0 and a
//! partition of nothing but singletons scores NaN.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::averages::{pooled_ratio, MucAverages, PrecisionRecallAverages};
use crate::set_ops;
use crate::{PrecisionRecall, Result};

use super::{build_table, EquivalenceClassScorer, Partition};

/// MUC scorer (link-based).
#[derive(Debug, Clone, Copy, Default)]
pub struct Muc;

impl<T> EquivalenceClassScorer<T> for Muc
where
    T: Eq + Hash + Clone + fmt::Debug + 'static,
{
    fn score(&self, key: &[HashSet<T>], response: &[HashSet<T>]) -> Result<PrecisionRecall> {
        // MUC never indexes by element, but the disjointness contract applies
        // to both partitions all the same.
        build_table(key)?;
        build_table(response)?;

        let precision = muc_score(response, key);
        let recall = muc_score(key, response);

        Ok(PrecisionRecall::new(precision, recall))
    }

    fn score_pairs(
        &self,
        pairs: &[(Partition<T>, Partition<T>)],
    ) -> Result<Box<dyn PrecisionRecallAverages>> {
        let mut averages = MucAverages::new();
        for (key, response) in pairs {
            build_table(key)?;
            build_table(response)?;

            let (precision_nums, precision_dens) = score_terms(response, key);
            let (recall_nums, recall_dens) = score_terms(key, response);

            let score = PrecisionRecall::new(
                pooled_ratio(&precision_nums, &precision_dens),
                pooled_ratio(&recall_nums, &recall_dens),
            );
            averages.add_score(score);
            averages.add_precision_terms(precision_nums, precision_dens);
            averages.add_recall_terms(recall_nums, recall_dens);
        }
        log::debug!("MUC scored {} partition pairs", pairs.len());
        Ok(Box::new(averages))
    }
}

/// MUC score of the key partition against the response partition. Precision
/// and recall are obtained by swapping the roles of key and response.
fn muc_score<T: Eq + Hash + Clone>(key: &[HashSet<T>], response: &[HashSet<T>]) -> f64 {
    let (numerators, denominators) = score_terms(key, response);
    pooled_ratio(&numerators, &denominators)
}

/// Per-key-group numerator and denominator terms of a MUC score, kept
/// individually so corpus macro averages can pool them.
fn score_terms<T: Eq + Hash + Clone>(
    key: &[HashSet<T>],
    response: &[HashSet<T>],
) -> (Vec<usize>, Vec<usize>) {
    let mut numerators = Vec::with_capacity(key.len());
    let mut denominators = Vec::with_capacity(key.len());
    for key_group in key {
        let size = key_group.len();
        numerators.push(size - partition_size(key_group, response));
        denominators.push(size.saturating_sub(1));
    }
    (numerators, denominators)
}

/// Number of pieces a key group is split into by the response partition.
///
/// Elements absent from every response group each count as their own
/// singleton piece.
fn partition_size<T: Eq + Hash + Clone>(key_group: &HashSet<T>, response: &[HashSet<T>]) -> usize {
    let union = set_ops::union_all(response);
    let mut pieces = set_ops::difference(key_group, &union).len();
    for response_group in response {
        if !set_ops::intersection(key_group, response_group).is_empty() {
            pieces += 1;
        }
    }
    pieces
}
