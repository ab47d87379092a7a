//! Equivalence-class scoring framework.
//!
//! A scorer compares a key partition against a response partition and
//! produces a [`PrecisionRecall`]. Both scoring algorithms implement
//! [`EquivalenceClassScorer`]; [`Method`] selects one by tag.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use coref_score::Method;
//!
//! let key: Vec<HashSet<u32>> = vec![[1, 2].into(), [3, 4].into()];
//! let response: Vec<HashSet<u32>> = vec![[1, 2].into()];
//!
//! let score = Method::Muc.scorer().score(&key, &response)?;
//! assert!((score.precision() - 1.0).abs() < 1e-6);
//! assert!((score.recall() - 0.5).abs() < 1e-6);
//! # Ok::<(), coref_score::Error>(())
//! ```

mod b_cubed;
mod muc;

pub use b_cubed::BCubed;
pub use muc::Muc;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::averages::PrecisionRecallAverages;
use crate::{Error, PrecisionRecall, Result};

/// A partition of items into disjoint equivalence classes.
pub type Partition<T> = Vec<HashSet<T>>;

/// Scorer over a pair of equivalence-class partitions.
///
/// Implemented by [`BCubed`] and [`Muc`]. The element type only needs to be
/// hashable and comparable; scoring never inspects element contents beyond
/// identity.
pub trait EquivalenceClassScorer<T> {
    /// Precision and recall for a single key/response pair.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateElement`] if either partition has an element in more
    /// than one of its groups.
    fn score(&self, key: &[HashSet<T>], response: &[HashSet<T>]) -> Result<PrecisionRecall>;

    /// Score a sequence of key/response pairs, retaining the raw terms needed
    /// to compute micro and macro averages.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateElement`] on the first malformed partition; pairs
    /// already scored are discarded.
    fn score_pairs(
        &self,
        pairs: &[(Partition<T>, Partition<T>)],
    ) -> Result<Box<dyn PrecisionRecallAverages>>;
}

/// Scoring method tag used by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// B-Cubed, element-based (Bagga & Baldwin, 1998).
    BCubed,
    /// MUC, link-based (Vilain et al., 1995).
    Muc,
}

impl Method {
    /// Construct the scorer for this method.
    ///
    /// Pure construction dispatch; the scorers are stateless.
    #[must_use]
    pub fn scorer<T>(self) -> Box<dyn EquivalenceClassScorer<T>>
    where
        T: Eq + Hash + Clone + fmt::Debug + 'static,
    {
        match self {
            Method::BCubed => Box::new(BCubed),
            Method::Muc => Box::new(Muc),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::BCubed => write!(f, "B-Cubed"),
            Method::Muc => write!(f, "MUC"),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "b-cubed" | "bcubed" | "b3" => Ok(Method::BCubed),
            "muc" => Ok(Method::Muc),
            _ => Err(Error::unknown_method(s)),
        }
    }
}

/// Build a table mapping each element of a partition to the index of its
/// group.
///
/// Built fresh for every scoring call; doubles as the disjointness validation
/// pass for the input contract.
pub(crate) fn build_table<T: Eq + Hash + fmt::Debug>(
    partition: &[HashSet<T>],
) -> Result<HashMap<&T, usize>> {
    let mut table = HashMap::new();
    for (index, group) in partition.iter().enumerate() {
        for element in group {
            if table.insert(element, index).is_some() {
                return Err(Error::duplicate_element(element));
            }
        }
    }
    Ok(table)
}
