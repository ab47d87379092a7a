//! # coref-score
//!
//! Coreference scoring over equivalence-class partitions.
//!
//! Implements the two classic partition-comparison metrics:
//!
//! | Metric | Focus | Reference |
//! |--------|-------|-----------|
//! | **B-Cubed** | Per-element overlap | Bagga & Baldwin, 1998 |
//! | **MUC** | Links recovered | Vilain et al., 1995 |
//!
//! A *key* partition (gold standard) and a *response* partition (system
//! output) each group opaque mention identifiers into disjoint equivalence
//! classes. A scorer compares the two and yields precision and recall; for a
//! corpus, a sequence of pairs yields per-pair scores plus micro and macro
//! averages, which generally differ and are computed separately.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use coref_score::Method;
//!
//! // Test case from Bagga & Baldwin (1998).
//! let key: Vec<HashSet<u32>> = vec![
//!     (1..=5).collect(),
//!     (6..=7).collect(),
//!     (8..=12).collect(),
//! ];
//! let response: Vec<HashSet<u32>> = vec![(1..=5).collect(), (6..=12).collect()];
//!
//! let scorer = Method::BCubed.scorer();
//! let score = scorer.score(&key, &response)?;
//! assert!((score.precision() - 16.0 / 21.0).abs() < 1e-6);
//! assert!((score.recall() - 1.0).abs() < 1e-6);
//! # Ok::<(), coref_score::Error>(())
//! ```
//!
//! # Undefined ratios
//!
//! A 0/0 ratio (empty partition, all-singleton MUC key) is NaN, never an
//! error or a clamp. [`PrecisionRecall`] equality treats NaN == NaN so test
//! assertions stay deterministic. Callers that need strict totals must filter
//! NaN scores themselves.

#![warn(missing_docs)]

mod error;

pub mod averages;
pub mod precision_recall;
pub mod scorer;
pub mod set_ops;

pub use averages::{BCubedAverages, MucAverages, PrecisionRecallAverages};
pub use error::{Error, Result};
pub use precision_recall::PrecisionRecall;
pub use scorer::{BCubed, EquivalenceClassScorer, Method, Muc, Partition};
