//! Set operation utilities.
//!
//! Pure, stateless helpers over [`HashSet`] used by the scoring kernels.
//! Empty inputs are valid and yield empty outputs.

use std::collections::HashSet;
use std::hash::Hash;

/// Union of two sets.
#[must_use]
pub fn union<T: Eq + Hash + Clone>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
    a.union(b).cloned().collect()
}

/// Union of a collection of sets.
#[must_use]
pub fn union_all<'a, T, I>(sets: I) -> HashSet<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a HashSet<T>>,
{
    let mut union = HashSet::new();
    for set in sets {
        union.extend(set.iter().cloned());
    }
    union
}

/// Intersection of two sets.
#[must_use]
pub fn intersection<T: Eq + Hash + Clone>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
    a.intersection(b).cloned().collect()
}

/// All the elements of `a` not in `b`.
#[must_use]
pub fn difference<T: Eq + Hash + Clone>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
    a.difference(b).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u32]) -> HashSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_union() {
        assert_eq!(union(&set(&[1, 2, 3]), &set(&[3, 4])), set(&[1, 2, 3, 4]));
        assert_eq!(union(&set(&[]), &set(&[1])), set(&[1]));
        assert_eq!(union::<u32>(&set(&[]), &set(&[])), set(&[]));
    }

    #[test]
    fn test_union_all() {
        let sets = vec![set(&[1, 2]), set(&[2, 3]), set(&[4])];
        assert_eq!(union_all(&sets), set(&[1, 2, 3, 4]));
        assert_eq!(union_all::<u32, _>(&[]), set(&[]));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(&set(&[1, 2, 3]), &set(&[2, 3, 4])), set(&[2, 3]));
        assert_eq!(intersection(&set(&[1, 2]), &set(&[3, 4])), set(&[]));
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&set(&[1, 2, 3]), &set(&[2])), set(&[1, 3]));
        assert_eq!(difference(&set(&[1, 2]), &set(&[])), set(&[1, 2]));
        assert_eq!(difference(&set(&[]), &set(&[1])), set(&[]));
    }
}
