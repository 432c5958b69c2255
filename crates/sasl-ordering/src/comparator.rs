//! Mechanism name comparators.

use std::cmp::Ordering;

/// A total order over mechanism names.
///
/// Implemented automatically for any `Fn(&str, &str) -> Ordering` closure, so
/// ad-hoc orderings need no named type:
///
/// ```ignore
/// let shortest_first = |a: &str, b: &str| a.len().cmp(&b.len());
/// ```
pub trait MechanismComparator {
    /// Compare two mechanism names.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> MechanismComparator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Plain lexicographic byte order over mechanism names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexicalOrder;

impl MechanismComparator for LexicalOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
