//! Field-wise equality and hashing for records such as people and editions.
//!
//! A person listed as an editor matches an article's author when names and
//! birth date agree, regardless of which list either value lives in. The same
//! fields feed the hash, so equal records always hash alike.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Marker trait for value objects, with named equality and hashing helpers.
///
/// ## Value Object vs. reference-like records
///
/// - **Value Object**: two instances with the same field values are equal and
///   hash identically (`Person`, `Edition`)
/// - **Record without equality**: no comparison is offered at all (`Article`,
///   `Magazine`); callers must not rely on comparing them
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: a value object can always be duplicated into an independent value
/// - **Eq + Hash**: equality is field-wise and the hash is derived from the same
///   fields, so `a == b` implies `a.value_hash() == b.value_hash()`
/// - **Debug**: value objects should be debuggable (helpful for logging, testing)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert!(m1.value_eq(&m2));
/// assert_eq!(m1.value_hash(), m2.value_hash());
/// ```
pub trait ValueObject: Clone + Eq + Hash + core::fmt::Debug {
    /// Field-wise equality.
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Hash over the same fields that take part in equality.
    ///
    /// Stable within a process; not meant to be persisted.
    fn value_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Money {
        amount: i64,
        currency: String,
    }

    impl ValueObject for Money {}

    #[test]
    fn equal_values_share_a_hash() {
        let a = Money { amount: 100, currency: "USD".to_string() };
        let b = Money { amount: 100, currency: "USD".to_string() };
        assert!(a.value_eq(&b));
        assert_eq!(a.value_hash(), b.value_hash());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: value_eq agrees with comparing the fields directly.
        #[test]
        fn value_eq_matches_fields(a in any::<i64>(), b in any::<i64>(), c in "[A-Z]{3}") {
            let left = Money { amount: a, currency: c.clone() };
            let right = Money { amount: b, currency: c };
            prop_assert_eq!(left.value_eq(&right), a == b);
            if a == b {
                prop_assert_eq!(left.value_hash(), right.value_hash());
            }
        }
    }
}
