//! Deep copy capability.

/// Produce an independent value whose whole reachable graph is freshly built.
///
/// `Clone` already gives this for owned data; implementations spell the copy
/// out field by field so nested collections are rebuilt element by element
/// through their own `deep_copy`.
pub trait DeepCopy: Sized {
    fn deep_copy(&self) -> Self;
}
