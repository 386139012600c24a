#[cfg(test)]
#[path = "../tests/unit/dominance_test.rs"]
mod dominance_test;

/// Decides whether one candidate survives a pairwise comparison with another.
///
/// `is_not_dominated(a, b)` must return `true` when `a` is strictly better than
/// `b` in at least one criterion, regardless of the remaining criteria, and
/// `false` when `b` is at least as good as `a` in every criterion, the all-equal
/// tie included. The relation is the only way the containers ever look at
/// stored values, so `T` itself needs no ordering or equality bounds.
///
/// No symmetry, reflexivity or transitivity is assumed. Relaxed relations (e.g.
/// ones accepting values within a tolerance band) are legal; with such
/// relations the surviving set can depend on insertion order, which is
/// inherited behavior the containers do not try to correct.
pub trait Dominance<T> {
    /// Returns `true` if `a` is not dominated by `b`.
    fn is_not_dominated(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Dominance<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn is_not_dominated(&self, a: &T, b: &T) -> bool {
        (self)(a, b)
    }
}
