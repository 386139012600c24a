#[cfg(test)]
#[path = "../tests/unit/marker_test.rs"]
mod marker_test;

use crate::dominance::Dominance;
use crate::listener::{NoopListener, ParetoSetListener};
use crate::set::{ParetoSet, SetError};
use std::fmt::{Debug, Display, Formatter};

/// A [`ParetoSet`] which remembers a cursor into its sequence so a round-based
/// caller can enumerate only the elements accepted since the cursor was last
/// placed.
///
/// The cursor is an index, not an element reference. It partitions the
/// sequence into elements known before the last [`MarkedParetoSet::mark_at_end`]
/// call and elements appended since: an eviction before the cursor shifts it
/// one position left, an eviction at or after it leaves it untouched, and new
/// elements always land at the end, which is never before the cursor. At the
/// end of round `N` the caller marks, runs the insertions of round `N + 1` and
/// reads [`MarkedParetoSet::iter_after_marker`] to learn which labels are new,
/// in time proportional to their number.
pub struct MarkedParetoSet<T, D, L = NoopListener>
where
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    set: ParetoSet<T, D, L>,
    marker: usize,
}

impl<T, D> MarkedParetoSet<T, D>
where
    D: Dominance<T>,
{
    /// Creates an empty set pruned by the given dominance relation, with the
    /// cursor at the start.
    pub fn new(dominance: D) -> Self {
        Self::with_listener(dominance, NoopListener)
    }
}

impl<T, D, L> MarkedParetoSet<T, D, L>
where
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    /// Creates an empty set which reports every decision to `listener`.
    pub fn with_listener(dominance: D, listener: L) -> Self {
        Self { set: ParetoSet::with_listener(dominance, listener), marker: 0 }
    }

    /// Checks whether `candidate` would be accepted, without mutating the set.
    pub fn qualify(&self, candidate: &T) -> bool {
        self.set.qualify(candidate)
    }

    /// Offers a candidate to the set, keeping the cursor consistent with any
    /// evictions, and returns whether the candidate was kept.
    pub fn add(&mut self, candidate: T) -> bool {
        let marker = self.marker;
        let mut shift = 0;
        let added = self.set.add_tracked(candidate, |index| {
            if index < marker {
                shift += 1;
            }
        });
        self.marker -= shift;

        added
    }

    /// Offers every item of `iter` in order, returning whether any was kept.
    pub fn add_all<I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().fold(false, |added, item| {
            let kept = self.add(item);
            added || kept
        })
    }

    /// Always fails: arbitrary removal is unsupported, see [`ParetoSet::remove`].
    pub fn remove(&mut self, element: &T) -> Result<(), SetError> {
        self.set.remove(element)
    }

    /// Drops every element and resets the cursor to the start.
    pub fn clear(&mut self) {
        self.set.clear();
        self.marker = 0;
    }

    /// Places the cursor behind the last element currently stored.
    pub fn mark_at_end(&mut self) {
        self.marker = self.set.len();
    }

    /// Iterates, in storage order, the elements accepted since the cursor was
    /// last placed. Every call starts a fresh pass over the current tail.
    pub fn iter_after_marker(&self) -> std::slice::Iter<'_, T> {
        self.set.as_slice()[self.marker..].iter()
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Returns the element at `index` in storage order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.set.get(index)
    }

    /// Iterates all stored elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.set.iter()
    }
}

impl<'a, T, D, L> IntoIterator for &'a MarkedParetoSet<T, D, L>
where
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, D, L> Display for MarkedParetoSet<T, D, L>
where
    T: Display,
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.set, f)
    }
}

impl<T, D, L> Debug for MarkedParetoSet<T, D, L>
where
    T: Debug,
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkedParetoSet").field("elements", &self.set.as_slice()).field("marker", &self.marker).finish()
    }
}
