#[cfg(test)]
#[path = "../tests/unit/set_test.rs"]
mod set_test;

use crate::dominance::Dominance;
use crate::listener::{NoopListener, ParetoSetListener};
use crate::storage::Storage;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

/// An error produced by an operation the frontier refuses to perform.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SetError {
    /// Elements leave a frontier only by being dominated during `add` or via
    /// `clear`.
    #[error("a pareto set does not support element removal")]
    RemovalUnsupported,
}

/// An insertion ordered set of mutually non-dominated elements.
///
/// Candidates enter through [`ParetoSet::add`]: a candidate is kept iff no
/// stored element dominates it, and its acceptance evicts every stored element
/// it dominates. Stored values are opaque, every decision goes through the
/// injected [`Dominance`] relation, and an optional [`ParetoSetListener`]
/// observes each accept/reject/drop.
///
/// The set is single writer and not internally synchronized: one instance is
/// meant to be owned by one search task, e.g. one set per stop per search.
pub struct ParetoSet<T, D, L = NoopListener>
where
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    elements: Storage<T>,
    dominance: D,
    listener: L,
}

impl<T, D> ParetoSet<T, D>
where
    D: Dominance<T>,
{
    /// Creates an empty set pruned by the given dominance relation.
    pub fn new(dominance: D) -> Self {
        Self::with_listener(dominance, NoopListener)
    }
}

impl<T, D, L> ParetoSet<T, D, L>
where
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    /// Creates an empty set which reports every decision to `listener`.
    pub fn with_listener(dominance: D, listener: L) -> Self {
        Self { elements: Storage::new(), dominance, listener }
    }

    /// Checks whether `candidate` would be accepted, without mutating the set
    /// and without notifying the listener. An empty set qualifies everything.
    pub fn qualify(&self, candidate: &T) -> bool {
        self.elements.as_slice().iter().all(|element| self.dominance.is_not_dominated(candidate, element))
    }

    /// Offers a candidate to the set and returns whether it was kept.
    ///
    /// The decision is exactly the one [`ParetoSet::qualify`] reports on the
    /// state before the call. An accepted candidate is appended at the end of
    /// the sequence after every stored element it dominates has been evicted;
    /// a rejected candidate leaves the set untouched.
    pub fn add(&mut self, candidate: T) -> bool {
        self.add_tracked(candidate, |_| {})
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

    /// Adds a candidate, reporting the pre-sweep index of every evicted
    /// element so a wrapper can keep positional bookkeeping consistent.
    pub(crate) fn add_tracked(&mut self, candidate: T, mut on_evicted: impl FnMut(usize)) -> bool {
        if let Some(blocking) =
            self.elements.as_slice().iter().find(|&element| !self.dominance.is_not_dominated(&candidate, element))
        {
            self.listener.on_rejected(&candidate, blocking);
            return false;
        }

        let Self { elements, dominance, listener } = self;
        elements.sweep(
            |element| dominance.is_not_dominated(element, &candidate),
            |index, element| {
                listener.on_dropped(element, &candidate);
                on_evicted(index);
            },
        );

        elements.push(candidate);
        if let Some(accepted) = elements.as_slice().last() {
            listener.on_accepted(accepted);
        }

        true
    }

    /// Always fails: arbitrary removal is unsupported as the frontier must
    /// shrink only through dominance or [`ParetoSet::clear`].
    pub fn remove(&mut self, _element: &T) -> Result<(), SetError> {
        Err(SetError::RemovalUnsupported)
    }

    /// Drops every element keeping the backing capacity.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index` in storage order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Iterates the stored elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.as_slice().iter()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }
}

impl<'a, T, D, L> IntoIterator for &'a ParetoSet<T, D, L>
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

impl<T, D, L> Display for ParetoSet<T, D, L>
where
    T: Display,
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}

impl<T, D, L> Debug for ParetoSet<T, D, L>
where
    T: Debug,
    D: Dominance<T>,
    L: ParetoSetListener<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParetoSet").field("elements", &self.elements.as_slice()).finish()
    }
}
