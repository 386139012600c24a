//! Pareto frontier containers for multi-criteria, round-based route search.
//!
//! During a round-based search every stop accumulates competing candidate labels
//! (arrival time, number of transfers, generalized cost, ...). Keeping only the
//! mutually non-dominated labels per stop is what keeps the search tractable.
//! This crate provides the containers which do that pruning: [`ParetoSet`] keeps
//! the frontier itself, [`MarkedParetoSet`] additionally remembers a cursor into
//! the frontier so a round-based caller can enumerate the labels accepted since
//! the previous round without diffing two snapshots.
//!
//! The containers never inspect the stored values: every pruning decision goes
//! through a caller supplied [`Dominance`] relation, and an optional
//! [`ParetoSetListener`] observes each accept/reject/drop decision.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

mod dominance;
mod listener;
mod marker;
mod set;
mod storage;

pub use self::dominance::Dominance;
pub use self::listener::{CompositeListener, LogListener, NoopListener, ParetoSetListener};
pub use self::marker::MarkedParetoSet;
pub use self::set::{ParetoSet, SetError};
