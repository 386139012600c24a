use crate::ParetoSetListener;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// A label with two independently minimized criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label {
    pub v1: i32,
    pub v2: i32,
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.v1, self.v2)
    }
}

pub fn label(v1: i32, v2: i32) -> Label {
    Label { v1, v2 }
}

/// Keeps `a` when it is strictly better than `b` in at least one criterion.
pub fn either_less(a: &Label, b: &Label) -> bool {
    a.v1 < b.v1 || a.v2 < b.v2
}

/// A single decision observed by a [`RecordingListener`], in callback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision<T> {
    Accepted(T),
    Rejected(T, T),
    Dropped(T, T),
}

/// Records every notification into a log shared with the owning test.
#[derive(Clone, Debug)]
pub struct RecordingListener<T> {
    decisions: Rc<RefCell<Vec<Decision<T>>>>,
}

impl<T> Default for RecordingListener<T> {
    fn default() -> Self {
        Self { decisions: Rc::default() }
    }
}

impl<T: Clone> RecordingListener<T> {
    pub fn decisions(&self) -> Vec<Decision<T>> {
        self.decisions.borrow().clone()
    }
}

impl<T: Clone> ParetoSetListener<T> for RecordingListener<T> {
    fn on_accepted(&mut self, accepted: &T) {
        self.decisions.borrow_mut().push(Decision::Accepted(accepted.clone()));
    }

    fn on_rejected(&mut self, candidate: &T, blocked_by: &T) {
        self.decisions.borrow_mut().push(Decision::Rejected(candidate.clone(), blocked_by.clone()));
    }

    fn on_dropped(&mut self, evicted: &T, replaced_by: &T) {
        self.decisions.borrow_mut().push(Decision::Dropped(evicted.clone(), replaced_by.clone()));
    }
}
