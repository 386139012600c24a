use super::*;
use crate::ParetoSet;
use crate::helpers::*;

#[test]
fn can_fan_out_notifications_in_order() {
    let first = RecordingListener::default();
    let second = RecordingListener::default();
    let composite = CompositeListener::new(vec![Box::new(first.clone()), Box::new(second.clone())]);
    let mut set = ParetoSet::with_listener(either_less, composite);

    set.add(label(5, 5));
    set.add(label(8, 8));
    set.add(label(4, 4));

    let expected = vec![
        Decision::Accepted(label(5, 5)),
        Decision::Rejected(label(8, 8), label(5, 5)),
        Decision::Dropped(label(5, 5), label(4, 4)),
        Decision::Accepted(label(4, 4)),
    ];
    assert_eq!(first.decisions(), expected);
    assert_eq!(second.decisions(), expected);
}

#[test]
fn can_stay_silent_by_default() {
    let mut set = ParetoSet::with_listener(either_less, NoopListener);

    assert!(set.add(label(1, 1)));
    assert!(!set.add(label(2, 2)));
    assert_eq!(set.len(), 1);
}

#[test]
fn can_trace_decisions_without_logger_installed() {
    let mut set = ParetoSet::with_listener(either_less, LogListener);

    assert!(set.add(label(1, 1)));
    assert!(!set.add(label(2, 2)));
    assert_eq!(set.len(), 1);
}
