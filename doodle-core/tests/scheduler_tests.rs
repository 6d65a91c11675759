use doodle_core::sequence::Scheduler;

#[test]
fn fires_in_due_then_insertion_order() {
    let mut s = Scheduler::new();
    s.after(30, "c");
    s.after(10, "a");
    s.after(10, "b");

    assert_eq!(s.next_due(), Some(10));
    assert_eq!(s.pop_due(100), Some((10, "a")));
    assert_eq!(s.pop_due(100), Some((10, "b")));
    assert_eq!(s.now(), 10);
    assert_eq!(s.pop_due(20), None);
    assert_eq!(s.pop_due(100), Some((30, "c")));
    assert!(s.is_empty());
}

#[test]
fn delays_are_relative_to_now() {
    let mut s = Scheduler::new();
    s.advance_to(500);
    s.after(200, 1);
    assert_eq!(s.next_due(), Some(700));
}

#[test]
fn interval_repeats_until_cancelled() {
    let mut s = Scheduler::new();
    let id = s.every(25, "tick");

    assert_eq!(s.pop_due(60), Some((25, "tick")));
    assert_eq!(s.pop_due(60), Some((50, "tick")));
    assert_eq!(s.pop_due(60), None);
    assert_eq!(s.next_due(), Some(75));

    assert!(s.cancel(id));
    assert!(!s.cancel(id));
    assert_eq!(s.next_due(), None);
}

#[test]
fn zero_interval_is_clamped() {
    let mut s = Scheduler::new();
    s.every(0, ());
    assert_eq!(s.next_due(), Some(1));
}
