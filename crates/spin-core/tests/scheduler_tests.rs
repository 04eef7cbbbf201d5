// Host-side tests for the manual scheduler used by tests and the native host.

use spin_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn tasks_run_in_due_order() {
    let clock = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for (delay, tag) in [(30, "c"), (10, "a"), (20, "b")] {
        let log = log.clone();
        clock.schedule(ms(delay), Box::new(move || log.borrow_mut().push(tag)));
    }
    assert_eq!(clock.next_due(), Some(ms(10)));

    clock.advance(ms(25));
    assert_eq!(*log.borrow(), vec!["a", "b"]);
    assert_eq!(clock.now(), ms(25));

    clock.advance(ms(5));
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn cancel_is_idempotent_and_ignores_fired_handles() {
    let clock = ManualScheduler::new();
    let fired = Rc::new(RefCell::new(0));

    let f = fired.clone();
    let handle = clock.schedule(ms(10), Box::new(move || *f.borrow_mut() += 1));
    clock.cancel(handle);
    clock.cancel(handle);
    clock.advance(ms(20));
    assert_eq!(*fired.borrow(), 0);

    let f = fired.clone();
    let handle = clock.schedule(ms(10), Box::new(move || *f.borrow_mut() += 1));
    clock.advance(ms(10));
    clock.cancel(handle);
    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn tasks_may_schedule_follow_ups_within_the_window() {
    let clock = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let inner_clock = clock.clone();
    let inner_log = log.clone();
    clock.schedule(
        ms(10),
        Box::new(move || {
            inner_log.borrow_mut().push(10);
            let log = inner_log.clone();
            inner_clock.schedule(ms(10), Box::new(move || log.borrow_mut().push(20)));
        }),
    );

    clock.advance(ms(15));
    assert_eq!(*log.borrow(), vec![10]);
    clock.advance(ms(5));
    assert_eq!(*log.borrow(), vec![10, 20]);
}

#[test]
fn shared_through_rc() {
    let clock = Rc::new(ManualScheduler::new());
    let hit = Rc::new(RefCell::new(false));
    let h = hit.clone();
    Scheduler::schedule(&clock, ms(1), Box::new(move || *h.borrow_mut() = true));
    clock.advance(ms(1));
    assert!(*hit.borrow());
}
