//! Delayed-callback capability injected into a [`SpinSession`](crate::SpinSession).
//!
//! Hosts provide the real timer (`setTimeout` on the web); tests and the
//! native front-end use [`ManualScheduler`], whose clock only moves when told to.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;
    /// Unknown or already fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, handle: TimerHandle) {
        (**self).cancel(handle)
    }
}

struct PendingTask {
    handle: TimerHandle,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler driven by an advanceable virtual clock. Clones share the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Due time of the earliest pending task, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.state.borrow().pending.iter().map(|p| p.due).min()
    }

    /// Moves the clock forward, running every task that falls due in order.
    /// Tasks scheduled by a running task fire too if they land inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut st = self.state.borrow_mut();
                let earliest = st
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.handle.0))
                    .map(|(i, _)| i);
                match earliest {
                    Some(i) => {
                        let task = st.pending.remove(i);
                        st.now = task.due.max(st.now);
                        Some(task)
                    }
                    None => None,
                }
            };
            // Borrow released: the task may schedule or cancel.
            match next {
                Some(p) => (p.task)(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let mut st = self.state.borrow_mut();
        st.next_id += 1;
        let handle = TimerHandle(st.next_id);
        let due = st.now + delay;
        st.pending.push(PendingTask { handle, due, task });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.state
            .borrow_mut()
            .pending
            .retain(|p| p.handle != handle);
    }
}
