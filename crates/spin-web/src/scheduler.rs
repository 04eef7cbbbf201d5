//! `setTimeout`-backed [`Scheduler`] for the browser.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fnv::FnvHashMap;
use spin_core::{Scheduler, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Browsers hand out positive ids, so 0 never names a live timer.
const FAILED_HANDLE: TimerHandle = TimerHandle(0);

pub struct TimeoutScheduler {
    window: web::Window,
    // JS callbacks must outlive the timer; dropped on cancel or after firing
    live: Rc<RefCell<FnvHashMap<i32, Closure<dyn FnMut()>>>>,
    fired: Rc<RefCell<Vec<i32>>>,
}

impl TimeoutScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            live: Rc::new(RefCell::new(FnvHashMap::default())),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn sweep_fired(&self) {
        let fired: Vec<i32> = self.fired.borrow_mut().drain(..).collect();
        let mut live = self.live.borrow_mut();
        for id in fired {
            live.remove(&id);
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        self.sweep_fired();

        let fired = self.fired.clone();
        let id_slot = Rc::new(RefCell::new(None::<i32>));
        let id_for_cb = id_slot.clone();
        let closure = Closure::once(move || {
            task();
            // Recorded after the task so a nested schedule() never drops this closure mid-call.
            if let Some(id) = *id_for_cb.borrow() {
                fired.borrow_mut().push(id);
            }
        });

        let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            ) {
            Ok(id) => {
                *id_slot.borrow_mut() = Some(id);
                self.live.borrow_mut().insert(id, closure);
                TimerHandle(id as u64)
            }
            Err(e) => {
                log::error!("[scheduler] setTimeout failed: {:?}", e);
                FAILED_HANDLE
            }
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        if handle == FAILED_HANDLE {
            return;
        }
        let id = handle.0 as i32;
        self.window.clear_timeout_with_handle(id);
        self.live.borrow_mut().remove(&id);
    }
}

impl Drop for TimeoutScheduler {
    fn drop(&mut self) {
        for id in self.live.borrow().keys() {
            self.window.clear_timeout_with_handle(*id);
        }
    }
}
