//! A tracking session: one estimator, its idle watchdog and the display sink.
//!
//! Every observed sample re-arms a single delayed "go idle" callback. If no
//! sample arrives within the stall timeout the callback zeroes the speed and
//! publishes once; it is not re-armed until the next sample.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::DVec2;

use crate::config::{ConfigError, EstimatorConfig};
use crate::estimator::{Metrics, RotationEstimator};
use crate::scheduler::{Scheduler, TimerHandle};

type Sink = Box<dyn FnMut(Metrics)>;

pub struct SpinSession<S: Scheduler> {
    estimator: Rc<RefCell<RotationEstimator>>,
    sink: Rc<RefCell<Sink>>,
    pending: Rc<Cell<Option<TimerHandle>>>,
    scheduler: S,
    disposed: bool,
}

impl<S: Scheduler> SpinSession<S> {
    pub fn new(
        config: EstimatorConfig,
        scheduler: S,
        sink: impl FnMut(Metrics) + 'static,
    ) -> Result<Self, ConfigError> {
        let estimator = RotationEstimator::new(config)?;
        log::info!(
            "[session] started damping={} factor={:.2} stall_timeout_ms={:?}",
            estimator.config().damping_enabled,
            estimator.config().damping_factor,
            estimator.config().stall_timeout_ms
        );
        Ok(Self {
            estimator: Rc::new(RefCell::new(estimator)),
            sink: Rc::new(RefCell::new(Box::new(sink))),
            pending: Rc::new(Cell::new(None)),
            scheduler,
            disposed: false,
        })
    }

    pub fn metrics(&self) -> Metrics {
        self.estimator.borrow().metrics()
    }

    pub fn config(&self) -> EstimatorConfig {
        self.estimator.borrow().config().clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn observe(&mut self, point: DVec2, timestamp_ms: f64, center: DVec2) -> Metrics {
        if self.disposed {
            return self.metrics();
        }
        let accepted = self
            .estimator
            .borrow_mut()
            .try_observe(point, timestamp_ms, center);
        // Dropped samples neither publish nor extend the quiet window.
        let Some(metrics) = accepted else {
            return self.metrics();
        };
        self.publish(metrics);
        self.rearm_watchdog();
        metrics
    }

    /// Clear action: zeroes the revolution count and the speed readout.
    pub fn reset(&mut self) -> Metrics {
        if self.disposed {
            return self.metrics();
        }
        let metrics = {
            let mut est = self.estimator.borrow_mut();
            est.reset();
            est.on_idle()
        };
        self.publish(metrics);
        metrics
    }

    /// The pointer left the observation surface; the next sample starts a new baseline.
    pub fn pointer_left(&mut self) {
        self.estimator.borrow_mut().clear_history();
    }

    pub fn set_damping_factor(&mut self, value: f64) -> Result<(), ConfigError> {
        self.estimator.borrow_mut().set_damping_factor(value)
    }

    pub fn set_damping_enabled(&mut self, enabled: bool) {
        self.estimator.borrow_mut().set_damping_enabled(enabled);
    }

    /// Cancels the pending idle timer. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if !self.disposed {
            log::info!("[session] disposed");
        }
        self.disposed = true;
    }

    fn publish(&self, metrics: Metrics) {
        (self.sink.borrow_mut())(metrics);
    }

    fn rearm_watchdog(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        let Some(delay) = self.estimator.borrow().config().stall_timeout() else {
            return;
        };

        let estimator = Rc::downgrade(&self.estimator);
        let sink = Rc::downgrade(&self.sink);
        let pending = Rc::downgrade(&self.pending);
        let handle = self.scheduler.schedule(
            delay,
            Box::new(move || {
                let (Some(estimator), Some(sink), Some(pending)) =
                    (estimator.upgrade(), sink.upgrade(), pending.upgrade())
                else {
                    return;
                };
                pending.set(None);
                let metrics = estimator.borrow_mut().on_idle();
                log::debug!("[session] idle, speed zeroed");
                (sink.borrow_mut())(metrics);
            }),
        );
        self.pending.set(Some(handle));
    }
}

impl<S: Scheduler> Drop for SpinSession<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
