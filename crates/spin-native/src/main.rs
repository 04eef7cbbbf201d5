use std::rc::Rc;
use std::time::Instant;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::*;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use glam::DVec2;
use spin_core::{format_readout, EstimatorConfig, ManualScheduler, SpinSession};

mod controls;

const TITLE_PREFIX: &str = "Spin tracker";

struct NativeHost {
    window: Rc<Window>,
    session: SpinSession<ManualScheduler>,
    // Virtual clock for the idle watchdog, advanced from wall time
    clock: ManualScheduler,
    started: Instant,
    last_tick: Instant,
    center: DVec2,
}

impl NativeHost {
    fn new(window: Rc<Window>, config: EstimatorConfig, decimals: usize) -> anyhow::Result<Self> {
        let clock = ManualScheduler::new();
        let title_window = window.clone();
        let session = SpinSession::new(config, clock.clone(), move |metrics| {
            let readout = format_readout(&metrics, decimals);
            title_window.set_title(&format!("{} | {}", TITLE_PREFIX, readout));
        })?;
        window.set_title(&format!(
            "{} | {}",
            TITLE_PREFIX,
            format_readout(&session.metrics(), decimals)
        ));
        let size = window.inner_size();
        let now = Instant::now();
        Ok(Self {
            window,
            session,
            clock,
            started: now,
            last_tick: now,
            center: controls::window_center(size.width, size.height),
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.center = controls::window_center(size.width, size.height);
    }

    // Fire any idle timers that fell due before now.
    fn pump(&mut self) {
        let now = Instant::now();
        self.clock.advance(now - self.last_tick);
        self.last_tick = now;
    }

    fn next_wake(&self) -> ControlFlow {
        match self.clock.next_due() {
            Some(due) => {
                ControlFlow::WaitUntil(self.last_tick + due.saturating_sub(self.clock.now()))
            }
            None => ControlFlow::Wait,
        }
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.pump();
        let timestamp_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.session
            .observe(DVec2::new(position.x, position.y), timestamp_ms, self.center);
    }

    fn key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        match &event.logical_key {
            Key::Character(s) if s.as_str().eq_ignore_ascii_case("c") => {
                self.session.reset();
                log::info!("[keys] cleared revolutions");
            }
            Key::Character(s) if s.as_str().eq_ignore_ascii_case("d") => {
                let enabled = !self.session.config().damping_enabled;
                self.session.set_damping_enabled(enabled);
                log::info!("[keys] damping enabled={}", enabled);
            }
            Key::Named(NamedKey::ArrowUp) => self.nudge_damping(1),
            Key::Named(NamedKey::ArrowDown) => self.nudge_damping(-1),
            _ => {}
        }
    }

    fn nudge_damping(&mut self, steps: i32) {
        let factor = controls::nudge_damping(self.session.config().damping_factor, steps);
        match self.session.set_damping_factor(factor) {
            Ok(()) => log::info!("[keys] damping factor={:.2}", factor),
            Err(e) => log::warn!("[keys] {}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let preset = controls::preset_from_env(std::env::var(controls::PRESET_ENV).ok());
    log::info!("[init] preset={}", preset.name());

    let event_loop = EventLoop::new()?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title(TITLE_PREFIX)
            .with_inner_size(PhysicalSize::new(600u32, 400u32))
            .build(&event_loop)?,
    );
    let mut host = NativeHost::new(
        window,
        EstimatorConfig::preset(preset),
        preset.readout_decimals(),
    )?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == host.window.id() => match event {
            WindowEvent::CloseRequested => {
                host.session.dispose();
                elwt.exit();
            }
            WindowEvent::Resized(size) => host.resize(size),
            WindowEvent::CursorMoved { position, .. } => host.cursor_moved(position),
            WindowEvent::CursorLeft { .. } => host.session.pointer_left(),
            WindowEvent::KeyboardInput { event, .. } => host.key(&event),
            _ => {}
        },
        Event::AboutToWait => {
            host.pump();
            elwt.set_control_flow(host.next_wake());
        }
        _ => {}
    })?;
    Ok(())
}
