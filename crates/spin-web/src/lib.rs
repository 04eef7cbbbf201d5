use crate::constants::PRESET_QUERY_KEY;
use instant::Instant;
use spin_core::{EstimatorConfig, SpinSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod input;
mod panel;
mod scheduler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spin-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let slot: events::WidgetSlot = Rc::new(RefCell::new(None));
    *slot.borrow_mut() = Some(mount(&window)?);

    let window_for_mount = window.clone();
    events::wire_lifecycle(&window, slot, move || mount(&window_for_mount));
    Ok(())
}

// Builds a fresh session and attaches the widget listeners.
fn mount(window: &web::Window) -> anyhow::Result<events::MountedWidget> {
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let search = window.location().search().unwrap_or_default();
    let preset = input::preset_from_query(&search, PRESET_QUERY_KEY);
    let decimals = preset.readout_decimals();
    let config = EstimatorConfig::preset(preset);
    log::info!("[init] preset={}", preset.name());

    let anchor = events::lookup_anchor(&document)?;
    let slider = events::lookup_slider(&document)?;

    let doc_for_sink = document.clone();
    let session = SpinSession::new(
        config.clone(),
        scheduler::TimeoutScheduler::new(window.clone()),
        move |metrics| panel::render_metrics(&doc_for_sink, &metrics, decimals),
    )?;
    panel::render_metrics(&document, &session.metrics(), decimals);

    if config.damping_enabled {
        slider.set_value(&format!("{:.2}", config.damping_factor));
        panel::render_damping(&document, config.damping_factor);
    } else {
        panel::hide_damping_controls(&slider);
    }

    events::wire_widget(events::WidgetWiring {
        document,
        anchor,
        slider,
        session: Rc::new(RefCell::new(session)),
        started: Instant::now(),
    })
}
