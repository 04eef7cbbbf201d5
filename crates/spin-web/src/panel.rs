use crate::constants::{CUMULATE_READOUT_ID, DAMPING_VALUE_ID, SPEED_READOUT_ID};
use crate::dom;
use spin_core::{format_readout, Metrics};
use web_sys as web;

/// Write the two metrics into the readout panel.
pub fn render_metrics(document: &web::Document, metrics: &Metrics, decimals: usize) {
    let readout = format_readout(metrics, decimals);
    dom::set_text(document, SPEED_READOUT_ID, &readout.speed);
    dom::set_text(document, CUMULATE_READOUT_ID, &readout.cumulate);
}

pub fn render_damping(document: &web::Document, factor: f64) {
    dom::set_text(document, DAMPING_VALUE_ID, &format!("{:.2}", factor));
}

// The slider only matters for the damped preset
pub fn hide_damping_controls(slider: &web::HtmlInputElement) {
    _ = slider.set_attribute("style", "display:none");
    if let Some(doc) = dom::window_document() {
        if let Some(el) = doc.get_element_by_id(DAMPING_VALUE_ID) {
            _ = el.set_attribute("style", "display:none");
        }
    }
}
