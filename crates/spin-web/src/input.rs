use glam::DVec2;
use spin_core::{Preset, DAMPING_FACTOR_MAX, DAMPING_FACTOR_MIN, DAMPING_FACTOR_STEP};
use web_sys as web;

#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> DVec2 {
    DVec2::new(left + width / 2.0, top + height / 2.0)
}

// Center of an element in client (viewport) coordinates
#[inline]
pub fn element_center(el: &web::Element) -> DVec2 {
    let rect = el.get_bounding_client_rect();
    rect_center(rect.left(), rect.top(), rect.width(), rect.height())
}

#[inline]
pub fn pointer_client_point(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// A `pageshow` needs a fresh widget only when the page came back from the
/// back/forward cache after `pagehide` tore the previous one down.
#[inline]
pub fn should_remount(persisted: bool, mounted: bool) -> bool {
    persisted && !mounted
}

// ---------------- Control parsing ----------------

/// Slider text to a damping factor snapped to the slider step and kept inside
/// the slider range. `None` for anything that is not a finite number.
pub fn parse_damping(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let snapped = (value / DAMPING_FACTOR_STEP).round() * DAMPING_FACTOR_STEP;
    Some(snapped.clamp(DAMPING_FACTOR_MIN, DAMPING_FACTOR_MAX))
}

/// Picks the preset from a `location.search` string; unknown or missing
/// values fall back to the default preset.
pub fn preset_from_query(search: &str, key: &str) -> Preset {
    let query = search.strip_prefix('?').unwrap_or(search);
    let raw = query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then_some(v)
    });
    match raw {
        Some(v) => v.parse().unwrap_or_else(|e| {
            log::warn!("[input] {}, using default preset", e);
            Preset::default()
        }),
        None => Preset::default(),
    }
}
