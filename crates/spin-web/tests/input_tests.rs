// Host-side tests for pure input helpers.
// The main crate targets wasm, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use spin_core::Preset;

#[test]
fn rect_center_is_the_middle_of_the_box() {
    let c = rect_center(10.0, 20.0, 30.0, 40.0);
    assert_eq!(c, glam::DVec2::new(25.0, 40.0));

    let c = rect_center(0.0, 0.0, 0.0, 0.0);
    assert_eq!(c, glam::DVec2::ZERO);
}

#[test]
fn parse_damping_snaps_to_slider_step() {
    let v = parse_damping("0.853").unwrap();
    assert!((v - 0.85).abs() < 1e-9);
    let v = parse_damping(" 0.9 ").unwrap();
    assert!((v - 0.90).abs() < 1e-9);
}

#[test]
fn parse_damping_keeps_values_inside_slider_range() {
    for raw in ["0.80", "0.99", "0.5", "1.5", "-3"] {
        let v = parse_damping(raw).unwrap();
        assert!(spin_core::damping_in_range(v), "{} -> {}", raw, v);
    }
    assert!((parse_damping("1.5").unwrap() - 0.99).abs() < 1e-9);
    assert!((parse_damping("0.1").unwrap() - 0.80).abs() < 1e-9);
}

#[test]
fn parse_damping_rejects_garbage() {
    assert_eq!(parse_damping(""), None);
    assert_eq!(parse_damping("fast"), None);
    assert_eq!(parse_damping("NaN"), None);
    assert_eq!(parse_damping("inf"), None);
}

#[test]
fn preset_from_query_reads_the_key() {
    assert_eq!(preset_from_query("?preset=plain", "preset"), Preset::Plain);
    assert_eq!(
        preset_from_query("?theme=dark&preset=stalling", "preset"),
        Preset::Stalling
    );
    assert_eq!(preset_from_query("preset=damped", "preset"), Preset::Damped);
}

#[test]
fn preset_from_query_falls_back_to_default() {
    assert_eq!(preset_from_query("", "preset"), Preset::Damped);
    assert_eq!(preset_from_query("?", "preset"), Preset::Damped);
    assert_eq!(preset_from_query("?preset", "preset"), Preset::Damped);
    assert_eq!(preset_from_query("?preset=wobbly", "preset"), Preset::Damped);
    assert_eq!(preset_from_query("?presets=plain", "preset"), Preset::Damped);
}

#[test]
fn pageshow_remounts_only_after_a_cached_teardown() {
    // Restored from the back/forward cache after pagehide tore the widget down.
    assert!(should_remount(true, false));
    // First load fires pageshow too; the widget is already mounted.
    assert!(!should_remount(false, true));
    assert!(!should_remount(true, true));
    assert!(!should_remount(false, false));
}
