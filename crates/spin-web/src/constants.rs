// DOM contract with the host page.

// Rotation pivot; its bounding-box center is re-read on every pointer event
pub const ANCHOR_ID: &str = "spin-center";

// Readout panel
pub const SPEED_READOUT_ID: &str = "speed-readout";
pub const CUMULATE_READOUT_ID: &str = "cumulate-readout";
pub const DAMPING_VALUE_ID: &str = "damping-value";

// Controls
pub const DAMPING_SLIDER_ID: &str = "damping-slider"; // <input type="range" min="0.80" max="0.99" step="0.01">
pub const CLEAR_BUTTON_ID: &str = "clear-button";

// Query string key selecting the estimator preset, e.g. `?preset=plain`
pub const PRESET_QUERY_KEY: &str = "preset";
