// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREY};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 720;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;

// --- Input files ---
// Helmholtz coil calibration run (current vs. reference-probe field).
pub const CALIBRATION_FILE: &str = "DataFile_140711_162438_helmhotz_calibration.txt";
// Field scan inside the ferromagnet shield while the coil current is swept.
pub const FM_SCAN_FILE: &str = "DataFile_140714_182154_fm_scan_up_down.txt";
// Zero-current scan inside the shield, averaged to get the residual reading.
pub const OFFSET_SCAN_FILE: &str = "kapton_offset.txt";

// The offset scan was only taken for some samples; the steel powder run uses
// a fixed residual reading instead.
pub const USE_OFFSET_SCAN: bool = false;

// --- Output files ---
pub const CALIBRATION_PLOT_FILE: &str = "calibration.png";
pub const PERMEABILITY_PLOT_FILE: &str = "permeability_scan.png";

// --- Sample geometry, (nominal, sigma) in mm ---
// Inner and outer radius of the kapton/steel powder shield cylinder.
pub const SHIELD_INNER_RADIUS_MM: (f64, f64) = (34.97 / 2.0, 0.0);
pub const SHIELD_OUTER_RADIUS_MM: (f64, f64) = (36.22 / 2.0, 0.0);

// --- Probe characteristics ---
// One-sigma uncertainty of a single Hall probe field reading, in mT.
pub const FIELD_READING_SIGMA_MT: f64 = 0.0005;
// Field reading inside the shield at zero coil current, (nominal, sigma) mT.
// Used when USE_OFFSET_SCAN is false.
pub const RESIDUAL_FIELD_READING_MT: (f64, f64) = (0.006, 0.0005);

// --- Plot color assignments ---
pub const COLOR_CALIBRATION_POINTS: &RGBColor = &BLUE;
pub const COLOR_PERMEABILITY_POINTS: &RGBColor = &BLUE;
pub const COLOR_PERMEABILITY_LINE: &RGBColor = &GREY;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;

// Marker radius for scatter points
pub const MARKER_RADIUS: u32 = 3;

// Half-width of error bar caps, in pixels
pub const ERROR_BAR_WIDTH: u32 = 6;

// src/constants.rs
