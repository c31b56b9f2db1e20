// src/plot_functions/plot_calibration.rs

use std::error::Error;

use crate::constants::{CALIBRATION_PLOT_FILE, COLOR_CALIBRATION_POINTS};
use crate::data_input::scan_data::ScanRowData;
use crate::plot_framework::draw_scatter_plot;

/// Generates the Helmholtz calibration scatter plot (markers only).
pub fn plot_calibration(cal_rows: &[ScanRowData]) -> Result<(), Box<dyn Error>> {
    let points: Vec<(f64, f64)> = cal_rows.iter().map(|r| (r.current_a, r.field_mt)).collect();
    draw_scatter_plot(
        CALIBRATION_PLOT_FILE,
        "Helmholtz coil calibration",
        "Coil current [A]",
        "Measured field [mT]",
        &points,
        COLOR_CALIBRATION_POINTS,
    )
}

// src/plot_functions/plot_calibration.rs
