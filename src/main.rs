// src/main.rs

use std::error::Error;
use std::path::Path;

use shield_scan_render::constants::{
    CALIBRATION_FILE, CALIBRATION_PLOT_FILE, FIELD_READING_SIGMA_MT, FM_SCAN_FILE,
    OFFSET_SCAN_FILE, PERMEABILITY_PLOT_FILE, RESIDUAL_FIELD_READING_MT,
    SHIELD_INNER_RADIUS_MM, SHIELD_OUTER_RADIUS_MM, USE_OFFSET_SCAN,
};
use shield_scan_render::data_analysis::linear_fit::fit_line;
use shield_scan_render::data_analysis::permeability::{
    correct_internal_field, mean_field_reading, permeability_scan, residual_offset,
};
use shield_scan_render::data_analysis::uncertainty::UncertainValue;
use shield_scan_render::data_input::scan_data::{currents, fields};
use shield_scan_render::data_input::scan_parser::parse_scan_file;
use shield_scan_render::plot_functions::plot_calibration::plot_calibration;
use shield_scan_render::plot_functions::plot_permeability::plot_permeability;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Helmholtz Calibration ---
    println!("--- Helmholtz Calibration ---");
    let cal_rows = parse_scan_file(Path::new(CALIBRATION_FILE))?;

    plot_calibration(&cal_rows)?;
    println!("  Calibration plot saved as '{}'.", CALIBRATION_PLOT_FILE);

    let fit = fit_line(&currents(&cal_rows), &fields(&cal_rows))?;
    println!(
        "  Fit: field = {:.6} * current + {:.6} [mT]",
        fit.slope, fit.intercept
    );
    println!("  Fit covariance: {:?}", fit.covariance);

    let baseline = fit.ambient_baseline();
    println!("  Ambient field baseline (current = 0): {:.6} mT", baseline);

    // --- Residual Magnetization ---
    println!("\n--- Residual Magnetization ---");
    let zero_current_reading = if USE_OFFSET_SCAN {
        let offset_rows = parse_scan_file(Path::new(OFFSET_SCAN_FILE))?;
        mean_field_reading(&offset_rows)
    } else {
        let (nominal, sigma) = RESIDUAL_FIELD_READING_MT;
        UncertainValue::new(nominal, sigma)
    };
    println!("  Zero-current reading: {} mT", zero_current_reading);

    let offset = residual_offset(&zero_current_reading, baseline);
    println!("  Residual magnetization offset: {} mT", offset);

    // --- Ferromagnet Scan ---
    println!("\n--- Ferromagnet Scan ---");
    let scan_rows = parse_scan_file(Path::new(FM_SCAN_FILE))?;

    let (a_nom, a_sigma) = SHIELD_INNER_RADIUS_MM;
    let (b_nom, b_sigma) = SHIELD_OUTER_RADIUS_MM;
    let a = UncertainValue::new(a_nom, a_sigma);
    let b = UncertainValue::new(b_nom, b_sigma);

    let b_ext: Vec<UncertainValue> = scan_rows
        .iter()
        .map(|r| UncertainValue::new(fit.eval(r.current_a), FIELD_READING_SIGMA_MT))
        .collect();
    let b_in: Vec<UncertainValue> = scan_rows
        .iter()
        .map(|r| {
            let reading = UncertainValue::new(r.field_mt, FIELD_READING_SIGMA_MT);
            correct_internal_field(&reading, &offset)
        })
        .collect();

    let u = permeability_scan(&b_ext, &b_in, &a, &b);

    let degenerate = u.iter().filter(|v| !v.nominal().is_finite()).count();
    if degenerate > 0 {
        eprintln!(
            "Warning: {} of {} scan points evaluate to a non-finite permeability \
             (near-zero internal field); they are left out of the plot.",
            degenerate,
            u.len()
        );
    }

    plot_permeability(&b_ext, &u)?;
    println!("  Permeability plot saved as '{}'.", PERMEABILITY_PLOT_FILE);

    Ok(())
}

// src/main.rs
