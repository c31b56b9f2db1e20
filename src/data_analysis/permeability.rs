// src/data_analysis/permeability.rs

use ndarray::Array1;

use crate::data_analysis::uncertainty::UncertainValue;
use crate::data_input::scan_data::{fields, ScanRowData};

/// Residual magnetization offset: the field reading inside the shield at
/// zero coil current, minus the ambient baseline from the calibration fit.
/// A soft ferromagnet would make this correction negligible.
pub fn residual_offset(
    zero_current_reading: &UncertainValue,
    ambient_baseline: f64,
) -> UncertainValue {
    zero_current_reading.clone() - ambient_baseline
}

/// Internal field corrected for the residual magnetization of the shield.
pub fn correct_internal_field(
    reading: &UncertainValue,
    offset: &UncertainValue,
) -> UncertainValue {
    reading.clone() - offset.clone()
}

/// Averages the field column of a zero-current offset scan into one
/// (mean, scatter) reading. Alternate source for the residual offset when a
/// dedicated offset scan was recorded.
pub fn mean_field_reading(rows: &[ScanRowData]) -> UncertainValue {
    let b: Array1<f64> = fields(rows);
    let mean = b.mean().unwrap_or(f64::NAN);
    UncertainValue::new(mean, b.std(0.0))
}

/// Relative permeability of a cylindrical shell from the external field, the
/// internal field, and the shell radii.
///
/// Closed-form magnetostatics solution for an infinite ferromagnetic tube of
/// inner radius `a` and outer radius `b` in a uniform transverse field:
///
///   u = [-2*Bext*b^2 + Bin*a^2 + Bin*b^2
///        - 2*b*sqrt(b^2*(Bext^2*b^2 - Bext*Bin*a^2 - Bext*Bin*b^2 + Bin^2*a^2))]
///       / [Bin*(a^2 - b^2)]
///
/// `Bin` near zero (no field penetrates at low applied current) or `a == b`
/// (zero-thickness shell) divide by zero; the inf/NaN result propagates to
/// the caller instead of panicking.
pub fn relative_permeability(
    b_ext: &UncertainValue,
    b_in: &UncertainValue,
    a: &UncertainValue,
    b: &UncertainValue,
) -> UncertainValue {
    let a2 = a.powi(2);
    let b2 = b.powi(2);

    let radicand = b2.clone()
        * (b_ext.powi(2) * b2.clone() - b_ext.clone() * b_in.clone() * a2.clone()
            - b_ext.clone() * b_in.clone() * b2.clone()
            + b_in.powi(2) * a2.clone());

    let numerator = -2.0 * b_ext.clone() * b2.clone()
        + b_in.clone() * a2.clone()
        + b_in.clone() * b2.clone()
        - 2.0 * b.clone() * radicand.sqrt();

    let denominator = b_in.clone() * (a2 - b2);

    numerator / denominator
}

/// Evaluates the permeability formula over a whole scan, one result per
/// (external, internal) field pair.
pub fn permeability_scan(
    b_ext: &[UncertainValue],
    b_in: &[UncertainValue],
    a: &UncertainValue,
    b: &UncertainValue,
) -> Vec<UncertainValue> {
    b_ext
        .iter()
        .zip(b_in.iter())
        .map(|(ext, int)| relative_permeability(ext, int, a, b))
        .collect()
}


// src/data_analysis/permeability.rs
