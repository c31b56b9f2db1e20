// src/data_input/scan_data.rs

use ndarray::Array1;

/// Holds one row of a Hall probe scan file: timestamp, applied coil current,
/// and the measured magnetic field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanRowData {
    pub time_s: f64,
    pub current_a: f64,
    pub field_mt: f64,
}

/// Extracts the current column as an ndarray vector.
pub fn currents(rows: &[ScanRowData]) -> Array1<f64> {
    rows.iter().map(|r| r.current_a).collect()
}

/// Extracts the field column as an ndarray vector.
pub fn fields(rows: &[ScanRowData]) -> Array1<f64> {
    rows.iter().map(|r| r.field_mt).collect()
}

// src/data_input/scan_data.rs
