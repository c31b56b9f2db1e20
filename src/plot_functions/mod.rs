// src/plot_functions/mod.rs

pub mod plot_calibration;
pub mod plot_permeability;

// src/plot_functions/mod.rs
