// src/data_analysis/mod.rs

pub mod linear_fit;
pub mod permeability;
pub mod uncertainty;

// src/data_analysis/mod.rs
