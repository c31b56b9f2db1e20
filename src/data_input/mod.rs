// src/data_input/mod.rs

pub mod scan_data;
pub mod scan_parser;

// src/data_input/mod.rs
