// src/plot_functions/plot_permeability.rs

use std::error::Error;

use crate::constants::{
    COLOR_PERMEABILITY_LINE, COLOR_PERMEABILITY_POINTS, PERMEABILITY_PLOT_FILE,
};
use crate::data_analysis::uncertainty::UncertainValue;
use crate::plot_framework::draw_errorbar_plot;

/// Generates the relative permeability vs. external field plot: error bar
/// markers joined by a line.
pub fn plot_permeability(
    b_ext: &[UncertainValue],
    permeability: &[UncertainValue],
) -> Result<(), Box<dyn Error>> {
    let points: Vec<(f64, f64, f64)> = b_ext
        .iter()
        .zip(permeability.iter())
        .map(|(x, u)| (x.nominal(), u.nominal(), u.std_dev()))
        .collect();
    draw_errorbar_plot(
        PERMEABILITY_PLOT_FILE,
        "Relative permeability measurement for kapton/steel powder",
        "B_ext [mT]",
        "Relative permeability",
        &points,
        COLOR_PERMEABILITY_POINTS,
        COLOR_PERMEABILITY_LINE,
    )
}

// src/plot_functions/plot_permeability.rs
