// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, ErrorBar};
use plotters::series::LineSeries;
use plotters::style::colors::WHITE;
use plotters::style::{Color, RGBColor};

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use std::error::Error;

use crate::constants::{
    ERROR_BAR_WIDTH, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, LINE_WIDTH_PLOT,
    MARKER_RADIUS, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Axis ranges for a set of finite (x, y) pairs, optionally widened by a
/// per-point y extent (error bar half-length).
fn axis_ranges(points: &[(f64, f64, f64)]) -> Result<((f64, f64), (f64, f64)), Box<dyn Error>> {
    let xs: Array1<f64> = points.iter().map(|p| p.0).collect();
    let y_low: Array1<f64> = points.iter().map(|p| p.1 - p.2).collect();
    let y_high: Array1<f64> = points.iter().map(|p| p.1 + p.2).collect();

    let x_range = calculate_range(*xs.min()?, *xs.max()?);
    let y_range = calculate_range(*y_low.min()?, *y_high.max()?);
    Ok((x_range, y_range))
}

/// Keeps only rows whose coordinates (and error extent) are finite. The
/// permeability formula emits inf/NaN at near-zero internal field; those rows
/// become gaps in the plot, matching how the values are documented to surface.
fn finite_points(points: &[(f64, f64, f64)]) -> Vec<(f64, f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|(x, y, e)| x.is_finite() && y.is_finite() && e.is_finite())
        .collect()
}

/// Draws a markers-only scatter chart to a PNG file.
pub fn draw_scatter_plot(
    output_file: &str,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64)],
    marker_color: &RGBColor,
) -> Result<(), Box<dyn Error>> {
    let plottable = finite_points(
        &points.iter().map(|&(x, y)| (x, y, 0.0)).collect::<Vec<_>>(),
    );
    if plottable.is_empty() {
        return Err(format!("no plottable data for '{}'", output_file).into());
    }
    let ((x_min, x_max), (y_min, y_max)) = axis_ranges(&plottable)?;

    let root_area = BitMapBackend::new(output_file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    chart.draw_series(
        plottable
            .iter()
            .map(|&(x, y, _)| Circle::new((x, y), MARKER_RADIUS, marker_color.filled())),
    )?;

    root_area.present()?;
    Ok(())
}

/// Draws a chart of (x, y, sigma) rows as vertical error bars plus a
/// connecting line, to a PNG file. The line keeps the eye from reading the
/// scatter as noise.
pub fn draw_errorbar_plot(
    output_file: &str,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64, f64)],
    bar_color: &RGBColor,
    line_color: &RGBColor,
) -> Result<(), Box<dyn Error>> {
    let plottable = finite_points(points);
    if plottable.is_empty() {
        return Err(format!("no plottable data for '{}'", output_file).into());
    }
    let ((x_min, x_max), (y_min, y_max)) = axis_ranges(&plottable)?;

    let root_area = BitMapBackend::new(output_file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    chart.draw_series(LineSeries::new(
        plottable.iter().map(|&(x, y, _)| (x, y)),
        line_color.stroke_width(LINE_WIDTH_PLOT),
    ))?;

    chart.draw_series(plottable.iter().map(|&(x, y, e)| {
        ErrorBar::new_vertical(
            x,
            y - e,
            y,
            y + e,
            bar_color.filled(),
            ERROR_BAR_WIDTH,
        )
    }))?;

    root_area.present()?;
    Ok(())
}


// src/plot_framework.rs
