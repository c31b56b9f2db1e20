// src/data_analysis/linear_fit.rs

use ndarray::Array1;
use std::error::Error;

/// Result of a degree-1 least-squares fit of field against current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Parameter covariance matrix, ordered (slope, intercept), scaled by
    /// the residual variance SSR/(n-2). Zero for a perfect line.
    pub covariance: [[f64; 2]; 2],
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The fitted field at zero applied current, i.e. the ambient (Earth)
    /// field seen by the reference probe.
    pub fn ambient_baseline(&self) -> f64 {
        self.eval(0.0)
    }
}

/// Fits a line to (x, y) pairs, minimizing squared residuals. Both inputs
/// are treated as exact; only the residual scatter feeds the covariance.
pub fn fit_line(x: &Array1<f64>, y: &Array1<f64>) -> Result<LinearFit, Box<dyn Error>> {
    if x.len() != y.len() {
        return Err(format!(
            "fit input length mismatch: {} currents vs {} fields",
            x.len(),
            y.len()
        )
        .into());
    }
    let n = x.len();
    if n < 2 {
        return Err(format!("need at least 2 points to fit a line, got {}", n).into());
    }

    let nf = n as f64;
    let sx = x.sum();
    let sxx = x.dot(x);
    let sy = y.sum();
    let sxy = x.dot(y);

    // Normal-equation determinant; vanishes when all x are equal.
    let det = nf * sxx - sx * sx;
    if det.abs() <= f64::EPSILON * nf * sxx.abs().max(1.0) {
        return Err("degenerate fit: all current values are equal".into());
    }

    let slope = (nf * sxy - sx * sy) / det;
    let intercept = (sxx * sy - sx * sxy) / det;

    let ssr: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let r = yi - (slope * xi + intercept);
            r * r
        })
        .sum();

    // Residual variance; with n == 2 the line is exact and carries no
    // residual information, so report zero.
    let resid_var = if n > 2 { ssr / (n - 2) as f64 } else { 0.0 };

    // cov = resid_var * (X^T X)^-1 for X = [x, 1].
    let covariance = [
        [resid_var * nf / det, -resid_var * sx / det],
        [-resid_var * sx / det, resid_var * sxx / det],
    ];

    Ok(LinearFit {
        slope,
        intercept,
        covariance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const TOL: f64 = 1e-12;

    #[test]
    fn recovers_exact_line() {
        let x = array![0.0, 1.0, 2.0, 3.0];
        let y = array![1.0, 3.0, 5.0, 7.0];
        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < TOL);
        assert!((fit.intercept - 1.0).abs() < TOL);
        for row in &fit.covariance {
            for &c in row {
                assert!(c.abs() < TOL);
            }
        }
    }

    #[test]
    fn baseline_is_intercept() {
        let x = array![0.0, 1.0, 2.0];
        let y = array![1.0, 3.0, 5.0];
        let fit = fit_line(&x, &y).unwrap();
        assert_eq!(fit.ambient_baseline(), fit.intercept);
        assert_eq!(fit.ambient_baseline(), fit.eval(0.0));
    }

    #[test]
    fn scattered_data_has_positive_variances() {
        let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = array![0.1, 0.9, 2.1, 2.9, 4.1];
        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope - 1.0).abs() < 0.1);
        assert!(fit.covariance[0][0] > 0.0);
        assert!(fit.covariance[1][1] > 0.0);
        // Off-diagonal terms are symmetric.
        assert_eq!(fit.covariance[0][1], fit.covariance[1][0]);
    }

    #[test]
    fn rejects_length_mismatch() {
        let x = array![0.0, 1.0];
        let y = array![1.0, 2.0, 3.0];
        assert!(fit_line(&x, &y).is_err());
    }

    #[test]
    fn rejects_single_point() {
        let x = array![1.0];
        let y = array![2.0];
        assert!(fit_line(&x, &y).is_err());
    }

    #[test]
    fn rejects_constant_current() {
        let x = array![2.0, 2.0, 2.0];
        let y = array![1.0, 2.0, 3.0];
        assert!(fit_line(&x, &y).is_err());
    }

    #[test]
    fn two_points_fit_exactly_with_zero_covariance() {
        let x = array![1.0, 3.0];
        let y = array![2.0, 8.0];
        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope - 3.0).abs() < TOL);
        assert!((fit.intercept + 1.0).abs() < TOL);
        assert_eq!(fit.covariance[0][0], 0.0);
    }
}

// src/data_analysis/linear_fit.rs
