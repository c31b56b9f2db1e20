// src/data_analysis/uncertainty.rs

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// A measured quantity with first-order (linearized) Gaussian error
/// propagation.
///
/// Every call to [`UncertainValue::new`] with a non-zero sigma mints a fresh
/// source id; derived values store, per source id, the partial derivative
/// with respect to that source scaled by the source's sigma. The standard
/// deviation is the Euclidean norm of those components, so an expression that
/// uses the same source twice (e.g. a radius appearing in several terms of
/// one formula) stays exactly correlated with itself, while distinct sources
/// combine in quadrature as independent.
#[derive(Debug, Clone, PartialEq)]
pub struct UncertainValue {
    nominal: f64,
    components: BTreeMap<u64, f64>,
}

impl UncertainValue {
    /// Creates a new independent source quantity.
    pub fn new(nominal: f64, sigma: f64) -> Self {
        let mut components = BTreeMap::new();
        if sigma != 0.0 {
            components.insert(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed), sigma);
        }
        UncertainValue { nominal, components }
    }

    /// A value with no uncertainty at all.
    pub fn exact(nominal: f64) -> Self {
        UncertainValue {
            nominal,
            components: BTreeMap::new(),
        }
    }

    pub fn nominal(&self) -> f64 {
        self.nominal
    }

    /// Propagated one-sigma standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.components
            .values()
            .map(|c| c * c)
            .sum::<f64>()
            .sqrt()
    }

    /// Chain rule for a unary function: new nominal plus the derivative of
    /// the function at the old nominal.
    fn unary(&self, nominal: f64, derivative: f64) -> Self {
        let components = self
            .components
            .iter()
            .map(|(&id, &c)| (id, derivative * c))
            .collect();
        UncertainValue { nominal, components }
    }

    /// Linear combination of two component maps, used by all binary ops:
    /// d(out)/d(source) = dl * d(lhs)/d(source) + dr * d(rhs)/d(source).
    fn binary(lhs: &Self, rhs: &Self, nominal: f64, dl: f64, dr: f64) -> Self {
        let mut components: BTreeMap<u64, f64> = BTreeMap::new();
        for (&id, &c) in &lhs.components {
            *components.entry(id).or_insert(0.0) += dl * c;
        }
        for (&id, &c) in &rhs.components {
            *components.entry(id).or_insert(0.0) += dr * c;
        }
        UncertainValue { nominal, components }
    }

    /// Integer power.
    pub fn powi(&self, n: i32) -> Self {
        self.unary(
            self.nominal.powi(n),
            f64::from(n) * self.nominal.powi(n - 1),
        )
    }

    /// Square root. A negative nominal yields NaN, and a zero nominal an
    /// infinite derivative; both propagate instead of panicking.
    pub fn sqrt(&self) -> Self {
        let root = self.nominal.sqrt();
        self.unary(root, 0.5 / root)
    }
}

impl fmt::Display for UncertainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+/-{}", self.nominal, self.std_dev())
    }
}

impl Add for UncertainValue {
    type Output = UncertainValue;
    fn add(self, rhs: UncertainValue) -> UncertainValue {
        UncertainValue::binary(&self, &rhs, self.nominal + rhs.nominal, 1.0, 1.0)
    }
}

impl Sub for UncertainValue {
    type Output = UncertainValue;
    fn sub(self, rhs: UncertainValue) -> UncertainValue {
        UncertainValue::binary(&self, &rhs, self.nominal - rhs.nominal, 1.0, -1.0)
    }
}

impl Mul for UncertainValue {
    type Output = UncertainValue;
    fn mul(self, rhs: UncertainValue) -> UncertainValue {
        UncertainValue::binary(
            &self,
            &rhs,
            self.nominal * rhs.nominal,
            rhs.nominal,
            self.nominal,
        )
    }
}

impl Div for UncertainValue {
    type Output = UncertainValue;
    fn div(self, rhs: UncertainValue) -> UncertainValue {
        UncertainValue::binary(
            &self,
            &rhs,
            self.nominal / rhs.nominal,
            1.0 / rhs.nominal,
            -self.nominal / (rhs.nominal * rhs.nominal),
        )
    }
}

impl Neg for UncertainValue {
    type Output = UncertainValue;
    fn neg(self) -> UncertainValue {
        let nominal = -self.nominal;
        self.unary(nominal, -1.0)
    }
}

impl Add<f64> for UncertainValue {
    type Output = UncertainValue;
    fn add(self, rhs: f64) -> UncertainValue {
        let nominal = self.nominal + rhs;
        self.unary(nominal, 1.0)
    }
}

impl Sub<f64> for UncertainValue {
    type Output = UncertainValue;
    fn sub(self, rhs: f64) -> UncertainValue {
        let nominal = self.nominal - rhs;
        self.unary(nominal, 1.0)
    }
}

impl Mul<f64> for UncertainValue {
    type Output = UncertainValue;
    fn mul(self, rhs: f64) -> UncertainValue {
        let nominal = self.nominal * rhs;
        self.unary(nominal, rhs)
    }
}

impl Div<f64> for UncertainValue {
    type Output = UncertainValue;
    fn div(self, rhs: f64) -> UncertainValue {
        let nominal = self.nominal / rhs;
        self.unary(nominal, 1.0 / rhs)
    }
}

impl Add<UncertainValue> for f64 {
    type Output = UncertainValue;
    fn add(self, rhs: UncertainValue) -> UncertainValue {
        rhs + self
    }
}

impl Sub<UncertainValue> for f64 {
    type Output = UncertainValue;
    fn sub(self, rhs: UncertainValue) -> UncertainValue {
        -rhs + self
    }
}

impl Mul<UncertainValue> for f64 {
    type Output = UncertainValue;
    fn mul(self, rhs: UncertainValue) -> UncertainValue {
        rhs * self
    }
}

impl Div<UncertainValue> for f64 {
    type Output = UncertainValue;
    fn div(self, rhs: UncertainValue) -> UncertainValue {
        let nominal = self / rhs.nominal;
        rhs.unary(nominal, -self / (rhs.nominal * rhs.nominal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn exact_values_behave_like_plain_floats() {
        let x = UncertainValue::exact(3.0);
        let y = UncertainValue::new(4.0, 0.0);

        let sum = x.clone() + y.clone();
        assert_eq!(sum.nominal(), 7.0);
        assert_eq!(sum.std_dev(), 0.0);

        let prod = x.clone() * y.clone();
        assert_eq!(prod.nominal(), 12.0);
        assert_eq!(prod.std_dev(), 0.0);

        let quot = x / y;
        assert_eq!(quot.nominal(), 0.75);
        assert_eq!(quot.std_dev(), 0.0);
    }

    #[test]
    fn independent_sources_add_in_quadrature() {
        let x = UncertainValue::new(10.0, 0.3);
        let y = UncertainValue::new(20.0, 0.4);
        let sum = x.clone() + y.clone();
        assert!((sum.std_dev() - 0.5).abs() < TOL);
        let diff = x - y;
        assert!((diff.std_dev() - 0.5).abs() < TOL);
    }

    #[test]
    fn same_source_stays_correlated() {
        let x = UncertainValue::new(5.0, 0.1);

        // x - x is exactly zero, not sqrt(2)*sigma.
        let diff = x.clone() - x.clone();
        assert_eq!(diff.nominal(), 0.0);
        assert_eq!(diff.std_dev(), 0.0);

        // x + x scales linearly, not in quadrature.
        let doubled = x.clone() + x.clone();
        assert!((doubled.std_dev() - 0.2).abs() < TOL);

        // x / x is exactly one.
        let ratio = x.clone() / x;
        assert!((ratio.nominal() - 1.0).abs() < TOL);
        assert!(ratio.std_dev() < TOL);
    }

    #[test]
    fn product_propagates_relative_uncertainties() {
        let x = UncertainValue::new(10.0, 0.1);
        let y = UncertainValue::new(4.0, 0.2);
        let prod = x * y;
        assert_eq!(prod.nominal(), 40.0);
        // sigma = sqrt((y*sx)^2 + (x*sy)^2) = sqrt(0.16 + 4.0)
        assert!((prod.std_dev() - 4.16f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn powi_and_sqrt_match_chain_rule() {
        let x = UncertainValue::new(4.0, 0.1);

        let squared = x.powi(2);
        assert_eq!(squared.nominal(), 16.0);
        assert!((squared.std_dev() - 0.8).abs() < TOL);

        let root = x.sqrt();
        assert_eq!(root.nominal(), 2.0);
        assert!((root.std_dev() - 0.025).abs() < TOL);

        // sqrt(x^2) round-trips to x, correlation intact.
        let back = x.powi(2).sqrt();
        assert!((back.std_dev() - 0.1).abs() < TOL);
    }

    #[test]
    fn scalar_mixed_arithmetic() {
        let x = UncertainValue::new(2.0, 0.5);
        assert_eq!((x.clone() * 3.0).nominal(), 6.0);
        assert!(((x.clone() * 3.0).std_dev() - 1.5).abs() < TOL);
        assert_eq!((10.0 - x.clone()).nominal(), 8.0);
        assert!(((10.0 - x.clone()).std_dev() - 0.5).abs() < TOL);
        assert_eq!((1.0 / x.clone()).nominal(), 0.5);
        // d(1/x)/dx = -1/x^2 = -0.25
        assert!(((1.0 / x).std_dev() - 0.125).abs() < TOL);
    }

    #[test]
    fn division_by_zero_propagates_without_panicking() {
        let zero = UncertainValue::new(0.0, 0.1);
        let one = UncertainValue::new(1.0, 0.1);
        let quot = one / zero;
        assert!(!quot.nominal().is_finite());
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        let x = UncertainValue::new(-1.0, 0.1);
        assert!(x.sqrt().nominal().is_nan());
    }
}

// src/data_analysis/uncertainty.rs
