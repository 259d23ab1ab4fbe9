//! Helper functions for integration tests

use geom_rs::geometry::{Boundary, CartesianGeometry};
use std::collections::BTreeSet;

/// Create the reference domain used throughout the integration tests
///
/// Extents: `[0, 1] x [-1, 1] x [4, 5.5]`, so the expected lengths are
/// `lx = 1.0`, `ly = 2.0`, `lz = 1.5`.
pub fn reference_domain() -> CartesianGeometry {
    CartesianGeometry::new(0.0, 1.0, -1.0, 1.0, 4.0, 5.5)
        .expect("reference extents are valid")
}

/// The fixed boundary-name set of any Cartesian domain
pub fn cartesian_boundary_names() -> BTreeSet<Boundary> {
    ["x_min", "x_max", "y_min", "y_max", "z_min", "z_max"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
