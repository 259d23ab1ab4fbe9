//! Axis-aligned rectangular Cartesian domain
//!
//! # Key Features
//!
//! - **All-or-nothing construction**: extents are validated up front; a
//!   partially-initialized domain is never observable
//! - **Immutable value**: no setters, safe to share across threads
//! - **Verbatim storage**: extents are kept exactly as supplied, with no
//!   normalization, clamping or rounding
//! - **Fixed boundary set**: the six face names never change after
//!   construction
//!
//! # Example
//!
//! ```rust
//! use geom_rs::geometry::{Axis, CartesianGeometry, Geometry};
//!
//! # fn main() -> Result<(), geom_rs::GeometryError> {
//! let domain = CartesianGeometry::new(0.0, 1.0, -1.0, 1.0, 4.0, 5.5)?;
//!
//! assert_eq!(domain.lx(), 1.0);
//! assert_eq!(domain.extent(Axis::Z), (4.0, 5.5));
//! assert!(domain.boundaries().contains("y_max"));
//! # Ok(())
//! # }
//! ```

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::traits::{Axis, Boundary, Geometry};
use nalgebra::{Point3, Vector3};
use std::collections::BTreeSet;
use std::fmt;

// =================================================================================================
// Cartesian Geometry
// =================================================================================================

/// Axis-aligned rectangular simulation domain
///
/// Describes the region `[x_min, x_max] × [y_min, y_max] × [z_min, z_max]`
/// and names its six faces for boundary-condition lookup.
///
/// # Invariants
///
/// For every constructed value, on each axis the minimum is strictly less
/// than the maximum and both are finite. All derived lengths are therefore
/// strictly positive.
///
/// # Design
///
/// Lengths and other derived quantities are recomputed on each call rather
/// than cached: the extents are the single source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianGeometry {
    // ==================== Domain Extents ====================
    /// Minimum x-coordinate
    x_min: f64,
    /// Maximum x-coordinate
    x_max: f64,
    /// Minimum y-coordinate
    y_min: f64,
    /// Maximum y-coordinate
    y_max: f64,
    /// Minimum z-coordinate
    z_min: f64,
    /// Maximum z-coordinate
    z_max: f64,

    // ==================== Boundary Names ====================
    /// Fixed six-element boundary set, populated at construction
    boundaries: BTreeSet<Boundary>,
}

impl CartesianGeometry {
    /// Create a Cartesian domain from six extents
    ///
    /// # Arguments
    ///
    /// * `x_min`, `x_max` - Extents along the x axis
    /// * `y_min`, `y_max` - Extents along the y axis
    /// * `z_min`, `z_max` - Extents along the z axis
    ///
    /// # Errors
    ///
    /// Validates each axis in x, y, z order and fails on the first
    /// violation:
    /// - [`GeometryError::NonFiniteExtent`] when an extent is NaN or
    ///   infinite
    /// - [`GeometryError::InvalidDomainExtents`] when a minimum is not
    ///   strictly less than its maximum (equality is rejected)
    ///
    /// # Example
    ///
    /// ```rust
    /// use geom_rs::geometry::CartesianGeometry;
    ///
    /// let domain = CartesianGeometry::new(0.0, 1.0, -1.0, 1.0, 4.0, 5.5);
    /// assert!(domain.is_ok());
    ///
    /// // Reversed extents are rejected
    /// let reversed = CartesianGeometry::new(1.0, 0.0, -1.0, 1.0, 4.0, 5.5);
    /// assert!(reversed.is_err());
    /// ```
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) -> GeometryResult<Self> {
        Self::validate_axis(Axis::X, x_min, x_max)?;
        Self::validate_axis(Axis::Y, y_min, y_max)?;
        Self::validate_axis(Axis::Z, z_min, z_max)?;

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
            boundaries: Self::fixed_boundaries(),
        })
    }

    /// Validate the extent pair of one axis
    fn validate_axis(axis: Axis, min: f64, max: f64) -> GeometryResult<()> {
        if !min.is_finite() {
            return Err(GeometryError::non_finite(axis, min));
        }
        if !max.is_finite() {
            return Err(GeometryError::non_finite(axis, max));
        }
        if min >= max {
            return Err(GeometryError::invalid_extents(axis, min, max));
        }
        Ok(())
    }

    /// The six face names of a rectangular domain
    fn fixed_boundaries() -> BTreeSet<Boundary> {
        Axis::ALL
            .iter()
            .flat_map(|axis| [axis.min_boundary(), axis.max_boundary()])
            .map(Boundary::from)
            .collect()
    }

    // ====================================== Factory methods ======================================

    /// The unit cube `[0, 1] × [0, 1] × [0, 1]`
    ///
    /// Statically valid, so construction cannot fail.
    pub fn unit() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
            z_min: 0.0,
            z_max: 1.0,
            boundaries: Self::fixed_boundaries(),
        }
    }

    /// A domain of the given side lengths centered on the origin
    ///
    /// # Errors
    ///
    /// Fails through the same validation as [`CartesianGeometry::new`]
    /// when any length is non-positive or non-finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geom_rs::geometry::CartesianGeometry;
    ///
    /// let domain = CartesianGeometry::centered(2.0, 4.0, 1.0).unwrap();
    /// assert_eq!(domain.x_min(), -1.0);
    /// assert_eq!(domain.y_max(), 2.0);
    /// ```
    pub fn centered(lx: f64, ly: f64, lz: f64) -> GeometryResult<Self> {
        Self::new(
            -lx / 2.0,
            lx / 2.0,
            -ly / 2.0,
            ly / 2.0,
            -lz / 2.0,
            lz / 2.0,
        )
    }

    // ========================================== Queries ==========================================

    /// Minimum x-coordinate of the domain
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Maximum x-coordinate of the domain
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Minimum y-coordinate of the domain
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Maximum y-coordinate of the domain
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Minimum z-coordinate of the domain
    pub fn z_min(&self) -> f64 {
        self.z_min
    }

    /// Maximum z-coordinate of the domain
    pub fn z_max(&self) -> f64 {
        self.z_max
    }

    /// Domain length in the x direction (always strictly positive)
    pub fn lx(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Domain length in the y direction (always strictly positive)
    pub fn ly(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Domain length in the z direction (always strictly positive)
    pub fn lz(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// Extent pair `(min, max)` of one axis
    pub fn extent(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.x_min, self.x_max),
            Axis::Y => (self.y_min, self.y_max),
            Axis::Z => (self.z_min, self.z_max),
        }
    }

    /// Domain length along one axis
    pub fn length(&self, axis: Axis) -> f64 {
        let (min, max) = self.extent(axis);
        max - min
    }

    /// The three domain lengths as a vector
    pub fn lengths(&self) -> Vector3<f64> {
        Vector3::new(self.lx(), self.ly(), self.lz())
    }

    /// Geometric center of the domain
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
            0.5 * (self.z_min + self.z_max),
        )
    }

    /// Volume of the domain (always strictly positive)
    pub fn volume(&self) -> f64 {
        self.lx() * self.ly() * self.lz()
    }
}

impl Geometry for CartesianGeometry {
    fn boundaries(&self) -> BTreeSet<Boundary> {
        self.boundaries.clone()
    }

    fn name(&self) -> &str {
        "Cartesian"
    }
}

impl fmt::Display for CartesianGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cartesian domain [{}, {}] x [{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max, self.z_min, self.z_max
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
