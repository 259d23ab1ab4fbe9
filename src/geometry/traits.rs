//! Geometry trait and types
//!
//! This module defines the core API for domain geometries:
//! - `Geometry`: trait for all geometry variants
//! - `Axis`: type-safe coordinate-axis identifier
//! - `Boundary`: boundary name used for boundary-condition lookup

use std::collections::BTreeSet;
use std::fmt;

// =================================================================================================
// Boundary Names
// =================================================================================================

/// Name of one boundary of a domain
///
/// A consuming framework looks boundary conditions up by these names
/// (e.g. `"x_min"` for the lower x face of a Cartesian domain). Names
/// within one geometry are unique; the collection type is a set.
pub type Boundary = String;

// =================================================================================================
// Coordinate Axes (Type-safe Identifiers)
// =================================================================================================

/// Coordinate axis of a Cartesian frame (type-safe enum)
///
/// Used instead of strings or raw indices wherever the API refers to one
/// axis of the domain: per-axis accessors and per-axis error detail.
///
/// # Example
/// ```
/// use geom_rs::geometry::Axis;
///
/// assert_eq!(Axis::X.to_string(), "x");
/// assert_eq!(Axis::Y.min_boundary(), "y_min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First coordinate direction
    X,

    /// Second coordinate direction
    Y,

    /// Third coordinate direction
    Z,
}

impl Axis {
    /// All three axes, in conventional x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Boundary name of the minimum face on this axis
    pub fn min_boundary(&self) -> &'static str {
        match self {
            Axis::X => "x_min",
            Axis::Y => "y_min",
            Axis::Z => "z_min",
        }
    }

    /// Boundary name of the maximum face on this axis
    pub fn max_boundary(&self) -> &'static str {
        match self {
            Axis::X => "x_max",
            Axis::Y => "y_max",
            Axis::Z => "z_max",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

// =================================================================================================
// Geometry Trait
// =================================================================================================

/// Trait for domain geometries
///
/// # Responsibility
/// Describes the simulation domain and names its boundaries.
/// Does NOT generate grids or meshes (that's the consuming framework's job).
///
/// The geometry provides the "where" (domain description), the consumer
/// provides the "how" (discretization).
///
/// # Immutability
/// Implementations are expected to be immutable after construction: every
/// method on this trait is a getter, callable unboundedly many times with
/// the same result. Validation happens when the concrete variant is
/// constructed, never here.
///
/// # Mandatory Point
/// All new geometry variants MUST implement this trait.
pub trait Geometry: Send + Sync {
    /// Set of boundary names of the domain
    ///
    /// Used by consuming frameworks to enumerate the faces that need
    /// boundary conditions. The set is fixed at construction of the
    /// variant and never changes afterwards.
    fn boundaries(&self) -> BTreeSet<Boundary>;

    /// Name of the geometry variant (used for display and logging)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
