//! Typed construction-failure errors
//!
//! # Design
//!
//! Geometry construction is all-or-nothing: either every invariant holds
//! and the caller gets a fully usable immutable value, or construction
//! fails with one of the variants below. Nothing in this crate recovers,
//! retries or substitutes defaults: the error propagates synchronously
//! to the construction call site and the caller decides what to do.
//!
//! Accessors cannot fail once construction has succeeded, so no error
//! variant exists for the query side of the API.

use crate::geometry::Axis;
use thiserror::Error;

/// Result type for geometry construction
pub type GeometryResult<T> = Result<T, GeometryError>;

// =================================================================================================
// Geometry Error
// =================================================================================================

/// Error raised when domain extents do not describe a valid geometry
///
/// Every variant reports the axis on which validation failed. All three
/// axes are checked; construction is rejected as soon as any one of them
/// violates its invariant, in x, y, z order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A minimum extent is not strictly less than its maximum
    ///
    /// Equality is rejected: a zero-length axis has no interior and no
    /// usable boundary pair.
    #[error("invalid domain extents on {axis} axis: minimum ({min}) must be strictly less than maximum ({max})")]
    InvalidDomainExtents {
        /// Axis on which the ordering failed
        axis: Axis,
        /// Offending minimum extent
        min: f64,
        /// Offending maximum extent
        max: f64,
    },

    /// An extent is NaN or infinite
    #[error("non-finite extent on {axis} axis: {value}")]
    NonFiniteExtent {
        /// Axis carrying the non-finite value
        axis: Axis,
        /// The rejected value
        value: f64,
    },
}

impl GeometryError {
    /// Invalid ordering of extents on one axis
    pub fn invalid_extents(axis: Axis, min: f64, max: f64) -> Self {
        Self::InvalidDomainExtents { axis, min, max }
    }

    /// Non-finite extent on one axis
    pub fn non_finite(axis: Axis, value: f64) -> Self {
        Self::NonFiniteExtent { axis, value }
    }

    /// Axis the error refers to
    pub fn axis(&self) -> Axis {
        match self {
            Self::InvalidDomainExtents { axis, .. } => *axis,
            Self::NonFiniteExtent { axis, .. } => *axis,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
