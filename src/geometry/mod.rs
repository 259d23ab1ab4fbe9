//! Geometry capability trait and concrete domain types
//!
//! This module provides the trait and implementations for simulation
//! domain geometries. A geometry describes the region a simulation runs
//! on and names its boundaries so a consuming framework can attach
//! boundary conditions to them.
//!
//! # Core Concepts
//!
//! - **Geometry**: capability trait ("a geometry exposes a set of named
//!   boundaries")
//! - **CartesianGeometry**: axis-aligned rectangular domain described by
//!   six scalar extents
//! - **Axis / Boundary**: type-safe axis identifier and boundary name
//!
//! # Architecture
//!
//! Geometry types are **description only**:
//! - They hold validated extents and answer queries (extents, lengths,
//!   boundary names)
//! - Grid generation, meshing and decomposition belong to consuming
//!   frameworks
//!
//! This separation allows:
//! - Same domain description consumed by different grid generators
//! - New geometry variants without touching existing consumers
//!
//! # Example
//!
//! ```rust
//! use geom_rs::geometry::{CartesianGeometry, Geometry};
//!
//! # fn main() -> Result<(), geom_rs::GeometryError> {
//! let domain = CartesianGeometry::new(0.0, 1.0, -1.0, 1.0, 4.0, 5.5)?;
//!
//! // Extents are stored verbatim
//! assert_eq!(domain.x_min(), 0.0);
//! assert_eq!(domain.z_max(), 5.5);
//!
//! // Lengths are derived on demand
//! assert_eq!(domain.ly(), 2.0);
//!
//! // Boundaries are fixed for the lifetime of the value
//! assert_eq!(domain.boundaries().len(), 6);
//! # Ok(())
//! # }
//! ```
//!
//! # Implementing a New Geometry Variant
//!
//! To add a geometry variant, implement the `Geometry` trait:
//!
//! ```rust
//! use geom_rs::geometry::{Boundary, Geometry};
//! use std::collections::BTreeSet;
//!
//! struct ChannelGeometry {
//!     // Variant-specific extents
//! }
//!
//! impl Geometry for ChannelGeometry {
//!     fn boundaries(&self) -> BTreeSet<Boundary> {
//!         ["inlet", "outlet", "wall"]
//!             .iter()
//!             .map(|name| name.to_string())
//!             .collect()
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Channel"
//!     }
//! }
//! ```
//!
//! Variants own their state independently; the trait requires no shared
//! base storage.
//!
//! # Available Variants
//!
//! Currently implemented geometry variants:
//! - **Cartesian**: axis-aligned rectangular domain with the fixed
//!   boundary set `{x_min, x_max, y_min, y_max, z_min, z_max}`

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod cartesian;
pub mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use cartesian::CartesianGeometry;
pub use traits::{Axis, Boundary, Geometry};
