//! geom-rs: Domain Geometry Description
//!
//! A small, strict building block for grid-based simulation frameworks:
//! it describes WHERE a simulation lives (the domain and its named
//! boundaries), not HOW the domain is discretized or solved.
//!
//! # Architecture
//!
//! geom-rs is built on two core principles:
//!
//! 1. **Separation of Description and Discretization**
//!    - Geometry types describe the domain (extents, boundaries)
//!    - Grid generation, meshing and solvers live in consuming crates
//!
//! 2. **Validated Immutability**
//!    - Construction either yields a fully valid domain or a typed error
//!    - After construction the value never changes, so it is safe to
//!      share freely across threads
//!
//! # Quick Start
//!
//! ```rust
//! use geom_rs::geometry::{CartesianGeometry, Geometry};
//!
//! # fn main() -> Result<(), geom_rs::GeometryError> {
//! // 1. Describe the domain extents
//! let domain = CartesianGeometry::new(
//!     0.0, 1.0,    // x_min, x_max
//!     -1.0, 1.0,   // y_min, y_max
//!     4.0, 5.5,    // z_min, z_max
//! )?;
//!
//! // 2. Query derived lengths
//! assert_eq!(domain.lx(), 1.0);
//! assert_eq!(domain.ly(), 2.0);
//! assert_eq!(domain.lz(), 1.5);
//!
//! // 3. Query the named boundaries (for boundary-condition lookup)
//! let boundaries = domain.boundaries();
//! assert!(boundaries.contains("x_min"));
//! assert_eq!(boundaries.len(), 6);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`geometry`]: Geometry capability trait and concrete domain types
//! - [`error`]: Typed construction-failure errors

// Core modules
pub mod error;
pub mod geometry;

pub use error::{GeometryError, GeometryResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use geom_rs::prelude::*;
    //! ```
    pub use crate::error::{GeometryError, GeometryResult};
    pub use crate::geometry::{Axis,
                              Boundary,
                              CartesianGeometry,
                              Geometry};
}
