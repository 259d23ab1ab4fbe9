//! Mock geometry variants for integration tests
//!
//! These stubs exercise the `Geometry` trait from outside the crate, the
//! way a consuming framework would add its own variants.

use geom_rs::geometry::{Boundary, Geometry};
use std::collections::BTreeSet;

/// Minimal non-Cartesian variant: a channel with three named faces
///
/// Exists only to verify that the capability contract is implementable
/// independently of `CartesianGeometry` and usable as a trait object.
pub struct ChannelStub;

impl Geometry for ChannelStub {
    fn boundaries(&self) -> BTreeSet<Boundary> {
        ["inlet", "outlet", "wall"]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn name(&self) -> &str {
        "ChannelStub"
    }
}
