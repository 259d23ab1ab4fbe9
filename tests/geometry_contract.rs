//! Integration tests: geometry module public contract
//!
//! These tests exercise the crate the way a consuming grid framework
//! would: construct a domain, query extents, lengths and boundaries, and
//! work with geometries polymorphically through the `Geometry` trait.

use geom_rs::geometry::{Axis, CartesianGeometry, Geometry};
use nalgebra::{Point3, Vector3};

mod common;
use common::{cartesian_boundary_names, reference_domain, ChannelStub};

// =================================================================================================
// Constructor and Accessor Contract
// =================================================================================================

#[test]
fn test_valid_construction_round_trips_extents() {
    let domain = reference_domain();

    assert_eq!(domain.x_min(), 0.0);
    assert_eq!(domain.x_max(), 1.0);
    assert_eq!(domain.y_min(), -1.0);
    assert_eq!(domain.y_max(), 1.0);
    assert_eq!(domain.z_min(), 4.0);
    assert_eq!(domain.z_max(), 5.5);
}

#[test]
fn test_lengths_match_extent_differences() {
    let domain = reference_domain();

    assert_eq!(domain.lx(), 1.0);
    assert_eq!(domain.ly(), 2.0);
    assert_eq!(domain.lz(), 1.5);

    assert_eq!(domain.lengths(), Vector3::new(1.0, 2.0, 1.5));
    assert_eq!(domain.volume(), 3.0);
    assert_eq!(domain.center(), Point3::new(0.5, 0.0, 4.75));
}

#[test]
fn test_per_axis_accessors() {
    let domain = reference_domain();

    assert_eq!(domain.extent(Axis::X), (0.0, 1.0));
    assert_eq!(domain.extent(Axis::Y), (-1.0, 1.0));
    assert_eq!(domain.extent(Axis::Z), (4.0, 5.5));

    for axis in Axis::ALL {
        let (min, max) = domain.extent(axis);
        assert_eq!(domain.length(axis), max - min);
        assert!(domain.length(axis) > 0.0);
    }
}

#[test]
fn test_accessors_are_stable_across_repeated_calls() {
    let domain = reference_domain();

    let first = (domain.lx(), domain.ly(), domain.lz(), domain.boundaries());
    for _ in 0..10 {
        assert_eq!(
            (domain.lx(), domain.ly(), domain.lz(), domain.boundaries()),
            first,
        );
    }
}

// =================================================================================================
// Boundary Set Contract
// =================================================================================================

#[test]
fn test_cartesian_boundary_set_is_the_fixed_six_names() {
    let domain = reference_domain();

    assert_eq!(domain.boundaries(), cartesian_boundary_names());
}

#[test]
fn test_boundary_set_does_not_depend_on_extents() {
    let shifted = CartesianGeometry::new(100.0, 200.0, -50.0, 50.0, 0.25, 0.75).unwrap();

    assert_eq!(shifted.boundaries(), cartesian_boundary_names());
}

#[test]
fn test_boundary_names_pair_up_per_axis() {
    let domain = reference_domain();
    let boundaries = domain.boundaries();

    for axis in Axis::ALL {
        assert!(boundaries.contains(axis.min_boundary()));
        assert!(boundaries.contains(axis.max_boundary()));
    }
}

// =================================================================================================
// Polymorphic Use Through the Trait
// =================================================================================================

#[test]
fn test_cartesian_as_trait_object() {
    let geometry: Box<dyn Geometry> = Box::new(reference_domain());

    assert_eq!(geometry.name(), "Cartesian");
    assert_eq!(geometry.boundaries(), cartesian_boundary_names());
}

#[test]
fn test_variants_coexist_behind_the_trait() {
    let geometries: Vec<Box<dyn Geometry>> =
        vec![Box::new(reference_domain()), Box::new(ChannelStub)];

    let names: Vec<&str> = geometries.iter().map(|g| g.name()).collect();
    assert_eq!(names, vec!["Cartesian", "ChannelStub"]);

    // Each variant owns its boundary set independently
    assert_eq!(geometries[0].boundaries().len(), 6);
    assert_eq!(geometries[1].boundaries().len(), 3);
}

#[test]
fn test_immutable_domain_is_shareable_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let domain = Arc::new(reference_domain());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let domain = Arc::clone(&domain);
            thread::spawn(move || (domain.volume(), domain.boundaries().len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (3.0, 6));
    }
}
