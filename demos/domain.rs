//! Example: describing a rectangular simulation domain
//!
//! Constructs the domain a grid-generation framework would consume,
//! queries its extents, lengths and named boundaries, and shows how a
//! validation failure surfaces at the construction call site.

use geom_rs::geometry::{Axis, CartesianGeometry, Geometry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Cartesian Domain Description");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Domain extents ======

    let domain = CartesianGeometry::new(
        0.0, 1.0, // x_min, x_max [m]
        -1.0, 1.0, // y_min, y_max [m]
        4.0, 5.5, // z_min, z_max [m]
    )?;

    println!("{}\n", domain);

    // ====== Derived quantities ======

    println!("Lengths:");
    for axis in Axis::ALL {
        let (min, max) = domain.extent(axis);
        println!(
            "  {}: [{:>5}, {:>5}]  ->  l{} = {}",
            axis,
            min,
            max,
            axis,
            domain.length(axis),
        );
    }
    println!("Center: {}", domain.center());
    println!("Volume: {} m^3\n", domain.volume());

    // ====== Boundary names ======

    println!("Boundaries (for boundary-condition lookup):");
    for boundary in domain.boundaries() {
        println!("  - {}", boundary);
    }

    // ====== Validation ======

    println!("\nReversed extents are rejected at construction:");
    match CartesianGeometry::new(1.0, 0.0, -1.0, 1.0, 4.0, 5.5) {
        Ok(_) => unreachable!(),
        Err(err) => println!("  {}", err),
    }

    Ok(())
}
