//! Session 20: Interfaces - Traits as Capability Sets
//!
//! Run with: cargo run --example session20_interfaces
//!
//! This example demonstrates:
//! - A trait naming two required methods
//! - Two unrelated structs implementing it
//! - One function measuring either through `&dyn Geometry`

use exercises_core::telemetry;
use exercises_interfaces::{measure_all, Circle, Rect};

fn main() -> Result<(), serde_json::Error> {
    telemetry::init();

    println!("=== Session 20: Interfaces ===\n");

    // -------------------------------------------------------------------------
    // Measuring Through the Trait
    // -------------------------------------------------------------------------
    println!("1. measure()");
    println!("------------");

    exercises_interfaces::run().print();
    println!();

    // -------------------------------------------------------------------------
    // Measurements as Data
    // -------------------------------------------------------------------------
    println!("2. Measurements as JSON");
    println!("-----------------------");

    let r = Rect::new(3.0, 4.0);
    let c = Circle::new(5.0);
    for m in measure_all(&[&r, &c]) {
        println!("{}", m.to_json()?);
    }

    println!("\n=== Session 20 Complete ===");
    Ok(())
}
