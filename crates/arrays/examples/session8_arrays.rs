//! Session 8: Arrays - Fixed-Length Sequences
//!
//! Run with: cargo run --example session8_arrays
//! Verbose: RUST_LOG=debug cargo run --example session8_arrays
//!
//! This example demonstrates:
//! - A sequence of 5 integers, zero-valued on creation
//! - Writing and reading a slot by index
//! - Literal initialization
//! - A 2x3 grid filled by nested iteration

use exercises_core::telemetry;

fn main() {
    telemetry::init();

    println!("=== Session 8: Arrays ===\n");

    exercises_arrays::run().print();

    println!("\n=== Session 8 Complete ===");
}
