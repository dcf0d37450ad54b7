//! Session 21: Errors - Failures as Values
//!
//! Run with: cargo run --example session21_errors
//!
//! This example demonstrates:
//! - Returning `Result<i64, Failure>` instead of panicking
//! - A message-only failure and a structured one
//! - Narrowing a failure to read its fields

use exercises_core::telemetry;

fn main() {
    telemetry::init();

    println!("=== Session 21: Errors ===\n");

    exercises_errors::run().print();

    println!("\n=== Session 21 Complete ===");
}
