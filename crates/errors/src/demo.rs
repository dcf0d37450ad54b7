use exercises_core::Transcript;
use tracing::info;

use crate::error::Failure;
use crate::funcs::{f1, f2, UNWORKABLE};

/// Print a result under the given labels. f1 reports success as
/// `f1 worked 10`, f2 as `f2 worked: 3`, so each caller picks its own.
fn report(out: &mut Transcript, worked: &str, failed: &str, result: Result<i64, Failure>) {
    match result {
        Ok(r) => out.record(worked, r),
        Err(e) => out.record(failed, e),
    };
}

/// Run the errors demo and return what it prints.
pub fn run() -> Transcript {
    let mut out = Transcript::new("errors");

    for i in [7, UNWORKABLE] {
        report(&mut out, "f1 worked", "f1 failed:", f1(i));
    }
    for i in [7, UNWORKABLE] {
        report(&mut out, "f2 worked:", "f2 failed:", f2(i));
    }

    // To use the fields, narrow the failure to the structured shape first.
    if let Err(e) = f2(UNWORKABLE) {
        if let Some(ae) = e.as_arg_error() {
            out.line(ae.arg.to_string());
            out.line(ae.prob.clone());
        }
    }

    info!(lines = out.len(), "errors demo finished");
    out
}
