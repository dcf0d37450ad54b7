//! The two fallible functions.

use tracing::debug;

use crate::error::{ArgError, Failure};

/// The argument both functions refuse.
pub const UNWORKABLE: i64 = 42;

/// Add 3 to `arg`, refusing 42 with a message-only failure.
///
/// The addition wraps at the top of the `i64` range instead of panicking.
pub fn f1(arg: i64) -> Result<i64, Failure> {
    if arg == UNWORKABLE {
        debug!(arg, "f1 rejecting argument");
        return Err(Failure::generic(format!("Can't work with {}", arg)));
    }
    Ok(arg.wrapping_add(3))
}

/// Refuse 42 with a structured [`ArgError`].
///
/// On success this returns 3 whatever `arg` was.
pub fn f2(arg: i64) -> Result<i64, Failure> {
    if arg == UNWORKABLE {
        debug!(arg, "f2 rejecting argument");
        return Err(ArgError::new(arg, "Cant work with it").into());
    }
    Ok(3)
}
