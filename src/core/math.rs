use crate::utils::error::{GreeterError, Result};
use std::ops::Add;

/// Returns `a + b` with the operand type's own overflow behaviour.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Integer addition that reports overflow instead of wrapping or panicking.
pub fn checked_add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or_else(|| {
        GreeterError::invalid_argument("b", b, format!("Adding {} to {} overflows i64", b, a))
    })
}
