use std::fmt;

use serde::Serialize;

use super::Operand;
use crate::error::{DivideError, Result};

/// Truncating integer division with explicit failure instead of a trap.
///
/// Rounds toward zero, so `-7 / 2 == -3`. Fails on a zero divisor and on
/// `i32::MIN / -1`, the only quotient that does not fit.
pub fn divide(x: i32, y: i32) -> Result<i32> {
    if y == 0 {
        return Err(DivideError::DivisionByZero(x));
    }
    x.checked_div(y).ok_or(DivideError::Overflow(x, y))
}

/// A computed equation. Renders as `<x> / <y> = <z>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Division {
    pub dividend: i32,
    pub divisor: i32,
    pub quotient: i32,
}

impl Division {
    pub fn compute(dividend: Operand, divisor: Operand) -> Result<Self> {
        let (x, y) = (dividend.value(), divisor.value());
        let quotient = divide(x, y)?;

        tracing::debug!(dividend = x, divisor = y, quotient, "computed quotient");

        Ok(Self {
            dividend: x,
            divisor: y,
            quotient,
        })
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} = {}", self.dividend, self.divisor, self.quotient)
    }
}
