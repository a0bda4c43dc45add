use std::fmt;
use std::str::FromStr;

use crate::error::DivideError;

/// A base-10 signed integer read from argument text.
///
/// Surrounding ASCII whitespace and a single leading sign are accepted.
/// Trailing garbage such as `12abc` is rejected rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand(i32);

impl Operand {
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for Operand {
    type Err = DivideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());

        trimmed
            .parse::<i32>()
            .map(Self)
            .map_err(|e| DivideError::Parse {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
