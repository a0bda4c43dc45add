//! # divide
//!
//! Truncating integer division for the command line, with parse and
//! arithmetic failures reported as errors instead of traps.
//!
//! ## Example
//!
//! ```
//! use divide::domain::{Division, Operand};
//!
//! # fn main() -> divide::Result<()> {
//! let x: Operand = "-7".parse()?;
//! let y: Operand = "2".parse()?;
//!
//! let division = Division::compute(x, y)?;
//! assert_eq!(division.to_string(), "-7 / 2 = -3");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use domain::{Division, Operand, divide};
pub use error::{DivideError, Result};
