pub mod division;
pub mod operand;

pub use division::{Division, divide};
pub use operand::Operand;
