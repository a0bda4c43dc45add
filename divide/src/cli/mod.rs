use std::io::Write;

use clap::Parser;

use crate::domain::{Division, Operand};
use crate::error::{DivideError, Result};

mod output;

pub use output::{render, report};

#[derive(Parser, Debug)]
#[command(name = "divide")]
#[command(about = "Print the truncating integer quotient of two integers")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    // Every positional lands here, `-x` included, so the count check and the
    // integer parse report on it rather than clap. Flags must precede the
    // first operand.
    #[arg(
        value_name = "INT",
        allow_hyphen_values = true,
        help = "Dividend and divisor, base-10 integers"
    )]
    pub operands: Vec<String>,
}

/// Checks the argument count before touching the argument text.
pub fn parse_operands(args: &[String]) -> Result<(Operand, Operand)> {
    let [x, y] = args else {
        tracing::debug!(count = args.len(), "wrong number of operands");
        return Err(DivideError::Usage);
    };

    let dividend = x.parse::<Operand>()?;
    let divisor = y.parse::<Operand>()?;
    tracing::debug!(%dividend, %divisor, "parsed operands");

    Ok((dividend, divisor))
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Division> {
    let (dividend, divisor) = parse_operands(&cli.operands)?;
    let division = Division::compute(dividend, divisor)?;

    writeln!(out, "{}", render(&division, cli.json)?)?;
    Ok(division)
}
