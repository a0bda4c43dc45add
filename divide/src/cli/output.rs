use std::io::Write;

use serde_json::json;

use crate::domain::Division;
use crate::error::{DivideError, Result};

pub fn render(division: &Division, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(division)?)
    } else {
        Ok(division.to_string())
    }
}

/// Writes `err` for the user. The usage message and JSON errors go to
/// `out`; everything else is `error: <message>` on `err_out`.
pub fn report(
    err: &DivideError,
    json: bool,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> std::io::Result<()> {
    if json {
        let body = json!({ "error": err.kind(), "message": err.to_string() });
        return writeln!(out, "{body}");
    }

    match err {
        DivideError::Usage => writeln!(out, "{err}"),
        _ => writeln!(err_out, "error: {err}"),
    }
}
