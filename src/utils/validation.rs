use crate::utils::error::{Result, SumError};

/// Validates two candidate operands and reorders them so the first returned
/// string is never shorter than the second. The adder strategies rely on
/// this ordering for their column offset arithmetic.
///
/// Only absent or empty operands are rejected here; non-digit characters
/// inside an operand are left for the adders to coerce to 0.
pub fn normalize_pair<'a>(a: Option<&'a str>, b: Option<&'a str>) -> Result<(&'a str, &'a str)> {
    let a = require_operand("first", a)?;
    let b = require_operand("second", b)?;
    if a.len() < b.len() {
        Ok((b, a))
    } else {
        Ok((a, b))
    }
}

// Callers that want empty to mean zero substitute "0" before validating.
fn require_operand<'a>(position: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(SumError::InvalidOperand { position }),
    }
}
