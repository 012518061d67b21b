use crate::domain::ports::PairwiseAdder;
use crate::utils::error::{Result, SumError};
use crate::utils::validation::normalize_pair;

/// Folds any number of operands into a single sum through repeated pairwise
/// addition with the chosen strategy.
///
/// Absent or empty operands count as zero. A single operand is returned
/// standalone without touching the adder; an empty operand list is an error
/// rather than a guessed-at identity.
pub fn add<A: PairwiseAdder + ?Sized>(adder: &A, operands: &[Option<&str>]) -> Result<String> {
    if operands.is_empty() {
        return Err(SumError::InvalidArguments {
            reason: "at least one operand is required".to_string(),
        });
    }

    if let [only] = operands {
        return Ok(only.unwrap_or("0").to_string());
    }

    let mut acc = operands[0].unwrap_or("0").to_string();
    for operand in &operands[1..] {
        let left = if acc.is_empty() { "0" } else { acc.as_str() };
        let right = match operand {
            Some(s) if !s.is_empty() => *s,
            _ => "0",
        };
        let (longer, shorter) = normalize_pair(Some(left), Some(right))?;
        acc = adder.add_pair(longer, shorter);
    }
    Ok(acc)
}
