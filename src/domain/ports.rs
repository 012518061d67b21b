/// Strategy seam for pairwise digit-string addition.
///
/// Every implementation must produce the same output for the same inputs:
/// the decimal sum of `a` and `b` as a digit string with no superfluous
/// leading zero, or `"0"` when both inputs reduce to nothing.
pub trait PairwiseAdder: Send + Sync {
    /// Label used for report section headers.
    fn name(&self) -> &'static str;

    /// Adds two digit strings. Non-digit characters inside an operand are
    /// read as digit value 0 rather than rejected.
    fn add_pair(&self, a: &str, b: &str) -> String;
}
