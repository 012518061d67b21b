//! Shared digit access for the adder strategies.

/// Value of one byte read as a decimal digit. Non-digit bytes contribute 0
/// rather than failing.
pub fn digit_value(byte: u8) -> u32 {
    (byte as char).to_digit(10).unwrap_or(0)
}

/// Digit of `s` at a possibly negative or out-of-range column index. The
/// shorter operand is addressed through a negative offset, so misses on
/// either end read as 0.
pub fn digit_at(s: &str, index: isize) -> u32 {
    if index < 0 {
        return 0;
    }
    s.as_bytes()
        .get(index as usize)
        .copied()
        .map(digit_value)
        .unwrap_or(0)
}

/// Length-only reordering so the first string is never shorter than the
/// second. Operand validation lives in `utils::validation`; this keeps the
/// strategies commutative when called directly.
pub fn order_by_length<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a.len() < b.len() {
        (b, a)
    } else {
        (a, b)
    }
}
