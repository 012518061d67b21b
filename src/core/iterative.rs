use crate::core::digits::{digit_at, digit_value, order_by_length};
use crate::domain::ports::PairwiseAdder;

/// Carry-tracking strategy: walks the columns of the longer operand from the
/// least significant end, threading a mutable carry between columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeAdder;

impl PairwiseAdder for IterativeAdder {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn add_pair(&self, a: &str, b: &str) -> String {
        let (a, b) = order_by_length(a, b);
        // Columns of b line up against a through this non-positive offset.
        let offset = b.len() as isize - a.len() as isize;

        let mut output: Vec<char> = Vec::with_capacity(a.len() + 1);
        let mut carry: u32 = 0;
        for i in (0..a.len()).rev() {
            let digit_a = digit_value(a.as_bytes()[i]);
            let digit_b = digit_at(b, i as isize + offset);
            let sum = digit_a + digit_b + carry;
            carry = sum / 10;
            output.push(char::from(b'0' + (sum % 10) as u8));
        }

        // A carry surviving the last column becomes one extra leading digit.
        // Skipping this step when the carry is zero is what avoids a
        // spurious leading zero.
        if carry > 0 {
            output.push(char::from(b'0' + (carry % 10) as u8));
        }

        if output.is_empty() {
            return "0".to_string();
        }
        output.iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sums() {
        let adder = IterativeAdder;
        assert_eq!(adder.add_pair("999", "999"), "1998");
        assert_eq!(adder.add_pair("999", "1"), "1000");
        assert_eq!(adder.add_pair("0", "0"), "0");
    }

    #[test]
    fn test_unequal_lengths() {
        let adder = IterativeAdder;
        assert_eq!(adder.add_pair("12345", "55"), "12400");
        assert_eq!(adder.add_pair("55", "12345"), "12400");
    }

    #[test]
    fn test_empty_operands_sum_to_zero() {
        let adder = IterativeAdder;
        assert_eq!(adder.add_pair("", ""), "0");
        assert_eq!(adder.add_pair("", "0"), "0");
        assert_eq!(adder.add_pair("", "7"), "7");
    }

    #[test]
    fn test_carry_beyond_machine_widths() {
        let adder = IterativeAdder;
        assert_eq!(
            adder.add_pair("99999999999999999999999999999999", "1"),
            "100000000000000000000000000000000"
        );
    }

    #[test]
    fn test_non_digit_characters_read_as_zero() {
        let adder = IterativeAdder;
        assert_eq!(adder.add_pair("9x9", "1"), "910");
    }
}
