use crate::core::digits::{digit_at, digit_value, order_by_length};
use crate::domain::ports::PairwiseAdder;

/// Column-decomposition strategy: splits the operands into independent
/// per-column digit sums, then folds them least-significant-first with an
/// `(output, carry)` accumulator. The column sums do not depend on each
/// other; only the fold is order-sensitive, because of the carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnarAdder;

/// One fold step: absorbs a column sum into the accumulated output and the
/// carry handed to the next column.
fn reduce_column((output, carry): (String, u32), column_sum: u32) -> (String, u32) {
    let total = carry + column_sum;
    let mut next = String::with_capacity(output.len() + 1);
    next.push(char::from(b'0' + (total % 10) as u8));
    next.push_str(&output);
    (next, total / 10)
}

impl PairwiseAdder for ColumnarAdder {
    fn name(&self) -> &'static str {
        "columnar"
    }

    fn add_pair(&self, a: &str, b: &str) -> String {
        let (a, b) = order_by_length(a, b);
        let offset = b.len() as isize - a.len() as isize;

        let (output, carry) = a
            .bytes()
            .enumerate()
            .map(|(i, byte)| digit_value(byte) + digit_at(b, i as isize + offset))
            .rev()
            .fold((String::new(), 0), reduce_column);

        // One extra fold step flushes a surviving carry as a new leading
        // digit; without a carry the output is already complete.
        let output = if carry == 0 {
            output
        } else {
            reduce_column((output, carry), 0).0
        };

        if output.is_empty() {
            "0".to_string()
        } else {
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sums() {
        let adder = ColumnarAdder;
        assert_eq!(adder.add_pair("999", "999"), "1998");
        assert_eq!(adder.add_pair("1", "999"), "1000");
        assert_eq!(adder.add_pair("0", "0"), "0");
    }

    #[test]
    fn test_empty_operands_sum_to_zero() {
        let adder = ColumnarAdder;
        assert_eq!(adder.add_pair("", ""), "0");
        assert_eq!(adder.add_pair("0", ""), "0");
    }

    #[test]
    fn test_no_leading_zero_without_final_carry() {
        let adder = ColumnarAdder;
        assert_eq!(adder.add_pair("123", "456"), "579");
    }

    #[test]
    fn test_reduce_column_carry_handoff() {
        assert_eq!(reduce_column(("".to_string(), 0), 18), ("8".to_string(), 1));
        assert_eq!(reduce_column(("8".to_string(), 1), 9), ("08".to_string(), 1));
    }

    #[test]
    fn test_non_digit_characters_read_as_zero() {
        let adder = ColumnarAdder;
        assert_eq!(adder.add_pair("9x9", "1"), "910");
    }
}
