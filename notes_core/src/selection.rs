/// Resolve a typed selection index against a collection of `len` notes.
///
/// Returns the 0-based position when `input` is made only of ASCII digits
/// and names a note in `1..=len`. Everything else (empty input, signs,
/// whitespace, zero, numbers past the end or too large to parse) yields
/// `None`. Non-ASCII decimal digits such as `"٢"` or `"２"` are not accepted.
#[must_use]
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let number: usize = input.parse().ok()?;
    if (1..=len).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_indices_map_to_positions() {
        for number in 1..=5 {
            assert_eq!(parse_selection(&number.to_string(), 5), Some(number - 1));
        }
    }

    #[test]
    fn test_non_digit_input_is_rejected() {
        for input in ["", "abc", "-1", "+1", " 1", "1 ", "1.0", "1a"] {
            assert_eq!(parse_selection(input, 3), None, "input {input:?}");
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("1", 0), None);
        assert_eq!(parse_selection("99999999999999999999999", 3), None);
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        for input in ["٢", "２", "²"] {
            assert_eq!(parse_selection(input, 3), None, "input {input:?}");
        }
    }

    #[test]
    fn test_leading_zeros_are_digits() {
        assert_eq!(parse_selection("02", 3), Some(1));
    }
}
