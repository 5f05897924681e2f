/// Parses a Discord snowflake ID from its decimal string form.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Some(u64)` - A valid, non-zero snowflake
/// - `None` - Not a decimal `u64`, or zero
pub fn parse_snowflake(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(parse_snowflake("123456789012345678"), Some(123456789012345678));
        assert_eq!(parse_snowflake(" 42 "), Some(42));
    }

    #[test]
    fn rejects_invalid_ids() {
        assert_eq!(parse_snowflake(""), None);
        assert_eq!(parse_snowflake("0"), None);
        assert_eq!(parse_snowflake("-1"), None);
        assert_eq!(parse_snowflake("abc"), None);
        assert_eq!(parse_snowflake("99999999999999999999999"), None);
    }
}
