//! Roman numeral parsing and formatting.

use crate::domain::foundation::ValidationError;

/// Largest value expressible with standard numerals.
pub const MAX_ROMAN: u32 = 3999;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parses a standard Roman numeral (case-insensitive).
///
/// Only canonical forms are accepted: `IV` but not `IIII`, `XC` but not
/// `LXL`. The numeral is re-rendered and compared, so any input that would
/// not be produced by [`to_roman`] is rejected.
pub fn parse_roman(input: &str) -> Result<u32, ValidationError> {
    let upper = input.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(ValidationError::empty_field("roman numeral"));
    }

    let mut values = Vec::with_capacity(upper.len());
    for c in upper.chars() {
        let value = symbol_value(c).ok_or_else(|| {
            ValidationError::invalid_format("roman numeral", format!("unexpected symbol '{}'", c))
        })?;
        values.push(value);
    }

    let mut total: i64 = 0;
    for (i, value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if next > value => total -= i64::from(*value),
            _ => total += i64::from(*value),
        }
    }
    let total = u32::try_from(total).unwrap_or(0);

    // The sum alone accepts malformed strings such as "IIV".
    match to_roman(total) {
        Some(canonical) if canonical == upper => Ok(total),
        _ => Err(ValidationError::invalid_format(
            "roman numeral",
            format!("'{}' is not a standard numeral", input.trim()),
        )),
    }
}

/// Formats a value as a canonical Roman numeral, `None` outside 1..=3999.
pub fn to_roman(mut value: u32) -> Option<String> {
    if value == 0 || value > MAX_ROMAN {
        return None;
    }
    let mut out = String::new();
    for (amount, symbol) in NUMERALS {
        while value >= amount {
            out.push_str(symbol);
            value -= amount;
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_additive_numerals() {
        assert_eq!(parse_roman("I").unwrap(), 1);
        assert_eq!(parse_roman("III").unwrap(), 3);
        assert_eq!(parse_roman("VIII").unwrap(), 8);
        assert_eq!(parse_roman("MDCLXVI").unwrap(), 1666);
    }

    #[test]
    fn parses_subtractive_numerals() {
        assert_eq!(parse_roman("IV").unwrap(), 4);
        assert_eq!(parse_roman("IX").unwrap(), 9);
        assert_eq!(parse_roman("XIV").unwrap(), 14);
        assert_eq!(parse_roman("XLII").unwrap(), 42);
        assert_eq!(parse_roman("MCMXCIV").unwrap(), 1994);
        assert_eq!(parse_roman("MMMCMXCIX").unwrap(), 3999);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse_roman("xiv").unwrap(), 14);
        assert_eq!(parse_roman(" ii ").unwrap(), 2);
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(parse_roman("A").is_err());
        assert!(parse_roman("X1").is_err());
        assert!(parse_roman("").is_err());
    }

    #[test]
    fn rejects_non_canonical_forms() {
        assert!(parse_roman("IIII").is_err());
        assert!(parse_roman("VV").is_err());
        assert!(parse_roman("IC").is_err());
        assert!(parse_roman("IIV").is_err());
        assert!(parse_roman("MMMM").is_err());
    }

    #[test]
    fn to_roman_roundtrips_every_value() {
        for value in 1..=MAX_ROMAN {
            let numeral = to_roman(value).unwrap();
            assert_eq!(parse_roman(&numeral).unwrap(), value);
        }
    }

    #[test]
    fn to_roman_rejects_out_of_range() {
        assert_eq!(to_roman(0), None);
        assert_eq!(to_roman(4000), None);
    }
}
