use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an optional leading dollar sign and a decimal number, anchored
/// so word characters glued to the end of the number ("60ish") do not
/// produce a value.
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?(\d+(?:\.\d+)?)(?:$|\b)").unwrap());

/// Extract a monthly price from a free-text answer.
///
/// Respondents wrote anything from "$55.00" to "about 60" to "n/a"; the
/// first number with a clean right edge wins, and anything else is a
/// missing value.
pub fn extract_price(raw: &str) -> Option<f64> {
    PRICE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_amount() {
        assert_eq!(extract_price("$55.00"), Some(55.0));
        assert_eq!(extract_price("$45"), Some(45.0));
    }

    #[test]
    fn test_plain_number_with_prose() {
        assert_eq!(extract_price("about 60"), Some(60.0));
        assert_eq!(extract_price("60 dollars"), Some(60.0));
    }

    #[test]
    fn test_trailing_slash_is_a_clean_edge() {
        assert_eq!(extract_price("$45/month"), Some(45.0));
    }

    #[test]
    fn test_glued_suffix_rejected() {
        assert_eq!(extract_price("60ish"), None);
    }

    #[test]
    fn test_non_numeric_answers() {
        assert_eq!(extract_price("n/a"), None);
        assert_eq!(extract_price("don't know"), None);
        assert_eq!(extract_price(""), None);
    }

    #[test]
    fn test_decimal_precision_survives() {
        assert_eq!(extract_price("$49.99"), Some(49.99));
    }
}
