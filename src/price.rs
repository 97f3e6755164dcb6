//! Price Text Parser
//!
//! Converts Indian-format price strings ("2.2 Crore Onwards", "₹45 Lakhs",
//! "2 Cr") into rupee amounts for filtering and sorting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Rupees per crore
const CRORE: f64 = 10_000_000.0;

/// Rupees per lakh
const LAKH: f64 = 100_000.0;

// == Normalization Regexes ==
// Listing text glues numbers to units ("2Cr", "4.5lakh"); split them so the
// word-boundary matching below can see the unit.
static DIGIT_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d)([a-z])").expect("digit-unit regex should be valid")
});

static UNIT_DIGIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z])(\d)").expect("unit-digit regex should be valid")
});

static CURRENCY_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\brs\b\.?|\binr\b").expect("currency word regex should be valid")
});

static FILLER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bonwards?\b|\bonly\b|\bstarting\b|\bfrom\b|\bapprox\b\.?")
        .expect("filler word regex should be valid")
});

static CRORE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bcrores?\b|\bcr\b").expect("crore word regex should be valid")
});

static LAKH_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\blakhs?\b|\blacs?\b").expect("lakh word regex should be valid")
});

// == Grammar Regexes ==
static COMBINED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*crore\s*(?:and\s+)?(\d+(?:\.\d+)?)\s*lakh")
        .expect("combined price regex should be valid")
});

static CRORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*crore").expect("crore price regex should be valid")
});

static LAKH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*lakh").expect("lakh price regex should be valid")
});

// Bare amounts must be the whole string once noise is stripped, so "Tower 2"
// does not parse as two rupees.
static PLAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*$").expect("plain number regex should be valid")
});

// == Parsing ==
/// Parses a free-text price expression into a rupee amount.
///
/// Normalization lower-cases the text, strips currency markers (₹, rs, inr),
/// digit-group commas, and filler words ("onwards", "only", "approx."), then
/// canonicalizes unit spellings to "crore" and "lakh".
///
/// Grammar, first match wins:
/// 1. Combined crore-lakh ("4 Crore 80 Lakhs")
/// 2. Crore only ("2.2 Crore Onwards", "2 Cr")
/// 3. Lakh only ("85 Lakhs", "45 Lac")
/// 4. The whole remaining string is a bare number, taken as raw rupees
///    ("₹45,00,000")
///
/// Results are rounded to the nearest rupee. Returns `None` for empty input
/// or text with no parseable amount ("Price on Request"). Never panics,
/// whatever the input.
pub fn parse_price(text: &str) -> Option<u64> {
    let normalized = normalize(text);
    if normalized.trim().is_empty() {
        return None;
    }

    if let Some(caps) = COMBINED_RE.captures(&normalized) {
        let crores = capture_amount(&caps, 1)?;
        let lakhs = capture_amount(&caps, 2)?;
        return Some(to_rupees(crores * CRORE + lakhs * LAKH));
    }

    if let Some(caps) = CRORE_RE.captures(&normalized) {
        return Some(to_rupees(capture_amount(&caps, 1)? * CRORE));
    }

    if let Some(caps) = LAKH_RE.captures(&normalized) {
        return Some(to_rupees(capture_amount(&caps, 1)? * LAKH));
    }

    if let Some(caps) = PLAIN_RE.captures(&normalized) {
        return Some(to_rupees(capture_amount(&caps, 1)?));
    }

    None
}

// == Range Check ==
/// Returns true when a parsed amount exists and falls within the given
/// bounds, inclusive on both ends. An absent bound leaves that side
/// unconstrained; an absent amount never matches any range.
pub fn price_within_range(amount: Option<u64>, min: Option<u64>, max: Option<u64>) -> bool {
    match amount {
        Some(value) => {
            min.map_or(true, |lower| value >= lower) && max.map_or(true, |upper| value <= upper)
        }
        None => false,
    }
}

// == Helpers ==
fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter_map(|c| match c {
            ',' | '*' => None,
            '₹' => Some(' '),
            other => Some(other),
        })
        .collect();

    let spaced = DIGIT_UNIT_RE.replace_all(&stripped, "$1 $2");
    let spaced = UNIT_DIGIT_RE.replace_all(&spaced, "$1 $2");
    let cleaned = CURRENCY_WORD_RE.replace_all(&spaced, " ");
    let cleaned = FILLER_RE.replace_all(&cleaned, " ");
    let canonical = CRORE_WORD_RE.replace_all(&cleaned, "crore");
    LAKH_WORD_RE.replace_all(&canonical, "lakh").into_owned()
}

fn capture_amount(caps: &regex::Captures, index: usize) -> Option<f64> {
    caps.get(index)?.as_str().parse::<f64>().ok()
}

fn to_rupees(value: f64) -> u64 {
    value.round() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crore_with_filler_words() {
        assert_eq!(parse_price("2.2 Crore Onwards"), Some(22_000_000));
    }

    #[test]
    fn test_parse_combined_crore_and_lakh() {
        assert_eq!(parse_price("₹4 Crore 80 Lakhs"), Some(48_000_000));
    }

    #[test]
    fn test_parse_combined_with_and_keyword() {
        assert_eq!(parse_price("1 Crore and 50 Lakhs"), Some(15_000_000));
    }

    #[test]
    fn test_parse_abbreviated_crore() {
        assert_eq!(parse_price("2 Cr"), Some(20_000_000));
    }

    #[test]
    fn test_parse_glued_unit() {
        assert_eq!(parse_price("2Cr"), Some(20_000_000));
        assert_eq!(parse_price("4.5lakh"), Some(450_000));
    }

    #[test]
    fn test_parse_lakh_variants() {
        assert_eq!(parse_price("85 Lakhs"), Some(8_500_000));
        assert_eq!(parse_price("85 Lakh"), Some(8_500_000));
        assert_eq!(parse_price("45 Lac"), Some(4_500_000));
        assert_eq!(parse_price("45 Lacs"), Some(4_500_000));
    }

    #[test]
    fn test_parse_currency_markers() {
        assert_eq!(parse_price("Rs. 85 Lakhs Only"), Some(8_500_000));
        assert_eq!(parse_price("INR 2 Crore"), Some(20_000_000));
    }

    #[test]
    fn test_parse_filler_words() {
        assert_eq!(parse_price("Starting from ₹38 Lacs"), Some(3_800_000));
        assert_eq!(parse_price("Approx. 2.5 Cr*"), Some(25_000_000));
    }

    #[test]
    fn test_parse_bare_number_with_separators() {
        assert_eq!(parse_price("₹45,00,000"), Some(4_500_000));
        assert_eq!(parse_price("7500000"), Some(7_500_000));
    }

    #[test]
    fn test_parse_number_embedded_in_text_is_not_a_price() {
        assert_eq!(parse_price("Tower 2"), None);
        assert_eq!(parse_price("Possession in 2026"), None);
    }

    #[test]
    fn test_parse_rounds_to_nearest_rupee() {
        assert_eq!(parse_price("1.23456789 Crore"), Some(12_345_679));
    }

    #[test]
    fn test_parse_price_on_request() {
        assert_eq!(parse_price("Price on Request"), None);
    }

    #[test]
    fn test_parse_unparseable_text() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("Call for pricing details"), None);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let amount = parse_price("2 Cr");

        assert!(price_within_range(amount, Some(10_000_000), Some(30_000_000)));
        assert!(!price_within_range(amount, Some(20_000_001), Some(30_000_000)));
        assert!(price_within_range(amount, Some(20_000_000), Some(20_000_000)));
    }

    #[test]
    fn test_range_absent_bound_is_unconstrained() {
        let amount = Some(5_000_000);

        assert!(price_within_range(amount, None, None));
        assert!(price_within_range(amount, Some(1_000_000), None));
        assert!(price_within_range(amount, None, Some(10_000_000)));
        assert!(!price_within_range(amount, Some(6_000_000), None));
        assert!(!price_within_range(amount, None, Some(4_000_000)));
    }

    #[test]
    fn test_range_absent_amount_never_matches() {
        assert!(!price_within_range(None, None, None));
        assert!(!price_within_range(None, Some(0), Some(u64::MAX)));
    }
}
