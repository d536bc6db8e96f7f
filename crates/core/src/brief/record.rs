//! Brief record builder: validated fields into a persistence-ready record.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::validate::ValidBrief;

/// Options count used when the submitted value is absent or unusable.
pub const DEFAULT_OPTIONS: i16 = 3;

/// How many curated options the visitor may ask for.
pub const ALLOWED_OPTIONS: &[i16] = &[3, 5, 10];

/// How many curated options to send back. Always one of [`ALLOWED_OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i16")]
pub struct OptionCount(i16);

impl OptionCount {
    /// Parse a raw options value.
    ///
    /// All-digit strings are read as integers; anything else, and any integer
    /// outside [`ALLOWED_OPTIONS`], falls back to [`DEFAULT_OPTIONS`].
    pub fn parse(raw: &str) -> Self {
        let parsed = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse::<i16>().ok()
        } else {
            None
        };

        match parsed {
            Some(n) if ALLOWED_OPTIONS.contains(&n) => Self(n),
            _ => Self(DEFAULT_OPTIONS),
        }
    }

    pub fn get(self) -> i16 {
        self.0
    }
}

impl Default for OptionCount {
    fn default() -> Self {
        Self(DEFAULT_OPTIONS)
    }
}

impl From<OptionCount> for i16 {
    fn from(value: OptionCount) -> Self {
        value.0
    }
}

/// A validated, normalized brief ready to be inserted.
///
/// Built only from a [`ValidBrief`]; the timestamp is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefRecord {
    pub name: String,
    pub email: String,
    pub product: String,
    pub budget: Option<f64>,
    pub style: String,
    pub brand: Option<String>,
    pub options: OptionCount,
}

impl BriefRecord {
    /// Budgets beyond +/- [`MAX_BUDGET`] are stored as `None`.
    pub fn build(valid: ValidBrief) -> Self {
        let fields = valid.into_fields();
        Self {
            budget: parse_budget(&fields.budget).filter(|v| v.abs() <= MAX_BUDGET),
            brand: (!fields.brand.is_empty()).then_some(fields.brand),
            options: OptionCount::parse(&fields.options),
            name: fields.name,
            email: fields.email,
            product: fields.product,
            style: fields.style,
        }
    }
}

/// Largest budget the `NUMERIC(12,2)` column holds.
pub const MAX_BUDGET: f64 = 9_999_999_999.99;

/// Plain decimal literal with an optional sign and exponent. Keeps out
/// `inf`, `NaN` and the like that `f64::from_str` would accept.
static NUMERIC_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid regex")
});

/// Read a budget typed with either decimal separator.
///
/// Every `,` becomes `.`; blank or non-numeric input yields `None`. Never
/// fails.
pub fn parse_budget(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    if !NUMERIC_LITERAL_RE.is_match(&normalized) {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::normalize::NormalizedBrief;
    use crate::brief::validate::validate;

    fn valid(budget: &str, brand: &str, options: &str) -> ValidBrief {
        validate(NormalizedBrief {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            product: "perfume".into(),
            budget: budget.into(),
            style: "uso casual".into(),
            brand: brand.into(),
            options: options.into(),
        })
        .unwrap()
    }

    // -- Budget ----------------------------------------------------------

    #[test]
    fn comma_decimal_budget_is_read() {
        assert_eq!(parse_budget("99,90"), Some(99.90));
        assert_eq!(parse_budget("150,00"), Some(150.0));
    }

    #[test]
    fn dot_decimal_and_integer_budgets_are_read() {
        assert_eq!(parse_budget("99.90"), Some(99.90));
        assert_eq!(parse_budget("200"), Some(200.0));
        assert_eq!(parse_budget(".5"), Some(0.5));
        assert_eq!(parse_budget("1e3"), Some(1000.0));
    }

    #[test]
    fn blank_budget_is_null() {
        assert_eq!(parse_budget(""), None);
    }

    #[test]
    fn non_numeric_budget_is_null() {
        for raw in ["abc", "R$ 100", "1.000,50", "12abc", "-", ".", "1e", "inf", "NaN", "infinity"] {
            assert_eq!(parse_budget(raw), None, "'{raw}' should not parse");
        }
    }

    #[test]
    fn overflowing_literal_is_null() {
        assert_eq!(parse_budget("1e400"), None);
    }

    // -- Options ---------------------------------------------------------

    #[test]
    fn allowed_options_map_to_themselves() {
        assert_eq!(OptionCount::parse("3").get(), 3);
        assert_eq!(OptionCount::parse("5").get(), 5);
        assert_eq!(OptionCount::parse("10").get(), 10);
    }

    #[test]
    fn other_options_fall_back_to_three() {
        for raw in ["", "7", "abc", "0", "-5", "5.0", "99999999", "010a"] {
            assert_eq!(OptionCount::parse(raw).get(), 3, "'{raw}' should default");
        }
    }

    #[test]
    fn leading_zero_digits_are_still_digits() {
        assert_eq!(OptionCount::parse("05").get(), 5);
    }

    #[test]
    fn option_parsing_is_idempotent() {
        for raw in ["3", "5", "10", "7", ""] {
            let once = OptionCount::parse(raw);
            assert_eq!(OptionCount::parse(&once.get().to_string()), once);
        }
    }

    // -- Record ----------------------------------------------------------

    #[test]
    fn record_applies_defaulting_rules() {
        let record = BriefRecord::build(valid("150,00", "", "5"));
        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.product, "perfume");
        assert_eq!(record.budget, Some(150.0));
        assert_eq!(record.style, "uso casual");
        assert_eq!(record.brand, None);
        assert_eq!(record.options.get(), 5);
    }

    #[test]
    fn budget_beyond_column_range_is_stored_as_null() {
        let at_limit = BriefRecord::build(valid("9999999999,99", "", "3"));
        assert_eq!(at_limit.budget, Some(MAX_BUDGET));

        for raw in ["1e10", "12345678901,00", "-10000000000"] {
            let record = BriefRecord::build(valid(raw, "", "3"));
            assert_eq!(record.budget, None, "'{raw}' should be stored as null");
        }
    }

    #[test]
    fn non_empty_brand_is_kept() {
        let record = BriefRecord::build(valid("", "Natura", "3"));
        assert_eq!(record.brand.as_deref(), Some("Natura"));
        assert_eq!(record.budget, None);
    }

    #[test]
    fn record_serializes_options_as_integer() {
        let record = BriefRecord::build(valid("", "", "10"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["options"], 10);
        assert!(json["brand"].is_null());
    }
}
