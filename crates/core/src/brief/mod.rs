//! Brief intake pipeline shared by every submission host.
//!
//! ```text
//! BriefInput --normalize--> NormalizedBrief --validate--> ValidBrief --build--> BriefRecord
//! ```
//!
//! Validation short-circuits on the first failure; nothing downstream of a
//! failed validation ever runs, so a store never sees a partial brief.

pub mod normalize;
pub mod record;
pub mod validate;

pub use normalize::{normalize, BriefInput, NormalizedBrief};
pub use record::{BriefRecord, OptionCount, ALLOWED_OPTIONS, DEFAULT_OPTIONS};
pub use validate::{validate, ValidBrief};

use crate::error::CoreError;

/// Run normalize, validate and build over raw input.
pub fn prepare(input: &BriefInput) -> Result<BriefRecord, CoreError> {
    let valid = validate(normalize(input))?;
    Ok(BriefRecord::build(valid))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn submission() -> BriefInput {
        BriefInput {
            name: Some("Ana".into()),
            email: Some("ana@example.com".into()),
            product: Some("perfume".into()),
            budget: Some("150,00".into()),
            style: Some("uso casual".into()),
            brand: Some("".into()),
            options: Some("5".into()),
        }
    }

    #[test]
    fn full_submission_produces_expected_record() {
        let record = prepare(&submission()).unwrap();
        assert_eq!(
            record,
            BriefRecord {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                product: "perfume".into(),
                budget: Some(150.00),
                style: "uso casual".into(),
                brand: None,
                options: OptionCount::parse("5"),
            }
        );
    }

    #[test]
    fn whitespace_only_required_field_is_missing() {
        let input = BriefInput {
            style: Some("   \n ".into()),
            ..submission()
        };
        assert_matches!(prepare(&input), Err(CoreError::MissingRequiredField));
    }

    #[test]
    fn empty_input_is_missing_fields() {
        assert_matches!(
            prepare(&BriefInput::default()),
            Err(CoreError::MissingRequiredField)
        );
    }

    #[test]
    fn bad_email_is_rejected_after_trim() {
        let input = BriefInput {
            email: Some("  ana-at-example.com ".into()),
            ..submission()
        };
        assert_matches!(prepare(&input), Err(CoreError::InvalidEmail));
    }

    #[test]
    fn unusable_optional_fields_never_block_a_brief() {
        let input = BriefInput {
            budget: Some("a combinar".into()),
            options: Some("quantas quiser".into()),
            brand: None,
            ..submission()
        };
        let record = prepare(&input).unwrap();
        assert_eq!(record.budget, None);
        assert_eq!(record.options.get(), DEFAULT_OPTIONS);
        assert_eq!(record.brand, None);
    }
}
