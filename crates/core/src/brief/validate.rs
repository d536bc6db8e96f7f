//! Brief validator. Fail-fast: the first broken rule is reported.

use validator::ValidateEmail;

use super::normalize::NormalizedBrief;
use crate::error::CoreError;

/// A normalized brief that passed [`validate`]. Only this module can build
/// one, so holding a `ValidBrief` proves the required fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBrief {
    fields: NormalizedBrief,
}

impl ValidBrief {
    pub fn fields(&self) -> &NormalizedBrief {
        &self.fields
    }

    pub(crate) fn into_fields(self) -> NormalizedBrief {
        self.fields
    }
}

/// Check required fields, then the email grammar.
///
/// Budget and options are never rejected here; the record builder
/// defaults them instead.
pub fn validate(fields: NormalizedBrief) -> Result<ValidBrief, CoreError> {
    let required = [&fields.name, &fields.email, &fields.product, &fields.style];
    if required.iter().any(|value| value.is_empty()) {
        return Err(CoreError::MissingRequiredField);
    }

    if !is_valid_email(&fields.email) {
        return Err(CoreError::InvalidEmail);
    }

    Ok(ValidBrief { fields })
}

/// `local-part@domain` where the domain carries at least one dot and does
/// not start or end with one.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    match email.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
