use crate::messages;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required field (expected nome, email, projeto, mensagem)")]
    MissingRequiredField,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Nonce missing, forged or expired")]
    NonceInvalid,
}

impl CoreError {
    /// The end-user message (pt-BR) shown for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            CoreError::MissingRequiredField => messages::MISSING_REQUIRED_FIELDS,
            CoreError::InvalidEmail => messages::INVALID_EMAIL,
            CoreError::NonceInvalid => messages::NONCE_INVALID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_distinct() {
        let all = [
            CoreError::MissingRequiredField.user_message(),
            CoreError::InvalidEmail.user_message(),
            CoreError::NonceInvalid.user_message(),
        ];
        assert_ne!(all[0], all[1]);
        assert_ne!(all[1], all[2]);
        assert_ne!(all[0], all[2]);
    }

    #[test]
    fn missing_field_message_names_the_four_fields() {
        let msg = CoreError::MissingRequiredField.user_message();
        for field in ["nome", "e-mail", "comprar", "estilo"] {
            assert!(msg.contains(field), "message should mention '{field}'");
        }
    }
}
