use thiserror::Error;

/// Failure of a single scoring rule or of the validation that precedes scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A required field is missing, empty, or outside its allowed range.
    #[error("{field} {reason}")]
    Validation { field: String, reason: String },

    /// A field is present but cannot be interpreted.
    #[error("Invalid {field} format: '{value}'")]
    Parse { field: String, value: String },
}

impl ScoringError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: "cannot be null or empty".to_string(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("No record found for id '{id}'")]
    NotFound { id: String },

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl ProcessingError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = ScoringError::missing("purchaseTime");
        assert_eq!(err.to_string(), "purchaseTime cannot be null or empty");
    }

    #[test]
    fn test_parse_message_names_field_and_value() {
        let err = ScoringError::parse("purchaseDate", "13/45/2022");
        assert_eq!(err.to_string(), "Invalid purchaseDate format: '13/45/2022'");
    }

    #[test]
    fn test_scoring_error_is_transparent() {
        let err: ProcessingError = ScoringError::missing("retailer").into();
        assert_eq!(err.to_string(), "retailer cannot be null or empty");
    }
}
