#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatatypeError {
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Invalid type for `{field}`: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("No such field `{field}` on {record}")]
    UndeclaredField { record: &'static str, field: String },
}

impl DatatypeError {
    pub(crate) fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        let err = Self::InvalidValue {
            field,
            reason: reason.into(),
        };
        tracing::debug!(%err, "rejected field value");
        err
    }

    pub(crate) fn invalid_type(field: &'static str, expected: &'static str) -> Self {
        let err = Self::InvalidType { field, expected };
        tracing::debug!(%err, "rejected field type");
        err
    }

    pub(crate) fn undeclared(record: &'static str, field: &str) -> Self {
        let err = Self::UndeclaredField {
            record,
            field: field.to_string(),
        };
        tracing::debug!(%err, "undeclared field");
        err
    }
}

pub type Result<T> = std::result::Result<T, DatatypeError>;
