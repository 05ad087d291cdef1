use crate::{error::ConfigError, messages};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Outcome of one admin operation.
pub type AdminResult<T> = Result<T, AdminError>;

///
/// AdminError
///
/// Validation failures travel as data so a whole batch reports every
/// problem in one round-trip; configuration defects stay a separate,
/// fail-fast variant. The controller layer maps these onto HTTP statuses
/// (400 / 405 / 500).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AdminError {
    /// User-correctable input problems, all collected from one batch.
    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    /// The entity kind does not support this operation at all.
    #[error("operation not supported")]
    NotSupported,

    /// Hosting-service wiring defect; unrecoverable by the caller.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AdminError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![message.into()],
        }
    }

    #[must_use]
    pub fn invalid_subject() -> Self {
        Self::validation(messages::INVALID_SUBJECT)
    }

    /// The collected validation messages, empty for other variants.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Validation { errors } => errors,
            _ => &[],
        }
    }
}

impl From<Vec<String>> for AdminError {
    fn from(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }
}

///
/// QueryResult
///
/// One page of a filtered listing, echoing the paging window back to the
/// caller alongside the overall total.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub start: usize,
    pub count: usize,
    pub total: usize,
    pub filter: Option<String>,
    pub items: Vec<T>,
}

///
/// CreateResult
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResult {
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_surface_as_data() {
        let err = AdminError::from(vec!["foo".to_string(), "bar".to_string()]);
        assert_eq!(err.errors(), &["foo".to_string(), "bar".to_string()][..]);

        assert!(AdminError::NotSupported.errors().is_empty());
    }

    #[test]
    fn invalid_subject_uses_the_canonical_message() {
        assert_eq!(
            AdminError::invalid_subject().errors(),
            &[messages::INVALID_SUBJECT.to_string()][..]
        );
    }
}
