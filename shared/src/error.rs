use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors from editing the tech stack list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TechStackError {
    #[error("the last tech stack entry cannot be removed")]
    LastEntry,
    #[error("tech stack index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A select value that is not one of the offered genders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender '{0}'")]
pub struct UnknownGender(pub String);

/// Errors from reformatting the date of birth
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("date of birth is empty")]
    Empty,
    #[error("'{input}' is not a YYYY-MM-DD date")]
    Unparseable { input: String },
    #[error("'{format}' is not a valid display format")]
    InvalidFormat { format: String },
}

/// Everything the form controller can refuse to do
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{} field(s) failed validation", .0.len())]
    Validation(ValidationErrors),
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error(transparent)]
    Collection(#[from] TechStackError),
}

impl FormError {
    /// Field errors carried by a validation failure, if this is one
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
