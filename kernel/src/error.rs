use std::collections::BTreeMap;
use std::fmt::Display;

use error_stack::Context;

use crate::entity::MovieId;

#[derive(Debug)]
pub enum KernelError {
    Concurrency,
    Timeout,
    Internal,
    NotFound,
    Unauthorized,
    Forbidden,
    InvalidCredentials,
    InvalidIdentifier,
    Validation(ValidationErrors),
    RentalConflict(MovieId),
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Unauthorized => write!(f, "Not authorized"),
            KernelError::Forbidden => write!(f, "Insufficient permission"),
            KernelError::InvalidCredentials => write!(f, "Invalid credentials"),
            KernelError::InvalidIdentifier => write!(f, "Invalid identifier"),
            KernelError::Validation(errors) => write!(f, "Validation failed: {errors}"),
            KernelError::RentalConflict(id) => write!(f, "Movie already rented, id: {id}"),
        }
    }
}

impl Context for KernelError {}

/// Field name to message pairs collected while validating an input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> &BTreeMap<&'static str, String> {
        &self.0
    }

    /// Turns the collected errors into a failure, or succeeds when nothing was collected.
    pub fn into_result(self) -> error_stack::Result<(), KernelError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(error_stack::Report::new(KernelError::Validation(self)))
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}
