//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs deserialize permissively; handlers then parse them into
//! domain drafts while a [`FieldErrors`] accumulator records every failing
//! field. The resulting error carries
//! `{"errors": [{"field", "code", "message"}]}` in its details.

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::brand::BrandValidationError;
use crate::domain::feedback::FeedbackValidationError;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Domain validation failures that name the field they reject.
pub(crate) trait FieldFailure: std::fmt::Display {
    fn field(&self) -> &'static str;
    fn code(&self) -> &'static str;
}

impl FieldFailure for BrandValidationError {
    fn field(&self) -> &'static str {
        BrandValidationError::field(self)
    }

    fn code(&self) -> &'static str {
        BrandValidationError::code(self)
    }
}

impl FieldFailure for FeedbackValidationError {
    fn field(&self) -> &'static str {
        FeedbackValidationError::field(self)
    }

    fn code(&self) -> &'static str {
        FeedbackValidationError::code(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FieldError {
    field: String,
    code: &'static str,
    message: String,
}

/// Accumulates field-level failures across one request body.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: impl Into<String>, code: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            code,
            message: message.into(),
        });
    }

    /// Record a missing required field and return `None`.
    pub(crate) fn require<T>(&mut self, value: Option<T>, field: FieldName) -> Option<T> {
        if value.is_none() {
            let name = field.as_str();
            self.push(
                name,
                ErrorCode::MissingField.as_str(),
                format!("missing required field: {name}"),
            );
        }
        value
    }

    /// Record a domain validation failure and return `None`.
    pub(crate) fn capture<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: FieldFailure,
    {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err.field(), err.code(), err.to_string());
                None
            }
        }
    }

    /// Parse a UUID, recording a failure under `field`.
    pub(crate) fn uuid(&mut self, value: &str, field: FieldName) -> Option<Uuid> {
        match Uuid::parse_str(value.trim()) {
            Ok(uuid) => Some(uuid),
            Err(_) => {
                let name = field.as_str();
                self.push(
                    name,
                    ErrorCode::InvalidUuid.as_str(),
                    format!("{name} must be a valid UUID"),
                );
                None
            }
        }
    }

    /// Record a value the endpoint does not accept, such as `null` for a
    /// non-nullable field.
    pub(crate) fn invalid(&mut self, field: FieldName, message: impl Into<String>) {
        self.push(field.as_str(), ErrorCode::InvalidValue.as_str(), message);
    }

    /// Record a value that could not be decoded at a dotted JSON path such
    /// as `visualUniverse.palette[0]`.
    pub(crate) fn undecodable(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(path, ErrorCode::InvalidValue.as_str(), message);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing failed, otherwise an `invalid_request` error
    /// listing every failure in the order it was recorded.
    pub(crate) fn finish(self) -> Result<(), Error> {
        if self.is_empty() {
            return Ok(());
        }
        Err(self.into_error())
    }

    /// Build the `invalid_request` error regardless of how many failures
    /// were recorded.
    pub(crate) fn into_error(self) -> Error {
        let summary = self
            .0
            .iter()
            .map(|error| error.field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Error::invalid_request(format!("request failed validation: {summary}"))
            .with_details(json!({ "errors": self.0 }))
    }
}

/// Parse a path identifier into a UUID with the envelope used for bodies.
pub(crate) fn parse_path_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    let mut errors = FieldErrors::new();
    let parsed = errors.uuid(value, field);
    errors.finish()?;
    parsed.ok_or_else(|| Error::internal("UUID parse failed without a field error"))
}
