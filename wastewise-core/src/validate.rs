//! Required-field checks that run before a request reaches any backend.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{IdentificationRequest, NotificationRequest, ReportDraft, ScanRequest};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Reasons a request payload is rejected.
pub enum ValidationError {
    /// The body is not a JSON object.
    #[error("Request body must be a JSON object")]
    NotAnObject,
    /// A required field is absent or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    /// Fields are present but could not be decoded into the request type.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Request payload with an ordered list of required fields.
pub trait Payload: DeserializeOwned {
    /// Wire names of the required fields, in the order they are checked.
    const REQUIRED: &'static [&'static str];
}

impl Payload for ReportDraft {
    const REQUIRED: &'static [&'static str] =
        &["title", "description", "category", "location", "priority"];
}

impl Payload for IdentificationRequest {
    const REQUIRED: &'static [&'static str] = &["image"];
}

impl Payload for ScanRequest {
    const REQUIRED: &'static [&'static str] = &["qrData"];
}

impl Payload for NotificationRequest {
    const REQUIRED: &'static [&'static str] = &["vehicleId", "notificationType"];
}

/// Whether a field value counts as provided.
///
/// Absent, `null`, `false`, zero and the empty string are treated as missing.
#[must_use]
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64().is_some_and(|float| float.abs() > 0.0),
        Some(Value::Bool(true) | Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Check every required field in order, stopping at the first missing one.
///
/// # Errors
///
/// Returns [`ValidationError::NotAnObject`] for non-object bodies and
/// [`ValidationError::MissingField`] naming the first missing field.
pub fn check_required(
    body: &Value,
    required: &'static [&'static str],
) -> Result<(), ValidationError> {
    let fields = body.as_object().ok_or(ValidationError::NotAnObject)?;

    match required
        .iter()
        .copied()
        .find(|field| !is_present(fields.get(*field)))
    {
        Some(missing) => Err(ValidationError::MissingField(missing)),
        None => Ok(()),
    }
}

/// Validate and decode a payload.
///
/// # Errors
///
/// Returns a [`ValidationError`] when a required field is missing or the body
/// does not decode into `T`.
pub fn parse<T: Payload>(body: Value) -> Result<T, ValidationError> {
    check_required(&body, T::REQUIRED)?;
    serde_json::from_value(body).map_err(|err| ValidationError::InvalidBody(err.to_string()))
}
