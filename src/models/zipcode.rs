use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// The only jurisdiction the service covers
pub const SUPPORTED_STATE: &str = "MD";

pub const INVALID_FORMAT_ERROR: &str = "Invalid zipcode format";

pub const INTERNAL_ERROR: &str = "Internal Server Error";

pub const STATEWIDE_MESSAGE: &str =
    "Showing Maryland state legislation. Local jurisdiction lookup is not yet available for this zipcode.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    pub raw_input: Option<String>,
}

impl LookupRequest {
    pub fn new(raw_input: Option<String>) -> Self {
        Self { raw_input }
    }
}

/// Successful lookup. The nullable fields are reserved for a per-zipcode
/// lookup and are always serialized as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipcodeLookup {
    pub zipcode: String,
    pub city: Option<String>,
    pub state: &'static str,
    pub neighborhoods: Option<Vec<String>>,
    pub jurisdiction: Option<String>,
    pub supported: bool,
    pub has_jurisdiction: bool,
    pub message: String,
}

impl ZipcodeLookup {
    pub fn statewide(zipcode: String) -> Self {
        Self {
            zipcode,
            city: None,
            state: SUPPORTED_STATE,
            neighborhoods: None,
            jurisdiction: None,
            supported: true,
            has_jurisdiction: false,
            message: STATEWIDE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZipcodeRejection {
    pub error: &'static str,
    pub supported: bool,
}

impl Default for ZipcodeRejection {
    fn default() -> Self {
        Self {
            error: INVALID_FORMAT_ERROR,
            supported: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupFailure {
    pub error: String,
    pub message: String,
}

impl LookupFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: INTERNAL_ERROR.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid zipcode format")]
    InvalidFormat,
}

/// Outcome of a zipcode lookup. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    Accepted(ZipcodeLookup),
    Rejected(ZipcodeRejection),
    Failed(LookupFailure),
}

impl LookupResult {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupResult::Accepted(_) => StatusCode::OK,
            LookupResult::Rejected(_) => StatusCode::BAD_REQUEST,
            LookupResult::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Result<String, LookupError>> for LookupResult {
    fn from(outcome: Result<String, LookupError>) -> Self {
        match outcome {
            Ok(zipcode) => LookupResult::Accepted(ZipcodeLookup::statewide(zipcode)),
            Err(LookupError::InvalidFormat) => LookupResult::Rejected(ZipcodeRejection::default()),
        }
    }
}

impl IntoResponse for LookupResult {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
