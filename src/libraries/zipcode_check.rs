use regex::Regex;
use std::sync::LazyLock;

use crate::models::{LookupError, LookupRequest, LookupResult};

/// Query parameter carrying the candidate zipcode
pub const ZIPCODE_PARAM: &str = "zipcode";

// ASCII digits only; `\d` would also match other Unicode digits
static ZIPCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("zipcode pattern is a valid regex"));

/// Pick the candidate zipcode for a request.
///
/// The query parameter wins when present and non-empty. Otherwise the
/// percent-decoded route capture is used, and without a capture the last
/// non-empty path segment. This keeps `/zipcode-lookup?zipcode=20901` and
/// `/zipcodes/lookup/20901` equivalent, encoded or not.
pub fn extract_candidate(
    query_value: Option<&str>,
    captured: Option<&str>,
    path: &str,
) -> LookupRequest {
    let raw_input = query_value
        .filter(|value| !value.is_empty())
        .or(captured)
        .or_else(|| last_path_segment(path))
        .map(str::to_string);

    LookupRequest::new(raw_input)
}

fn last_path_segment(path: &str) -> Option<&str> {
    path.split('/').rfind(|segment| !segment.is_empty())
}

/// Check that a candidate is exactly five ASCII digits.
pub fn validate_zipcode(candidate: Option<&str>) -> Result<String, LookupError> {
    match candidate {
        Some(zipcode) if ZIPCODE_PATTERN.is_match(zipcode) => Ok(zipcode.to_string()),
        _ => Err(LookupError::InvalidFormat),
    }
}

/// Classify a lookup request. Every valid zipcode maps to Maryland.
pub fn lookup(request: &LookupRequest) -> LookupResult {
    validate_zipcode(request.raw_input.as_deref()).into()
}
