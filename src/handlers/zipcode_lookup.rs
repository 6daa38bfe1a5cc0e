use axum::{
    extract::{Path, Query},
    http::Uri,
};
use std::collections::HashMap;
use tracing::debug;

use crate::{
    libraries::zipcode_check::{extract_candidate, lookup, ZIPCODE_PARAM},
    models::LookupResult,
};

/// Look up the jurisdiction for a zipcode
///
/// Bound to both `/zipcode-lookup?zipcode=<z>` and `/zipcodes/lookup/<z>`.
/// The candidate comes from the query string first, then the decoded
/// `:zipcode` capture, then the last path segment, so both bindings answer
/// identically.
pub async fn lookup_zipcode(
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    captured: Option<Path<String>>,
) -> LookupResult {
    let request = extract_candidate(
        params.get(ZIPCODE_PARAM).map(String::as_str),
        captured.as_ref().map(|Path(segment)| segment.as_str()),
        uri.path(),
    );
    debug!("Zipcode lookup candidate: {:?}", request.raw_input);

    lookup(&request)
}
