pub mod responses;
pub mod zipcode;

// Re-export commonly used types
pub use responses::{HealthResponse, NotFoundResponse, StatsSnapshot};
pub use zipcode::{
    LookupError, LookupFailure, LookupRequest, LookupResult, ZipcodeLookup, ZipcodeRejection,
};
