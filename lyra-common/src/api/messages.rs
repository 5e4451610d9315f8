//! Client-facing messages carried in the `msg` field of error payloads

pub const INVALID_PARAMETERS: &str = "Invalid parameters.";
pub const ARTIST_NOT_FOUND: &str = "Artist not found.";
pub const SONG_NOT_FOUND: &str = "Song not found.";
pub const SERVICE_UNAVAILABLE: &str =
    "This service is not available, please try again in a few minutes.";
pub const INTERNAL_SERVER_ERROR: &str = "An internal server error occurred.";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found.";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed.";
