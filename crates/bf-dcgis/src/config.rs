use std::path::PathBuf;

use crate::constants::{DEFAULT_CACHE_PATH, DEFAULT_QUERY_URL};

/// Process-wide configuration, built once at startup and passed into the
/// catalog. The mapping-service key is carried through to the rendering
/// boundary unmodified and is never used by the data layer itself.
#[derive(Clone, Debug)]
pub struct Config {
    pub query_url: String,
    pub cache_path: PathBuf,
    pub maps_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_url: DEFAULT_QUERY_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            maps_api_key: None,
        }
    }
}
