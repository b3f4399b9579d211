//! Configuration for travel service module

use serde::{Deserialize, Serialize};

/// Travel service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size applied when a listing omits `limit`
    #[serde(default = "default_limit")]
    pub default_limit: i64,

    /// Rows skipped when a listing omits `offset`
    #[serde(default)]
    pub default_offset: i64,

    /// Prefix of every REST route
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_offset: 0,
            base_path: default_base_path(),
        }
    }
}

fn default_limit() -> i64 {
    10
}

fn default_base_path() -> String {
    "/api/v1".to_string()
}
