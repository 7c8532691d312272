use std::env;
use std::path::PathBuf;

use crate::error::BirdscoutError;

/// Application configuration loaded from environment variables.
///
/// Each mode loads only what it needs: report generation needs the eBird key
/// and region center, issue publishing needs the GitHub credentials. Fields
/// for the other mode are left empty rather than failing the run.
#[derive(Debug, Clone)]
pub struct Config {
    // eBird API
    pub ebird_api_key: String,

    // Issue tracker
    pub github_token: String,
    pub github_repository: String,

    // Region center for the API query window and the map
    pub center_lat: f64,
    pub center_lng: f64,

    // Sliding window
    pub num_days: u32,

    // Directories
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
}

impl Config {
    /// Config for the report-generation modes (generate, generate-map).
    pub fn generate_from_env() -> Result<Self, BirdscoutError> {
        Ok(Self {
            ebird_api_key: required_env("EBIRD_API_KEY")?,
            github_token: String::new(),
            github_repository: String::new(),
            center_lat: required_f64("CENTER_LAT")?,
            center_lng: required_f64("CENTER_LNG")?,
            num_days: num_days()?,
            data_dir: dir_from_env("DATA_DIR", "data"),
            export_dir: dir_from_env("EXPORT_DIR", "export"),
        })
    }

    /// Config for issue publishing (create-issue, issue-with-map).
    pub fn publish_from_env() -> Result<Self, BirdscoutError> {
        Ok(Self {
            ebird_api_key: String::new(),
            github_token: required_env("TOKEN")?,
            github_repository: required_env("GITHUB_REPOSITORY")?,
            center_lat: 0.0,
            center_lng: 0.0,
            num_days: num_days()?,
            data_dir: dir_from_env("DATA_DIR", "data"),
            export_dir: dir_from_env("EXPORT_DIR", "export"),
        })
    }

    /// Config for the taxonomy download tool.
    pub fn taxonomy_from_env() -> Result<Self, BirdscoutError> {
        Ok(Self {
            ebird_api_key: required_env("EBIRD_API_KEY")?,
            github_token: String::new(),
            github_repository: String::new(),
            center_lat: 0.0,
            center_lng: 0.0,
            num_days: num_days()?,
            data_dir: dir_from_env("DATA_DIR", "data"),
            export_dir: dir_from_env("EXPORT_DIR", "export"),
        })
    }
}

fn required_env(key: &str) -> Result<String, BirdscoutError> {
    env::var(key).map_err(|_| {
        BirdscoutError::Config(format!("{key} environment variable is required"))
    })
}

fn required_f64(key: &str) -> Result<f64, BirdscoutError> {
    required_env(key)?
        .parse()
        .map_err(|_| BirdscoutError::Config(format!("{key} must be a number")))
}

fn num_days() -> Result<u32, BirdscoutError> {
    match env::var("NUM_DAYS") {
        Ok(v) => v
            .parse()
            .map_err(|_| BirdscoutError::Config("NUM_DAYS must be a positive integer".into())),
        Err(_) => Ok(3),
    }
}

fn dir_from_env(key: &str, default: &str) -> PathBuf {
    PathBuf::from(env::var(key).unwrap_or_else(|_| default.to_string()))
}
