use crate::errors::ConfigError;
use reqwest::Url;
use std::env::{self, VarError};
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(env::var("BP_TRACKER_URL"))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => Self::with_base_url(&value),
            Err(VarError::NotPresent) => Self::with_base_url(DEFAULT_BASE_URL),
            Err(VarError::NotUnicode(_)) => {
                warn!("BP_TRACKER_URL is not valid unicode, using {DEFAULT_BASE_URL}");
                Self::with_base_url(DEFAULT_BASE_URL)
            }
        }
    }

    /// Relative endpoints join onto the base, so it always ends with a slash.
    pub fn with_base_url(value: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(value.trim()).map_err(|err| ConfigError::invalid_url(value, err))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }
}
