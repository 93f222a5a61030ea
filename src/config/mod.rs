#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::domain::model::ResumeSource;
use crate::utils::validation::{validate_base_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;

pub const API_URL_VAR: &str = "PORTFOLIO_API_URL";
pub const BASE_PATH_VAR: &str = "PORTFOLIO_BASE_PATH";
pub const RESUME_SOURCE_VAR: &str = "PORTFOLIO_RESUME_SOURCE";

/// Production backend used when no API URL is configured.
pub const DEFAULT_API_URL: &str = "https://portfolio-system-production.up.railway.app/api";
pub const DEFAULT_BASE_PATH: &str = "/";

/// Runtime settings resolved once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub api_base_url: String,
    pub asset_base_path: String,
    #[serde(default)]
    pub resume_source: ResumeSource,
}

impl EnvironmentConfig {
    pub fn new(api_base_url: impl Into<String>, asset_base_path: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            asset_base_path: asset_base_path.into(),
            resume_source: ResumeSource::default(),
        }
    }

    pub fn with_resume_source(mut self, source: ResumeSource) -> Self {
        self.resume_source = source;
        self
    }

    /// Resolve from the process environment. Never fails.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// Unset and empty variables both take the fallback; any other value,
    /// whitespace included, is kept as given. A base path
    /// without a trailing `/` gets one so the resume filename can be
    /// appended directly.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let api_base_url = non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut asset_base_path =
            non_empty(BASE_PATH_VAR).unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        if !asset_base_path.ends_with('/') {
            asset_base_path.push('/');
        }

        let resume_source = non_empty(RESUME_SOURCE_VAR)
            .map(|v| ResumeSource::parse_lenient(&v))
            .unwrap_or_default();

        Self {
            api_base_url,
            asset_base_path,
            resume_source,
        }
    }
}

impl ConfigProvider for EnvironmentConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn asset_base_path(&self) -> &str {
        &self.asset_base_path
    }

    fn resume_source(&self) -> ResumeSource {
        self.resume_source
    }
}

impl Validate for EnvironmentConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_base_path("asset_base_path", &self.asset_base_path)?;

        tracing::debug!("Environment configuration validation passed");
        Ok(())
    }
}

/// Resolve the configuration once; callers keep the value and pass it on.
pub fn resolve_config() -> EnvironmentConfig {
    let config = EnvironmentConfig::from_env();
    tracing::debug!(
        api_base_url = %config.api_base_url,
        asset_base_path = %config.asset_base_path,
        resume_source = ?config.resume_source,
        "Resolved environment configuration"
    );
    config
}
