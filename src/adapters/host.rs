use crate::core::ResumeHost;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

pub const SITE_ORIGIN_VAR: &str = "PORTFOLIO_SITE_ORIGIN";
pub const DEFAULT_SITE_ORIGIN: &str = "https://prashant-java-dev.github.io";

/// Host for running outside a browser: relative asset paths are resolved
/// against the site origin, viewing goes through the platform opener and
/// saving downloads into a local directory.
#[derive(Debug, Clone)]
pub struct DesktopHost {
    site_origin: Url,
    download_dir: PathBuf,
    opener: Vec<String>,
    client: Client,
}

impl DesktopHost {
    pub fn new(site_origin: Url, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_origin,
            download_dir: download_dir.into(),
            opener: platform_opener(),
            client: Client::new(),
        }
    }

    pub fn from_env(download_dir: impl Into<PathBuf>) -> Result<Self> {
        let origin = env::var(SITE_ORIGIN_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_ORIGIN.to_string());
        Ok(Self::new(Url::parse(&origin)?, download_dir))
    }

    /// Replace the command used to open URLs. The URL is appended as the
    /// last argument.
    pub fn with_opener(mut self, program: impl Into<String>, args: &[&str]) -> Self {
        let mut opener = vec![program.into()];
        opener.extend(args.iter().map(|a| a.to_string()));
        self.opener = opener;
        self
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn resolve(&self, target: &str) -> Result<Url> {
        match Url::parse(target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.site_origin.join(target)?),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn try_open(&self, target: &str) -> Result<()> {
        let url = self.resolve(target)?;
        let (program, args) = self.opener.split_first().ok_or_else(|| GatewayError::HostError {
            message: "No opener command configured".to_string(),
        })?;

        tracing::debug!("Opening {} with {}", url, program);
        tokio::process::Command::new(program)
            .args(args)
            .arg(url.as_str())
            .spawn()
            .map_err(|e| GatewayError::HostError {
                message: format!("Failed to launch {}: {}", program, e),
            })?;
        Ok(())
    }

    pub async fn try_save(&self, target: &str, filename: &str) -> Result<PathBuf> {
        let url = self.resolve(target)?;
        tracing::debug!("Fetching {} for download", url);

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tokio::fs::create_dir_all(&self.download_dir).await?;
        let path = self.download_dir.join(filename);
        tokio::fs::write(&path, &bytes).await?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

#[async_trait]
impl ResumeHost for DesktopHost {
    async fn open(&self, target: &str) {
        if let Err(e) = self.try_open(target).await {
            tracing::warn!("Could not open {}: {}", target, e);
        }
    }

    async fn save(&self, target: &str, filename: &str) {
        if let Err(e) = self.try_save(target, filename).await {
            tracing::warn!("Could not save {} as {}: {}", target, filename, e);
        }
    }
}

fn platform_opener() -> Vec<String> {
    let opener: &[&str] = if cfg!(target_os = "windows") {
        &["cmd", "/C", "start", ""]
    } else if cfg!(target_os = "macos") {
        &["open"]
    } else {
        &["xdg-open"]
    };
    opener.iter().map(|s| s.to_string()).collect()
}
