use serde::{Deserialize, Serialize};

/// Filename of the resume, both on the static host and as the suggested
/// name for saved copies.
pub const RESUME_FILENAME: &str = "Prashant_Sharma_Software_Developer_Resume.pdf";

/// Contact form payload. Serialized as-is into the POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Wrapper the portfolio backend puts around every JSON reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Where resume requests are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSource {
    /// The PDF bundled with the static site, under the deployment base path.
    #[default]
    #[serde(rename = "static")]
    StaticAsset,
    /// The backend's `/resume/view` and `/resume/download` endpoints.
    Backend,
}

impl ResumeSource {
    /// Unknown values fall back to the static asset.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "backend" => ResumeSource::Backend,
            _ => ResumeSource::StaticAsset,
        }
    }
}

/// What the host is asked to do with the resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    View,
    Download,
}

/// Resolved location of the resume for one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    pub target: String,
    pub filename: &'static str,
}
