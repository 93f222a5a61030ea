use crate::domain::model::ApiResponse;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Contact request rejected ({status})")]
    Rejected {
        status: StatusCode,
        body: Option<ApiResponse<serde_json::Value>>,
        source: reqwest::Error,
    },

    #[error("Message delivered ({status}) but the reply could not be read: {source}")]
    UnreadableReply {
        status: StatusCode,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Host capability failed: {message}")]
    HostError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    /// The backend accepted the request; only its reply was unusable.
    Delivered,
    Configuration,
    Host,
    Internal,
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::ApiError(e) if e.is_status() => ErrorCategory::Backend,
            GatewayError::ApiError(_) => ErrorCategory::Network,
            GatewayError::Rejected { .. } => ErrorCategory::Backend,
            GatewayError::UnreadableReply { .. } => ErrorCategory::Delivered,
            GatewayError::UrlError(_)
            | GatewayError::ConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GatewayError::HostError { .. } | GatewayError::IoError(_) => ErrorCategory::Host,
            GatewayError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// Message suitable for showing next to a contact form.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::ApiError(e) => match e.status() {
                Some(status) => rejection_message(status, None),
                None => "Could not reach the contact server. Please try again later.".to_string(),
            },
            GatewayError::Rejected { status, body, .. } => rejection_message(*status, body.as_ref()),
            GatewayError::UnreadableReply { .. } => {
                "Your message was delivered, but the server reply could not be read.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// The transport error this failure carries, if any.
    pub fn as_transport(&self) -> Option<&reqwest::Error> {
        match self {
            GatewayError::ApiError(e) | GatewayError::Rejected { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

fn rejection_message(status: StatusCode, body: Option<&ApiResponse<serde_json::Value>>) -> String {
    let Some(body) = body else {
        return if status.is_client_error() {
            format!("The message was rejected ({}). Please check the form fields.", status)
        } else {
            format!("The server could not process the message ({}).", status)
        };
    };

    let mut text = body.message.clone();
    if let Some(serde_json::Value::Object(fields)) = &body.data {
        for (field, problem) in fields {
            let problem = problem
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| problem.to_string());
            text.push_str(&format!("\n  - {}: {}", field, problem));
        }
    }
    text
}
