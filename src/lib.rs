pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::DesktopHost;
pub use config::{resolve_config, EnvironmentConfig};
pub use core::{contact::ContactService, gateway::ApiGateway, resume::ResumeService};
pub use domain::model::{ApiResponse, ContactMessage, ResumeAction, ResumeSource, RESUME_FILENAME};
pub use utils::error::{GatewayError, Result};
