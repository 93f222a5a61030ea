pub mod contact;
pub mod gateway;
pub mod resume;

pub use crate::domain::model::{ContactMessage, ResumeAsset};
pub use crate::domain::ports::{ConfigProvider, ResumeHost};
pub use crate::utils::error::Result;
