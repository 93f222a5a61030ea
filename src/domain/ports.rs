use crate::domain::model::ResumeSource;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn asset_base_path(&self) -> &str;
    fn resume_source(&self) -> ResumeSource;
}

/// File-open and file-save capabilities of whatever hosts the client.
///
/// Neither call reports failure to the caller; an implementation logs
/// what went wrong and returns.
#[async_trait]
pub trait ResumeHost: Send + Sync {
    /// Open `target` in a new viewing context.
    async fn open(&self, target: &str);

    /// Save `target` locally under `filename`.
    async fn save(&self, target: &str, filename: &str);
}
