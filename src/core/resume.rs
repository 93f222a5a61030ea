use crate::core::{ConfigProvider, ResumeHost};
use crate::domain::model::{ResumeAction, ResumeAsset, ResumeSource, RESUME_FILENAME};

/// Resume delivery: resolves where the PDF lives and hands it to the host.
pub struct ResumeService<'a, C: ConfigProvider, H: ResumeHost> {
    config: &'a C,
    host: H,
}

impl<'a, C: ConfigProvider, H: ResumeHost> ResumeService<'a, C, H> {
    pub fn new(config: &'a C, host: H) -> Self {
        Self { config, host }
    }

    /// Path of the PDF on the static host: base path plus filename.
    pub fn static_path(&self) -> String {
        format!("{}{}", self.config.asset_base_path(), RESUME_FILENAME)
    }

    pub fn resolve(&self, action: ResumeAction) -> ResumeAsset {
        let target = match self.config.resume_source() {
            ResumeSource::StaticAsset => self.static_path(),
            ResumeSource::Backend => {
                let endpoint = match action {
                    ResumeAction::View => "view",
                    ResumeAction::Download => "download",
                };
                format!(
                    "{}/resume/{}",
                    self.config.api_base_url().trim_end_matches('/'),
                    endpoint
                )
            }
        };

        ResumeAsset {
            target,
            filename: RESUME_FILENAME,
        }
    }

    /// Open the resume in a new viewing context.
    pub async fn view_resume(&self) {
        let asset = self.resolve(ResumeAction::View);
        tracing::debug!("Opening resume at {}", asset.target);
        self.host.open(&asset.target).await;
    }

    /// Ask the host to save the resume under its canonical filename.
    pub async fn download_resume(&self) {
        let asset = self.resolve(ResumeAction::Download);
        tracing::debug!("Saving resume from {} as {}", asset.target, asset.filename);
        self.host.save(&asset.target, asset.filename).await;
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
