use crate::core::contact::ContactService;
use crate::core::resume::ResumeService;
use crate::core::{ConfigProvider, ResumeHost};
use crate::domain::model::{ApiResponse, ContactMessage, ResumeAction, ResumeAsset};
use crate::utils::error::Result;
use reqwest::{Client, Response};

/// Single entry point for UI callers: resume delivery and contact
/// submission over one shared configuration.
pub struct ApiGateway<'a, C: ConfigProvider, H: ResumeHost> {
    resume: ResumeService<'a, C, H>,
    contact: ContactService<'a, C>,
}

impl<'a, C: ConfigProvider, H: ResumeHost> ApiGateway<'a, C, H> {
    pub fn new(config: &'a C, host: H) -> Self {
        Self::with_client(config, host, Client::new())
    }

    pub fn with_client(config: &'a C, host: H, client: Client) -> Self {
        Self {
            resume: ResumeService::new(config, host),
            contact: ContactService::with_client(config, client),
        }
    }

    pub fn resume_asset(&self, action: ResumeAction) -> ResumeAsset {
        self.resume.resolve(action)
    }

    pub async fn view_resume(&self) {
        self.resume.view_resume().await
    }

    pub async fn download_resume(&self) {
        self.resume.download_resume().await
    }

    pub async fn send_message(&self, data: &ContactMessage) -> Result<Response> {
        self.contact.send_message(data).await
    }

    pub async fn send_and_read(
        &self,
        data: &ContactMessage,
    ) -> Result<ApiResponse<serde_json::Value>> {
        self.contact.send_and_read(data).await
    }

    pub fn host(&self) -> &H {
        self.resume.host()
    }

    #[deprecated(note = "use `resume_asset(ResumeAction::Download)` or `download_resume`")]
    pub fn legacy_resume_path(&self) -> String {
        self.resume.static_path()
    }

    #[deprecated(note = "use `send_message`")]
    pub async fn send_contact(&self, data: &ContactMessage) -> Result<Response> {
        self.send_message(data).await
    }
}
