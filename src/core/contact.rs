use crate::core::ConfigProvider;
use crate::domain::model::{ApiResponse, ContactMessage};
use crate::utils::error::{GatewayError, Result};
use reqwest::{Client, Response};

pub struct ContactService<'a, C: ConfigProvider> {
    config: &'a C,
    client: Client,
}

impl<'a, C: ConfigProvider> ContactService<'a, C> {
    pub fn new(config: &'a C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &'a C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/contact", self.config.api_base_url().trim_end_matches('/'))
    }

    /// POST the message to the contact endpoint and return the response.
    ///
    /// Transport failures come back as `GatewayError::ApiError`. A
    /// non-success status becomes `GatewayError::Rejected`, which keeps the
    /// backend's envelope (field errors included) next to the original
    /// `reqwest::Error`. Nothing is retried.
    pub async fn send_message(&self, data: &ContactMessage) -> Result<Response> {
        let endpoint = self.endpoint();
        tracing::info!("Sending contact request from {} to {}", data.email, endpoint);

        let response = self
            .client
            .post(&endpoint)
            .json(data)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("Contact request failed: {}", e))?;

        let status = response.status();
        tracing::debug!("Contact response status: {}", status);

        if let Some(source) = response.error_for_status_ref().err() {
            let body = match response.text().await {
                Ok(text) => serde_json::from_str::<ApiResponse<serde_json::Value>>(&text).ok(),
                Err(e) => {
                    tracing::debug!("Could not read rejection body: {}", e);
                    None
                }
            };
            tracing::warn!("Contact request rejected: {}", source);
            return Err(GatewayError::Rejected {
                status,
                body,
                source,
            });
        }

        Ok(response)
    }

    /// Send the message and decode the backend's acknowledgement envelope.
    ///
    /// A reply that is not an envelope yields `GatewayError::UnreadableReply`:
    /// the message itself was accepted.
    pub async fn send_and_read(
        &self,
        data: &ContactMessage,
    ) -> Result<ApiResponse<serde_json::Value>> {
        let response = self.send_message(data).await?;
        let status = response.status();
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|source| {
            tracing::warn!("Contact reply ({}) is not an envelope: {}", status, source);
            GatewayError::UnreadableReply { status, source }
        })
    }
}
