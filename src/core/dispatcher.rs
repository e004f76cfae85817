use crate::domain::model::{CapturedContent, DispatchOutcome, Payload, Settings};
use crate::utils::error::Result;
use chrono::{SecondsFormat, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Performs one webhook delivery per call. No retries, and the response is
/// never checked for success.
#[derive(Debug, Clone, Default)]
pub struct PayloadDispatcher {
    client: Client,
}

impl PayloadDispatcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn build_payload(captured: &CapturedContent) -> Payload {
        Payload {
            url: captured.url.clone(),
            title: captured.title.clone(),
            content: captured.content.clone(),
            selection: captured.selection.clone(),
            message: String::new(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    #[instrument(skip_all, fields(url = %captured.url))]
    pub async fn dispatch(
        &self,
        settings: &Settings,
        captured: &CapturedContent,
    ) -> Result<DispatchOutcome> {
        if !settings.has_endpoint() {
            debug!("No webhook configured, skipping delivery");
            return Ok(DispatchOutcome::Skipped);
        }

        let payload = Self::build_payload(captured);
        let body = serde_json::to_vec(&payload)?;

        let mut request = self
            .client
            .post(&settings.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if !settings.auth_token.is_empty() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", settings.auth_token));
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        info!("Webhook answered with status {}", status);
        Ok(DispatchOutcome::Delivered { status })
    }
}
