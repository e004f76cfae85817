use crate::core::extract::{extract_page_content, html_title};
use crate::core::gdocs::{export_url, DEFAULT_EXPORT_BASE};
use crate::domain::model::{ExtractionRequest, ExtractionResult, PageTarget, UNTITLED};
use crate::domain::ports::PageAgent;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Page-side agent backed by HTTP. Uses the target's document snapshot when
/// one is attached, otherwise fetches the page address.
#[derive(Debug, Clone)]
pub struct HttpPageAgent {
    client: Client,
    export_base: String,
}

impl Default for HttpPageAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPageAgent {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            export_base: DEFAULT_EXPORT_BASE.to_string(),
        }
    }

    pub fn with_export_base(mut self, base: impl Into<String>) -> Self {
        self.export_base = base.into();
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    async fn get_text(&self, url: &str) -> Result<String, String> {
        let response = self.client.get(url).send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }
        response.text().await.map_err(|e| e.to_string())
    }

    async fn document(&self, target: &PageTarget) -> Result<String, String> {
        match &target.html {
            Some(html) => Ok(html.clone()),
            None => {
                debug!("Fetching page {}", target.url);
                self.get_text(&target.url).await
            }
        }
    }

    async fn page_content(&self, target: &PageTarget) -> ExtractionResult {
        match self.document(target).await {
            Ok(html) => {
                let mut captured = extract_page_content(&html, &target.url, &target.selection);
                if captured.title == UNTITLED {
                    if let Some(title) = target.title.as_ref().filter(|t| !t.is_empty()) {
                        captured.title = title.clone();
                    }
                }
                ExtractionResult::Page(captured)
            }
            Err(error) => {
                warn!("Could not load page {}: {}", target.url, error);
                ExtractionResult::Failed { error }
            }
        }
    }

    async fn google_doc_text(&self, doc_id: &str) -> ExtractionResult {
        let url = match export_url(&self.export_base, doc_id) {
            Ok(url) => url,
            Err(e) => return ExtractionResult::failed(e),
        };
        debug!("Exporting Google Doc from {}", url);
        match self.get_text(url.as_str()).await {
            Ok(text) => ExtractionResult::DocText { text },
            Err(error) => ExtractionResult::Failed { error },
        }
    }
}

/// The document's own `<title>` when a snapshot is attached, else the tab
/// title. Empty when neither is known; the resolver maps that to "Untitled".
fn selection_title(target: &PageTarget) -> String {
    target
        .html
        .as_deref()
        .and_then(html_title)
        .or_else(|| target.title.clone())
        .unwrap_or_default()
}

#[async_trait]
impl PageAgent for HttpPageAgent {
    async fn execute(&self, target: &PageTarget, request: ExtractionRequest) -> ExtractionResult {
        match request {
            ExtractionRequest::PageContent => self.page_content(target).await,
            ExtractionRequest::Selection => ExtractionResult::Selection {
                url: target.url.clone(),
                title: selection_title(target),
                selection: target.selection.trim().to_string(),
            },
            ExtractionRequest::GoogleDocExport { doc_id } => self.google_doc_text(&doc_id).await,
        }
    }
}
