use crate::core::extract::collapse_whitespace;
use crate::core::gdocs::google_doc_id;
use crate::domain::model::{
    CapturedContent, ExtractionRequest, ExtractionResult, PageTarget, GOOGLE_DOC_TITLE, UNTITLED,
};
use crate::domain::ports::PageAgent;
use crate::utils::error::{RelayError, Result};
use tracing::{debug, instrument};

/// Decides what text to send for a page: a Google Docs export when the
/// address names a document, heuristic page extraction otherwise.
pub struct ContentResolver<A: PageAgent> {
    agent: A,
}

impl<A: PageAgent> ContentResolver<A> {
    pub fn new(agent: A) -> Self {
        Self { agent }
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    #[instrument(skip(self, target, selection_override), fields(url = %target.url))]
    pub async fn resolve(
        &self,
        target: &PageTarget,
        selection_override: &str,
    ) -> Result<CapturedContent> {
        if let Some(doc_id) = google_doc_id(&target.url) {
            return self.resolve_google_doc(target, doc_id, GOOGLE_DOC_TITLE).await;
        }

        let request = ExtractionRequest::PageContent;
        let request_name = request.name();
        match self.agent.execute(target, request).await {
            ExtractionResult::Page(captured) => {
                let selection = if selection_override.is_empty() {
                    captured.selection.as_str()
                } else {
                    selection_override
                };
                let resolved = CapturedContent {
                    url: captured.url.clone(),
                    title: captured.title.clone(),
                    content: collapse_whitespace(&captured.content),
                    selection: collapse_whitespace(selection),
                };
                debug!(
                    "Resolved page content: {} chars, selection {} chars",
                    resolved.content.len(),
                    resolved.selection.len()
                );
                Ok(resolved)
            }
            ExtractionResult::Failed { error } => Err(RelayError::Extraction { message: error }),
            other => Err(unexpected(request_name, &other)),
        }
    }

    /// Shortcut capture: only the selection for ordinary pages, the full
    /// export for Google Docs. Doc captures keep the tab title as is, empty
    /// included.
    #[instrument(skip(self, target), fields(url = %target.url))]
    pub async fn capture_selection(&self, target: &PageTarget) -> Result<CapturedContent> {
        if let Some(doc_id) = google_doc_id(&target.url) {
            return self.resolve_google_doc(target, doc_id, "").await;
        }

        let request = ExtractionRequest::Selection;
        let request_name = request.name();
        match self.agent.execute(target, request).await {
            ExtractionResult::Selection {
                url,
                title,
                selection,
            } => Ok(CapturedContent {
                url,
                title: if title.is_empty() {
                    UNTITLED.to_string()
                } else {
                    title
                },
                content: String::new(),
                selection,
            }),
            ExtractionResult::Failed { error } => Err(RelayError::Extraction { message: error }),
            other => Err(unexpected(request_name, &other)),
        }
    }

    async fn resolve_google_doc(
        &self,
        target: &PageTarget,
        doc_id: String,
        default_title: &str,
    ) -> Result<CapturedContent> {
        debug!("Resolving Google Doc {}", doc_id);
        let request = ExtractionRequest::GoogleDocExport {
            doc_id: doc_id.clone(),
        };
        let request_name = request.name();
        match self.agent.execute(target, request).await {
            ExtractionResult::DocText { text } => Ok(CapturedContent {
                url: target.url.clone(),
                title: target
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| default_title.to_string()),
                content: trim_export(&text).to_string(),
                selection: String::new(),
            }),
            ExtractionResult::Failed { error } => Err(RelayError::DocumentFetch {
                doc_id,
                reason: error,
            }),
            other => Err(unexpected(request_name, &other)),
        }
    }
}

/// Exports start with a byte-order mark; strip it along with whitespace.
fn trim_export(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn unexpected(request: &str, found: &ExtractionResult) -> RelayError {
    RelayError::UnexpectedResult {
        request: request.to_string(),
        found: found.name().to_string(),
    }
}
