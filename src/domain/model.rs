use serde::{Deserialize, Serialize};

pub const MENU_ID: &str = "send-to-openclaw";
pub const SEND_SELECTION_COMMAND: &str = "send-selection";
pub const UNTITLED: &str = "Untitled";
pub const GOOGLE_DOC_TITLE: &str = "Google Doc";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub auth_token: String,
}

impl Settings {
    pub fn has_endpoint(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedContent {
    pub url: String,
    pub title: String,
    pub content: String,
    pub selection: String,
}

/// Body of the outbound webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub url: String,
    pub title: String,
    pub content: String,
    pub selection: String,
    pub message: String,
    pub timestamp: String,
}

/// A page as the host hands it over: address, tab title, and optionally a
/// snapshot of its document and the live text selection.
#[derive(Debug, Clone, Default)]
pub struct PageTarget {
    pub url: String,
    pub title: Option<String>,
    pub html: Option<String>,
    pub selection: String,
}

impl PageTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = selection.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionRequest {
    PageContent,
    Selection,
    GoogleDocExport { doc_id: String },
}

impl ExtractionRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ExtractionRequest::PageContent => "page_content",
            ExtractionRequest::Selection => "selection",
            ExtractionRequest::GoogleDocExport { .. } => "google_doc_export",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionResult {
    Page(CapturedContent),
    Selection {
        url: String,
        title: String,
        selection: String,
    },
    DocText {
        text: String,
    },
    Failed {
        error: String,
    },
}

impl ExtractionResult {
    pub fn failed(error: impl std::fmt::Display) -> Self {
        ExtractionResult::Failed {
            error: error.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExtractionResult::Page(_) => "page",
            ExtractionResult::Selection { .. } => "selection",
            ExtractionResult::DocText { .. } => "doc_text",
            ExtractionResult::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Skipped,
    Delivered { status: u16 },
}

/// What the host should do after a shortcut capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    OpenComposer,
}
