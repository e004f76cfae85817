use crate::core::dispatcher::PayloadDispatcher;
use crate::core::handoff::HandoffSlot;
use crate::core::resolver::ContentResolver;
use crate::domain::model::{
    CapturedContent, DispatchOutcome, FollowUp, PageTarget, MENU_ID, SEND_SELECTION_COMMAND,
};
use crate::domain::ports::{PageAgent, SettingsStore};
use crate::utils::error::Result;
use tracing::{debug, info, instrument};

/// Entry points for the host triggers. Each call is an independent chain;
/// only the handoff slot is shared between calls.
pub struct Relay<S: SettingsStore, A: PageAgent> {
    settings: S,
    resolver: ContentResolver<A>,
    dispatcher: PayloadDispatcher,
    handoff: HandoffSlot,
}

impl<S: SettingsStore, A: PageAgent> Relay<S, A> {
    pub fn new(settings: S, agent: A) -> Self {
        Self {
            settings,
            resolver: ContentResolver::new(agent),
            dispatcher: PayloadDispatcher::new(),
            handoff: HandoffSlot::new(),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: PayloadDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn settings_store(&self) -> &S {
        &self.settings
    }

    /// Read settings, resolve the page, deliver. Nothing is resolved when no
    /// endpoint is configured.
    #[instrument(skip(self, target, selection_override), fields(url = %target.url))]
    pub async fn send_payload(
        &self,
        target: &PageTarget,
        selection_override: &str,
    ) -> Result<DispatchOutcome> {
        let settings = self.settings.load().await?;
        if !settings.has_endpoint() {
            debug!("No webhook configured, nothing to do");
            return Ok(DispatchOutcome::Skipped);
        }

        let captured = self.resolver.resolve(target, selection_override).await?;
        self.dispatcher.dispatch(&settings, &captured).await
    }

    /// Context-menu click. Failures are dropped.
    pub async fn on_context_menu(
        &self,
        menu_item_id: &str,
        target: &PageTarget,
        selection_text: &str,
    ) {
        if menu_item_id != MENU_ID {
            return;
        }
        match self.send_payload(target, selection_text).await {
            Ok(outcome) => debug!("Context-menu send finished: {:?}", outcome),
            Err(e) => debug!("Context-menu send dropped: {}", e),
        }
    }

    /// Keyboard shortcut. Captures into the handoff slot and always asks the
    /// host to open the composer, even when capture fails.
    pub async fn on_command(&self, command: &str, target: &PageTarget) -> Option<FollowUp> {
        if command != SEND_SELECTION_COMMAND {
            return None;
        }

        self.handoff.clear().await;
        match self.resolver.capture_selection(target).await {
            Ok(captured) => {
                info!("Captured {} for follow-up", captured.url);
                self.handoff.put(captured).await;
            }
            Err(e) => debug!("Shortcut capture dropped: {}", e),
        }
        Some(FollowUp::OpenComposer)
    }

    /// Follow-up read; clears the slot.
    pub async fn take_captured(&self) -> Option<CapturedContent> {
        self.handoff.take().await
    }

    pub async fn send_captured(&self, captured: &CapturedContent) -> Result<DispatchOutcome> {
        let settings = self.settings.load().await?;
        self.dispatcher.dispatch(&settings, captured).await
    }
}
