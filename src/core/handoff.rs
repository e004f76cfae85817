use crate::domain::model::CapturedContent;
use tokio::sync::Mutex;

/// Holds one captured item between the shortcut trigger and the follow-up
/// step. Writing replaces any previous value; reading clears the slot.
#[derive(Debug, Default)]
pub struct HandoffSlot {
    slot: Mutex<Option<CapturedContent>>,
}

impl HandoffSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, captured: CapturedContent) {
        *self.slot.lock().await = Some(captured);
    }

    pub async fn take(&self) -> Option<CapturedContent> {
        self.slot.lock().await.take()
    }

    pub async fn clear(&self) {
        self.slot.lock().await.take();
    }

    pub async fn is_empty(&self) -> bool {
        self.slot.lock().await.is_none()
    }
}
