//! One-time notifications carried to the next rendered view.

use std::collections::HashMap;

use crm_core::page_props::Flash;
use crm_core::types::DbId;
use tokio::sync::RwLock;

/// Holds at most one pending [`Flash`] per user. A newer message replaces
/// an unread one; reading removes it.
pub struct FlashStore {
    pending: RwLock<HashMap<DbId, Flash>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self {
            pending: RwLock::new(HashMap::new()),
        }
    }

    /// Queue a message for `user_id`'s next page render.
    pub async fn put(&self, user_id: DbId, flash: Flash) {
        self.pending.write().await.insert(user_id, flash);
    }

    /// Remove and return the pending message for `user_id`, if any.
    pub async fn take(&self, user_id: DbId) -> Option<Flash> {
        self.pending.write().await.remove(&user_id)
    }

    /// Number of users with an unread message.
    pub async fn len(&self) -> usize {
        self.pending.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::new()
    }
}
