//! Concurrent storage for booking dialog sessions.
//!
//! [`DialogRegistry`] stores all live dialogs in a `HashMap` where each
//! entry is individually protected by a [`tokio::sync::RwLock`], so
//! commands on different dialogs never wait on each other.
//!
//! Sessions a client abandoned without `DELETE` are evicted on the next
//! insert once they have been idle longer than the registry's idle TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;

use super::DialogId;
use super::dialog_entry::DialogEntry;
use crate::error::AppError;

/// Central store for open booking dialogs.
///
/// # Concurrency
///
/// - The outer map lock is held only to look up, insert or remove.
/// - Commands on the same dialog are serialized by its entry lock.
/// - Eviction skips entries whose lock is currently held.
#[derive(Debug)]
pub struct DialogRegistry {
    dialogs: RwLock<HashMap<DialogId, Arc<RwLock<DialogEntry>>>>,
    idle_ttl: TimeDelta,
}

impl DialogRegistry {
    /// Idle time after which an untouched dialog may be evicted.
    pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

    /// Creates an empty registry with [`Self::DEFAULT_IDLE_TTL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_idle_ttl(Self::DEFAULT_IDLE_TTL)
    }

    /// Creates an empty registry evicting dialogs idle for longer than
    /// `idle_ttl`.
    #[must_use]
    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            dialogs: RwLock::new(HashMap::new()),
            idle_ttl: TimeDelta::from_std(idle_ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Inserts a new dialog entry, first evicting idle dialogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a dialog with the same ID already
    /// exists (should never happen with UUID v4).
    pub async fn insert(&self, entry: DialogEntry) -> Result<DialogId, AppError> {
        let dialog_id = entry.dialog_id;
        let mut map = self.dialogs.write().await;
        self.evict_idle(&mut map);
        if map.contains_key(&dialog_id) {
            return Err(AppError::Internal(format!(
                "dialog {dialog_id} already exists"
            )));
        }
        map.insert(dialog_id, Arc::new(RwLock::new(entry)));
        Ok(dialog_id)
    }

    /// Returns the entry behind its per-dialog lock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogNotFound`] if no dialog has the given ID.
    pub async fn get(&self, dialog_id: DialogId) -> Result<Arc<RwLock<DialogEntry>>, AppError> {
        let map = self.dialogs.read().await;
        map.get(&dialog_id)
            .map(Arc::clone)
            .ok_or(AppError::DialogNotFound(dialog_id))
    }

    /// Removes a dialog from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogNotFound`] if no dialog has the given ID.
    pub async fn remove(&self, dialog_id: DialogId) -> Result<(), AppError> {
        let mut map = self.dialogs.write().await;
        map.remove(&dialog_id)
            .map(|_| ())
            .ok_or(AppError::DialogNotFound(dialog_id))
    }

    fn evict_idle(&self, map: &mut HashMap<DialogId, Arc<RwLock<DialogEntry>>>) {
        let Some(cutoff) = Utc::now().checked_sub_signed(self.idle_ttl) else {
            return;
        };
        let before = map.len();
        map.retain(|_, entry| match entry.try_read() {
            Ok(entry) => entry.last_modified_at >= cutoff,
            Err(_) => true,
        });
        let evicted = before - map.len();
        if evicted > 0 {
            tracing::info!(evicted, live = map.len(), "idle booking dialogs evicted");
        }
    }

    /// Returns the number of live dialogs.
    pub async fn len(&self) -> usize {
        self.dialogs.read().await.len()
    }

    /// Returns `true` if no dialog is live.
    pub async fn is_empty(&self) -> bool {
        self.dialogs.read().await.is_empty()
    }
}

impl Default for DialogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::domain::booking_dialog::BookingDialog;

    fn make_entry() -> DialogEntry {
        let Some(event) = seed::events().into_iter().next() else {
            panic!("seed has events");
        };
        DialogEntry::new(DialogId::new(), BookingDialog::new(&event))
    }

    #[tokio::test]
    async fn insert_and_get() {
        let registry = DialogRegistry::new();
        let entry = make_entry();
        let id = entry.dialog_id;

        let inserted = registry.insert(entry).await;
        assert_eq!(inserted.ok(), Some(id));
        assert!(registry.get(id).await.is_ok());
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let registry = DialogRegistry::new();
        let result = registry.get(DialogId::new()).await;
        assert!(matches!(result, Err(AppError::DialogNotFound(_))));
    }

    #[tokio::test]
    async fn remove_drops_entry() {
        let registry = DialogRegistry::new();
        let entry = make_entry();
        let id = entry.dialog_id;
        let _ = registry.insert(entry).await;

        assert!(registry.remove(id).await.is_ok());
        assert!(registry.get(id).await.is_err());
        assert!(registry.remove(id).await.is_err());
    }

    fn stale_entry(idle_for: TimeDelta) -> DialogEntry {
        let mut entry = make_entry();
        entry.last_modified_at = Utc::now() - idle_for;
        entry
    }

    #[tokio::test]
    async fn insert_evicts_idle_dialogs() {
        let registry = DialogRegistry::with_idle_ttl(Duration::from_secs(60));
        let stale = stale_entry(TimeDelta::seconds(120));
        let stale_id = stale.dialog_id;
        let recent = stale_entry(TimeDelta::seconds(10));
        let recent_id = recent.dialog_id;
        let _ = registry.insert(stale).await;
        let _ = registry.insert(recent).await;

        let fresh = make_entry();
        let fresh_id = fresh.dialog_id;
        let _ = registry.insert(fresh).await;

        assert_eq!(registry.len().await, 2);
        assert!(matches!(
            registry.get(stale_id).await,
            Err(AppError::DialogNotFound(_))
        ));
        assert!(registry.get(recent_id).await.is_ok());
        assert!(registry.get(fresh_id).await.is_ok());
    }

    #[tokio::test]
    async fn dialogs_in_use_are_not_evicted() {
        let registry = DialogRegistry::with_idle_ttl(Duration::from_secs(60));
        let stale = stale_entry(TimeDelta::seconds(120));
        let stale_id = stale.dialog_id;
        let _ = registry.insert(stale).await;

        let Ok(entry_lock) = registry.get(stale_id).await else {
            panic!("entry was inserted");
        };
        let guard = entry_lock.write().await;
        let _ = registry.insert(make_entry()).await;
        drop(guard);

        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn abandoned_dialogs_do_not_accumulate() {
        let registry = DialogRegistry::with_idle_ttl(Duration::ZERO);
        for _ in 0..500 {
            let _ = registry.insert(stale_entry(TimeDelta::seconds(1))).await;
        }
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let registry = DialogRegistry::new();
        assert!(registry.is_empty().await);

        let _ = registry.insert(make_entry()).await;
        let _ = registry.insert(make_entry()).await;
        assert!(!registry.is_empty().await);
        assert_eq!(registry.len().await, 2);
    }
}
