//! Conversation store: per-tenant thread metadata plus per-thread message bodies.
//!
//! Layout in the key-value store:
//! - `threads:{tenant}` holds the tenant's `ThreadMeta[]`
//! - `messages:{tenant}:{thread}` (or `messages:{thread}` in shared scope)
//!   holds the full `ChatMessage[]`
//!
//! A save writes the body first and the metadata second. The two writes are
//! not atomic together: a crash in between leaves a body without an updated
//! summary. Saves are last-writer-wins per thread, with no version check.

use chrono::Utc;
use contracts::domain::a002_chat_thread::aggregate::{ChatMessage, ThreadMeta};
use contracts::system::auth::Tenant;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::shared::kv::{KvError, KvStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("store backend error: {0}")]
    Backend(#[from] KvError),

    #[error("corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// How message-body keys are namespaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKeyScope {
    /// `messages:{tenant}:{thread}`: a thread body is only reachable by its tenant
    Tenant,
    /// `messages:{thread}`: any caller who knows the id can read the body
    Shared,
}

pub struct ConversationStore {
    kv: Arc<dyn KvStore>,
    timeout: Duration,
    scope: MessageKeyScope,
}

impl ConversationStore {
    pub fn new(kv: Arc<dyn KvStore>, timeout: Duration, scope: MessageKeyScope) -> Self {
        Self { kv, timeout, scope }
    }

    fn threads_key(tenant: &Tenant) -> String {
        format!("threads:{}", tenant)
    }

    fn messages_key(&self, tenant: &Tenant, thread_id: &str) -> String {
        match self.scope {
            MessageKeyScope::Tenant => format!("messages:{}:{}", tenant, thread_id),
            MessageKeyScope::Shared => format!("messages:{}", thread_id),
        }
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, KvError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout(self.timeout)),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let raw = self.bounded(self.kv.get(key)).await?;
        match raw {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    async fn write_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        self.bounded(self.kv.set(key, text)).await
    }

    async fn read_threads(&self, tenant: &Tenant) -> Result<Vec<ThreadMeta>, StoreError> {
        Ok(self
            .read_json::<Vec<ThreadMeta>>(&Self::threads_key(tenant))
            .await?
            .unwrap_or_default())
    }

    /// Thread summaries, most recently updated first
    pub async fn list_threads(&self, tenant: &Tenant) -> Result<Vec<ThreadMeta>, StoreError> {
        let mut threads = self.read_threads(tenant).await?;
        threads.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(threads)
    }

    /// Full message body; empty for an unknown thread
    pub async fn get_messages(
        &self,
        tenant: &Tenant,
        thread_id: &str,
    ) -> Result<Vec<ChatMessage>, StoreError> {
        let key = self.messages_key(tenant, thread_id);
        Ok(self
            .read_json::<Vec<ChatMessage>>(&key)
            .await?
            .unwrap_or_default())
    }

    /// Overwrite the body of `thread_id` and upsert its summary
    pub async fn save_thread(
        &self,
        tenant: &Tenant,
        thread_id: &str,
        messages: &[ChatMessage],
        title: Option<&str>,
    ) -> Result<ThreadMeta, StoreError> {
        self.write_json(&self.messages_key(tenant, thread_id), &messages)
            .await?;

        let meta = ThreadMeta::derive(thread_id, messages, title, Utc::now());

        let mut threads = self.read_threads(tenant).await?;
        match threads.iter_mut().find(|t| t.id == thread_id) {
            Some(existing) => *existing = meta.clone(),
            None => threads.insert(0, meta.clone()),
        }
        self.write_json(&Self::threads_key(tenant), &threads).await?;

        tracing::info!(
            "Saved thread {} for tenant {} ({} messages)",
            thread_id,
            tenant,
            messages.len()
        );
        Ok(meta)
    }

    /// Remove body and summary. Deleting an unknown thread succeeds.
    pub async fn delete_thread(&self, tenant: &Tenant, thread_id: &str) -> Result<(), StoreError> {
        let key = self.messages_key(tenant, thread_id);
        self.bounded(self.kv.delete(&key)).await?;

        let mut threads = self.read_threads(tenant).await?;
        let before = threads.len();
        threads.retain(|t| t.id != thread_id);
        if threads.len() != before {
            self.write_json(&Self::threads_key(tenant), &threads).await?;
        }

        tracing::info!("Deleted thread {} for tenant {}", thread_id, tenant);
        Ok(())
    }
}
