use crate::domain::a001_artifact::aggregate::Artifact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ID треда для старых клиентов без тредов (`/chat/history`)
pub const LEGACY_THREAD_ID: &str = "current";

/// Заголовок по умолчанию
pub const DEFAULT_THREAD_TITLE: &str = "New Chat";

/// Сколько символов первого сообщения пользователя идёт в заголовок
pub const DERIVED_TITLE_CHARS: usize = 30;

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Сообщение чата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Some(Utc::now()),
            artifacts: None,
        }
    }

    /// Создать сообщение пользователя
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Создать сообщение ассистента
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn with_artifacts(mut self, artifacts: Vec<Artifact>) -> Self {
        self.artifacts = if artifacts.is_empty() {
            None
        } else {
            Some(artifacts)
        };
        self
    }

    /// Артефакты в исходном порядке; пусто, если их нет
    pub fn artifacts(&self) -> &[Artifact] {
        self.artifacts.as_deref().unwrap_or(&[])
    }
}

/// Сводка треда в списке тенанта.
/// Сами сообщения хранятся отдельно.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadMeta {
    pub id: String,
    pub title: String,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
}

impl ThreadMeta {
    /// Пересчитать сводку по полному списку сообщений
    pub fn derive(
        id: impl Into<String>,
        messages: &[ChatMessage],
        title: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: derive_thread_title(title, messages),
            last_message: messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default(),
            timestamp: now,
        }
    }
}

/// Явный заголовок, иначе первые 30 символов первого сообщения пользователя,
/// иначе "New Chat".
pub fn derive_thread_title(explicit: Option<&str>, messages: &[ChatMessage]) -> String {
    if let Some(title) = explicit {
        return title.to_string();
    }

    let derived: String = messages
        .iter()
        .find(|m| m.role == ChatRole::User)
        .map(|m| m.content.chars().take(DERIVED_TITLE_CHARS).collect())
        .unwrap_or_default();

    if derived.is_empty() {
        DEFAULT_THREAD_TITLE.to_string()
    } else {
        derived
    }
}

/// POST /api/threads/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveThreadRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveThreadResponse {
    pub success: bool,
    pub thread: ThreadMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteThreadResponse {
    pub success: bool,
}

/// POST /api/chat/history (старые клиенты с одним тредом)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub success: bool,
}

/// POST /api/debug/seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub success: bool,
    pub threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: ChatRole, content: &str) -> ChatMessage {
        ChatMessage {
            id: String::new(),
            role,
            content: content.to_string(),
            timestamp: None,
            artifacts: None,
        }
    }

    #[test]
    fn test_title_prefers_explicit() {
        let messages = vec![msg(ChatRole::User, "Find me a taxi")];
        assert_eq!(derive_thread_title(Some("Ride home"), &messages), "Ride home");
    }

    #[test]
    fn test_title_from_first_user_message_is_truncated_by_chars() {
        let messages = vec![
            msg(ChatRole::Assistant, "Welcome!"),
            msg(ChatRole::User, "Где поесть рядом с вокзалом сегодня вечером?"),
        ];
        let title = derive_thread_title(None, &messages);
        assert_eq!(title.chars().count(), DERIVED_TITLE_CHARS);
        assert!(title.starts_with("Где поесть"));
    }

    #[test]
    fn test_title_falls_back_to_new_chat() {
        assert_eq!(derive_thread_title(None, &[]), DEFAULT_THREAD_TITLE);
        let only_assistant = vec![msg(ChatRole::Assistant, "Hello!")];
        assert_eq!(derive_thread_title(None, &only_assistant), DEFAULT_THREAD_TITLE);
        let empty_user = vec![msg(ChatRole::User, "")];
        assert_eq!(derive_thread_title(None, &empty_user), DEFAULT_THREAD_TITLE);
    }

    #[test]
    fn test_meta_derive_uses_last_message() {
        let messages = vec![msg(ChatRole::User, "Hi"), msg(ChatRole::Assistant, "Hello!")];
        let now = Utc::now();
        let meta = ThreadMeta::derive("t1", &messages, None, now);
        assert_eq!(meta.id, "t1");
        assert_eq!(meta.title, "Hi");
        assert_eq!(meta.last_message, "Hello!");
        assert_eq!(meta.timestamp, now);
    }

    #[test]
    fn test_meta_wire_format_is_camel_case() {
        let meta = ThreadMeta::derive("t1", &[msg(ChatRole::User, "Hi")], None, Utc::now());
        let wire = serde_json::to_value(&meta).unwrap();
        assert_eq!(wire["lastMessage"], "Hi");
        assert!(wire.get("last_message").is_none());
    }

    #[test]
    fn test_minimal_message_deserializes_and_round_trips() {
        let body = r#"[{"role":"user","content":"Hi"},{"role":"assistant","content":"Hello!"}]"#;
        let messages: Vec<ChatMessage> = serde_json::from_str(body).unwrap();
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert!(messages[0].artifacts().is_empty());

        let again: Vec<ChatMessage> =
            serde_json::from_str(&serde_json::to_string(&messages).unwrap()).unwrap();
        assert_eq!(again, messages);
    }

    #[test]
    fn test_with_empty_artifacts_stays_absent() {
        let message = ChatMessage::assistant("ok").with_artifacts(Vec::new());
        assert!(message.artifacts.is_none());
    }
}
