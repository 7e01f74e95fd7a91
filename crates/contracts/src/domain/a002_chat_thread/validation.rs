//! Проверка тела запроса на сохранение треда.
//!
//! Форму (`messages` как массив, роль, строковый content) гарантирует serde,
//! здесь только лимиты, которые serde не выразить.

use super::aggregate::{ChatHistoryRequest, ChatMessage, SaveThreadRequest};

pub const MAX_MESSAGES_PER_THREAD: usize = 2000;
pub const MAX_MESSAGE_CHARS: usize = 100_000;
pub const MAX_TITLE_CHARS: usize = 120;

impl SaveThreadRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_messages(&self.messages)?;

        if let Some(title) = &self.title {
            if title.chars().count() > MAX_TITLE_CHARS {
                return Err(format!(
                    "Title is longer than {} characters",
                    MAX_TITLE_CHARS
                ));
            }
        }

        Ok(())
    }

    /// Пустой заголовок считается отсутствующим
    pub fn normalized_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl ChatHistoryRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_messages(&self.messages)
    }
}

pub fn validate_messages(messages: &[ChatMessage]) -> Result<(), String> {
    if messages.is_empty() {
        return Err("Thread must contain at least one message".into());
    }
    if messages.len() > MAX_MESSAGES_PER_THREAD {
        return Err(format!(
            "Thread has {} messages, limit is {}",
            messages.len(),
            MAX_MESSAGES_PER_THREAD
        ));
    }

    for (idx, message) in messages.iter().enumerate() {
        if message.content.chars().count() > MAX_MESSAGE_CHARS {
            return Err(format!(
                "Message #{} is longer than {} characters",
                idx, MAX_MESSAGE_CHARS
            ));
        }
        if message.artifacts().iter().any(|a| a.kind.trim().is_empty()) {
            return Err(format!("Message #{} has an artifact without type", idx));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_artifact::aggregate::Artifact;
    use serde_json::json;

    fn request(messages: Vec<ChatMessage>, title: Option<&str>) -> SaveThreadRequest {
        SaveThreadRequest {
            messages,
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request(
            vec![ChatMessage::user("Hi"), ChatMessage::assistant("Hello!")],
            Some("Greeting"),
        );
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_thread_rejected() {
        assert!(request(Vec::new(), None).validate().is_err());
    }

    #[test]
    fn test_long_title_rejected() {
        let title = "x".repeat(MAX_TITLE_CHARS + 1);
        let req = request(vec![ChatMessage::user("Hi")], Some(&title));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_untyped_artifact_rejected() {
        let message =
            ChatMessage::assistant("Here").with_artifacts(vec![Artifact::new(" ", json!({}))]);
        let err = request(vec![message], None).validate().unwrap_err();
        assert!(err.contains("artifact"));
    }

    #[test]
    fn test_blank_title_is_normalized_away() {
        let req = request(vec![ChatMessage::user("Hi")], Some("   "));
        assert_eq!(req.normalized_title(), None);
        let req = request(vec![ChatMessage::user("Hi")], Some(" Trip "));
        assert_eq!(req.normalized_title(), Some("Trip"));
    }
}
