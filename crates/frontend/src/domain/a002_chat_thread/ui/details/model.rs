//! Тред чата - Model (функции API)

use contracts::domain::a002_chat_thread::aggregate::{
    ChatMessage, DeleteThreadResponse, SaveThreadRequest, SaveThreadResponse, ThreadMeta,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

/// Треды текущего тенанта, свежие первыми
pub async fn fetch_threads() -> Result<Vec<ThreadMeta>, String> {
    let response = Request::get(&api_url("/api/threads"))
        .header("Authorization", &auth_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<ThreadMeta>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Все сообщения треда; пусто для неизвестного id
pub async fn fetch_messages(thread_id: &str) -> Result<Vec<ChatMessage>, String> {
    let url = api_url(&format!("/api/threads/{}", thread_id));
    let response = Request::get(&url)
        .header("Authorization", &auth_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<ChatMessage>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Перезаписать тред массивом `messages` (всегда целиком)
pub async fn save_thread(
    thread_id: &str,
    messages: Vec<ChatMessage>,
) -> Result<ThreadMeta, String> {
    let url = api_url(&format!("/api/threads/{}", thread_id));
    let request = SaveThreadRequest {
        messages,
        title: None,
    };

    let response = Request::post(&url)
        .header("Authorization", &auth_header())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Save failed: HTTP {}", response.status()));
    }

    response
        .json::<SaveThreadResponse>()
        .await
        .map(|r| r.thread)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_thread(thread_id: &str) -> Result<(), String> {
    let url = api_url(&format!("/api/threads/{}", thread_id));
    let response = Request::delete(&url)
        .header("Authorization", &auth_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete failed: HTTP {}", response.status()));
    }

    response
        .json::<DeleteThreadResponse>()
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to parse response: {}", e))
}
