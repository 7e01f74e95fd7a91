use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_chat_thread::aggregate::{
    ChatHistoryRequest, ChatHistoryResponse, ChatMessage, DeleteThreadResponse, SaveThreadRequest,
    SaveThreadResponse, SeedResponse, ThreadMeta, LEGACY_THREAD_ID,
};
use contracts::system::auth::ErrorResponse;

use crate::domain::a002_chat_thread::fixtures;
use crate::domain::a002_chat_thread::service::{ConversationStore, StoreError};
use crate::system::auth::extractor::CurrentTenant;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn store_failure(op: &str, e: StoreError) -> ApiError {
    tracing::error!("Conversation store {} failed: {}", op, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Conversation store unavailable")),
    )
}

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// GET /api/threads
pub async fn list_threads(
    State(store): State<Arc<ConversationStore>>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<ThreadMeta>>, ApiError> {
    store
        .list_threads(&tenant)
        .await
        .map(Json)
        .map_err(|e| store_failure("list", e))
}

/// GET /api/threads/:id
pub async fn get_thread(
    State(store): State<Arc<ConversationStore>>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    store
        .get_messages(&tenant, &id)
        .await
        .map(Json)
        .map_err(|e| store_failure("read", e))
}

/// POST /api/threads/:id
pub async fn save_thread(
    State(store): State<Arc<ConversationStore>>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<String>,
    Json(request): Json<SaveThreadRequest>,
) -> Result<Json<SaveThreadResponse>, ApiError> {
    request.validate().map_err(bad_request)?;

    let thread = store
        .save_thread(&tenant, &id, &request.messages, request.normalized_title())
        .await
        .map_err(|e| store_failure("save", e))?;

    Ok(Json(SaveThreadResponse {
        success: true,
        thread,
    }))
}

/// DELETE /api/threads/:id
pub async fn delete_thread(
    State(store): State<Arc<ConversationStore>>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<String>,
) -> Result<Json<DeleteThreadResponse>, ApiError> {
    store
        .delete_thread(&tenant, &id)
        .await
        .map_err(|e| store_failure("delete", e))?;

    Ok(Json(DeleteThreadResponse { success: true }))
}

/// GET /api/chat/history
pub async fn get_history(
    State(store): State<Arc<ConversationStore>>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    store
        .get_messages(&tenant, LEGACY_THREAD_ID)
        .await
        .map(Json)
        .map_err(|e| store_failure("read", e))
}

/// POST /api/chat/history
pub async fn save_history(
    State(store): State<Arc<ConversationStore>>,
    CurrentTenant(tenant): CurrentTenant,
    Json(request): Json<ChatHistoryRequest>,
) -> Result<Json<ChatHistoryResponse>, ApiError> {
    request.validate().map_err(bad_request)?;

    store
        .save_thread(&tenant, LEGACY_THREAD_ID, &request.messages, None)
        .await
        .map_err(|e| store_failure("save", e))?;

    Ok(Json(ChatHistoryResponse { success: true }))
}

/// POST /api/debug/seed
pub async fn seed_demo_threads(
    State(store): State<Arc<ConversationStore>>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<SeedResponse>, ApiError> {
    let demo = fixtures::demo_threads();
    let count = demo.len();

    for thread in demo {
        store
            .save_thread(&tenant, thread.id, &thread.messages, thread.title)
            .await
            .map_err(|e| store_failure("seed", e))?;
    }

    tracing::info!("Seeded {} demo threads for tenant {}", count, tenant);
    Ok(Json(SeedResponse {
        success: true,
        threads: count,
    }))
}
