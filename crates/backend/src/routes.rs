use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Json, Router,
};
use contracts::system::health::HealthResponse;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::a002_chat_thread::service::ConversationStore;
use crate::handlers;
use crate::system;
use crate::system::auth::identity::IdentityResolver;
use crate::system::auth::provider::IdentityProvider;

/// Общее состояние для всех хендлеров
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<ConversationStore>,
    pub resolver: Arc<IdentityResolver>,
    pub provider: Arc<dyn IdentityProvider>,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, seed_enabled: bool) -> Router {
    let mut api = Router::new()
        // ========================================
        // AUTH
        // ========================================
        .route("/auth/signup", post(system::handlers::auth::signup))
        .route("/auth/login", post(system::handlers::auth::login))
        .route("/auth/me", get(system::handlers::auth::me))
        // ========================================
        // A002 CHAT THREADS
        // ========================================
        .route("/threads", get(handlers::a002_chat_thread::list_threads))
        .route(
            "/threads/:id",
            get(handlers::a002_chat_thread::get_thread)
                .post(handlers::a002_chat_thread::save_thread)
                .delete(handlers::a002_chat_thread::delete_thread),
        )
        // Старые клиенты с одним тредом
        .route(
            "/chat/history",
            get(handlers::a002_chat_thread::get_history)
                .post(handlers::a002_chat_thread::save_history),
        );

    if seed_enabled {
        tracing::warn!("Debug seed endpoint enabled: POST /api/debug/seed");
        api = api.route(
            "/debug/seed",
            post(handlers::a002_chat_thread::seed_demo_threads),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { Json(HealthResponse::ok()) }))
        .nest("/api", api)
        .with_state(state)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::domain::a002_chat_thread::aggregate::{ChatMessage, ThreadMeta};
    use contracts::system::auth::WhoAmIResponse;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::a002_chat_thread::service::MessageKeyScope;
    use crate::shared::kv::MemoryKvStore;
    use crate::system::auth::identity::tests::StubProvider;
    use crate::system::auth::identity::AuthPolicy;

    const ANON_KEY: &str = "public-anon-key";

    fn app_with(policy: AuthPolicy, seed_enabled: bool) -> Router {
        let provider: Arc<dyn IdentityProvider> = Arc::new(StubProvider);
        let state = AppState {
            store: Arc::new(ConversationStore::new(
                Arc::new(MemoryKvStore::new()),
                Duration::from_secs(1),
                MessageKeyScope::Tenant,
            )),
            resolver: Arc::new(IdentityResolver::new(
                ANON_KEY,
                policy,
                provider.clone(),
                Duration::from_millis(100),
            )),
            provider,
        };
        configure_routes(state, seed_enabled)
    }

    fn app() -> Router {
        app_with(AuthPolicy::FailOpen, false)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = auth {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(b) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn hi_hello() -> Value {
        json!({"messages": [
            {"role": "user", "content": "Hi"},
            {"role": "assistant", "content": "Hello!"}
        ]})
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_save_then_read_back() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/threads/t1",
            None,
            Some(hi_hello()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["thread"]["title"], json!("Hi"));

        let (_, list) = send(&app, Method::GET, "/api/threads", None, None).await;
        let list: Vec<ThreadMeta> = serde_json::from_value(list).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "t1");
        assert_eq!(list[0].title, "Hi");
        assert_eq!(list[0].last_message, "Hello!");

        let (_, messages) = send(&app, Method::GET, "/api/threads/t1", None, None).await;
        let messages: Vec<ChatMessage> = serde_json::from_value(messages).unwrap();
        let sent: Vec<ChatMessage> = serde_json::from_value(hi_hello()["messages"].clone()).unwrap();
        assert_eq!(messages, sent);
    }

    #[tokio::test]
    async fn test_unknown_thread_is_empty() {
        let (status, body) = send(&app(), Method::GET, "/api/threads/nope", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_missing_header_equals_anon_key() {
        let app = app();
        send(&app, Method::POST, "/api/threads/t1", None, Some(hi_hello())).await;

        let (_, without) = send(&app, Method::GET, "/api/threads", None, None).await;
        let (_, with_key) = send(&app, Method::GET, "/api/threads", Some(ANON_KEY), None).await;
        assert_eq!(without, with_key);

        let (_, body) = send(&app, Method::GET, "/api/threads/t1", Some(ANON_KEY), None).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_verified_tenant_is_isolated_from_anon() {
        let app = app();
        send(&app, Method::POST, "/api/threads/t1", None, Some(hi_hello())).await;

        let (_, list) = send(&app, Method::GET, "/api/threads", Some("valid-u1"), None).await;
        assert_eq!(list, json!([]));

        let (_, me) = send(&app, Method::GET, "/api/auth/me", Some("valid-u1"), None).await;
        let me: WhoAmIResponse = serde_json::from_value(me).unwrap();
        assert_eq!(me.tenant.as_str(), "u1");
        assert!(!me.anonymous);
    }

    #[tokio::test]
    async fn test_bad_token_fails_open_by_default() {
        let (status, me) = send(&app(), Method::GET, "/api/auth/me", Some("expired"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["anonymous"], json!(true));
    }

    #[tokio::test]
    async fn test_bad_token_rejected_when_fail_closed() {
        let app = app_with(AuthPolicy::FailClosed, false);
        let (status, body) = send(&app, Method::GET, "/api/threads", Some("expired"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_string());

        let (status, _) = send(&app, Method::GET, "/api/threads", None, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_messages_rejected() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/threads/t1",
            None,
            Some(json!({"messages": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_delete_removes_body_and_meta() {
        let app = app();
        send(&app, Method::POST, "/api/threads/t1", None, Some(hi_hello())).await;

        let (status, body) = send(&app, Method::DELETE, "/api/threads/t1", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (_, messages) = send(&app, Method::GET, "/api/threads/t1", None, None).await;
        assert_eq!(messages, json!([]));
        let (_, list) = send(&app, Method::GET, "/api/threads", None, None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_legacy_history_uses_current_thread() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/chat/history",
            None,
            Some(hi_hello()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (_, history) = send(&app, Method::GET, "/api/chat/history", None, None).await;
        assert_eq!(history.as_array().map(Vec::len), Some(2));

        let (_, via_threads) = send(&app, Method::GET, "/api/threads/current", None, None).await;
        assert_eq!(history, via_threads);
    }

    #[tokio::test]
    async fn test_seed_route_only_when_enabled() {
        let (status, _) = send(&app(), Method::POST, "/api/debug/seed", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let app = app_with(AuthPolicy::FailOpen, true);
        let (status, body) = send(&app, Method::POST, "/api/debug/seed", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let seeded = body["threads"].as_u64().unwrap();
        assert!(seeded > 0);

        let (_, list) = send(&app, Method::GET, "/api/threads", None, None).await;
        assert_eq!(list.as_array().map(|l| l.len() as u64), Some(seeded));
    }

    #[tokio::test]
    async fn test_signup_created_and_missing_fields() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/signup",
            None,
            Some(json!({"email": "a@city.example", "password": "tram4ever", "name": "Ana"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email_confirmed"], json!(true));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/signup",
            None,
            Some(json!({"email": "a@city.example"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("password"));
    }

    #[tokio::test]
    async fn test_login_wrong_password_unauthorized() {
        let (status, _) = send(
            &app(),
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "a@city.example", "password": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
