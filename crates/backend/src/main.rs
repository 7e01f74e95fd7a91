pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::domain::a002_chat_thread::service::ConversationStore;
use crate::routes::AppState;
use crate::shared::config;
use crate::shared::kv::{KvStore, MemoryKvStore, SqliteKvStore};
use crate::system::auth::identity::IdentityResolver;
use crate::system::auth::jwt::{self, JwtKeys};
use crate::system::auth::provider::{IdentityProvider, LocalIdentityProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let in_memory = std::env::args().any(|arg| arg == "--memory");

    let db_path = config::get_database_path(&config);
    tracing::info!("Database: {}", db_path.display());
    let db = shared::data::db::connect(&db_path).await?;

    let secret = jwt::resolve_jwt_secret(config.auth.jwt_secret.as_deref(), &db).await?;
    let provider: Arc<dyn IdentityProvider> = Arc::new(LocalIdentityProvider::new(
        db.clone(),
        JwtKeys::from_secret(&secret),
    ));

    let kv: Arc<dyn KvStore> = if in_memory {
        tracing::warn!("--memory: threads are kept in process memory only");
        Arc::new(MemoryKvStore::new())
    } else {
        Arc::new(SqliteKvStore::new(db.clone()))
    };

    tracing::info!(
        "Auth policy: {:?}, message key scope: {:?}",
        config.auth.policy,
        config.store.message_key_scope
    );

    let state = AppState {
        store: Arc::new(ConversationStore::new(
            kv,
            config.store.timeout(),
            config.store.message_key_scope,
        )),
        resolver: Arc::new(IdentityResolver::new(
            config.auth.anon_key.clone(),
            config.auth.policy,
            provider.clone(),
            config.auth.verify_timeout(),
        )),
        provider,
    };

    let app = routes::configure_routes(state, config.debug.seed_enabled);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
