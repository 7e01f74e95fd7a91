//! Key-value хранилище для тредов.
//!
//! Каждый вызов атомарен только в пределах одного ключа. Транзакций
//! на несколько ключей нет.

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KvError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Вставить или перезаписать
    async fn set(&self, key: &str, value: String) -> Result<(), KvError>;

    /// Удаление отсутствующего ключа не ошибка
    async fn delete(&self, key: &str) -> Result<(), KvError>;
}
