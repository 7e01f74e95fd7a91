use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::Set;

use super::{KvError, KvStore};

mod entry {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "kv_store")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub key: String,
        pub value: String,
        pub updated_at: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Key-value поверх sqlite-таблицы `kv_store`
#[derive(Clone)]
pub struct SqliteKvStore {
    db: DatabaseConnection,
}

impl SqliteKvStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let model = entry::Entity::find_by_id(key.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(|m| m.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KvError> {
        let active = entry::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().to_rfc3339()),
        };

        entry::Entity::insert(active)
            .on_conflict(
                OnConflict::column(entry::Column::Key)
                    .update_columns([entry::Column::Value, entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        tracing::debug!("kv set: key={}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), KvError> {
        entry::Entity::delete_by_id(key.to_string())
            .exec(&self.db)
            .await?;
        tracing::debug!("kv delete: key={}", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::temp_connection;

    #[tokio::test]
    async fn test_upsert_overwrites_value() {
        let store = SqliteKvStore::new(temp_connection().await);

        store.set("threads:anon", "[]".into()).await.unwrap();
        store.set("threads:anon", "[1]".into()).await.unwrap();

        assert_eq!(
            store.get("threads:anon").await.unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let store = SqliteKvStore::new(temp_connection().await);
        store.delete("nope").await.unwrap();
        assert_eq!(store.get("nope").await.unwrap(), None);
    }
}
