use anyhow::{Context, Result};
use contracts::system::auth::UserInfo;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};

const USER_COLUMNS: &str = "id, email, name, email_confirmed";

fn user_from_row(row: &QueryResult) -> Result<UserInfo> {
    Ok(UserInfo {
        id: row.try_get("", "id")?,
        email: row.try_get("", "email")?,
        name: row.try_get("", "name")?,
        email_confirmed: row.try_get::<i32>("", "email_confirmed")? != 0,
    })
}

/// Создать пользователя с хешем пароля
pub async fn create_with_password(
    db: &DatabaseConnection,
    user: &UserInfo,
    password_hash: &str,
) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();

    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_users (id, email, name, password_hash, email_confirmed, created_at, updated_at, last_login_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, NULL)",
        [
            user.id.clone().into(),
            user.email.clone().into(),
            user.name.clone().into(),
            password_hash.to_string().into(),
            (if user.email_confirmed { 1 } else { 0 }).into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await
    .context("Failed to insert user")?;

    Ok(())
}

/// Найти пользователя по email (без учёта регистра)
pub async fn get_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<UserInfo>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!(
                "SELECT {} FROM sys_users WHERE lower(email) = lower(?)",
                USER_COLUMNS
            ),
            [email.into()],
        ))
        .await?;

    result.as_ref().map(user_from_row).transpose()
}

/// Получить хеш пароля пользователя
pub async fn get_password_hash(db: &DatabaseConnection, user_id: &str) -> Result<Option<String>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let hash: String = row.try_get("", "password_hash")?;
            Ok(Some(hash))
        }
        None => Ok(None),
    }
}

pub async fn update_last_login(db: &DatabaseConnection, user_id: &str) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET last_login_at = ?, updated_at = ? WHERE id = ?",
        [now.clone().into(), now.into(), user_id.into()],
    ))
    .await?;
    Ok(())
}
