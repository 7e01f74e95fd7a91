use anyhow::Result;
use contracts::system::auth::{SignupRequest, UserInfo};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::system::auth::password;

/// Регистрация аккаунта. Подтверждается сразу.
pub async fn signup(db: &DatabaseConnection, request: &SignupRequest) -> Result<UserInfo> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(anyhow::anyhow!("Missing fields: {}", missing.join(", ")));
    }

    let email = request.email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(anyhow::anyhow!("Invalid email format"));
    }

    if repository::get_by_email(db, &email).await?.is_some() {
        return Err(anyhow::anyhow!("Email already registered"));
    }

    password::validate_password_strength(&request.password)?;
    let password_hash = password::hash_password(&request.password)?;

    let user = UserInfo {
        id: uuid::Uuid::new_v4().to_string(),
        email,
        name: request.name.trim().to_string(),
        email_confirmed: true,
    };

    repository::create_with_password(db, &user, &password_hash).await?;
    tracing::info!("Created account {} ({})", user.id, user.email);

    Ok(user)
}

/// Проверка email и пароля (для логина)
pub async fn verify_credentials(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<Option<UserInfo>> {
    let user = match repository::get_by_email(db, email.trim()).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    let password_hash = repository::get_password_hash(db, &user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(db, &user.id).await;

    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::temp_connection;

    fn request(email: &str, password: &str, name: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_and_login() {
        let db = temp_connection().await;
        let user = signup(&db, &request("Ana@City.example", "tram4ever", "Ana"))
            .await
            .unwrap();
        assert_eq!(user.email, "ana@city.example");
        assert!(user.email_confirmed);

        let found = verify_credentials(&db, "ana@city.example", "tram4ever")
            .await
            .unwrap();
        assert_eq!(found, Some(user));

        let wrong = verify_credentials(&db, "ana@city.example", "bus4ever")
            .await
            .unwrap();
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicates_and_missing_fields() {
        let db = temp_connection().await;
        signup(&db, &request("ana@city.example", "tram4ever", "Ana"))
            .await
            .unwrap();

        assert!(signup(&db, &request("ANA@city.example", "tram4ever", "Ana 2"))
            .await
            .is_err());
        assert!(signup(&db, &request("", "tram4ever", "Nobody")).await.is_err());
        assert!(signup(&db, &request("bob@city.example", "weak", "Bob"))
            .await
            .is_err());
    }
}
