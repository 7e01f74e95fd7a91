use async_trait::async_trait;
use contracts::system::auth::{LoginRequest, LoginResponse, SignupRequest, UserInfo};
use jsonwebtoken::errors::ErrorKind;
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::jwt::JwtKeys;
use crate::system::users::service as user_service;

/// Ошибки провайдера идентификации
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("token expired")]
    Expired,

    #[error("malformed credential: {0}")]
    Malformed(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Выдаёт и проверяет bearer-токены
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// ID субъекта из проверенного токена
    async fn verify(&self, token: &str) -> Result<String, IdentityError>;

    async fn create_account(&self, request: &SignupRequest) -> Result<UserInfo, IdentityError>;

    async fn sign_in(&self, request: &LoginRequest) -> Result<LoginResponse, IdentityError>;
}

/// Аккаунты в `sys_users`, access-токены HS256
pub struct LocalIdentityProvider {
    db: DatabaseConnection,
    keys: JwtKeys,
}

impl LocalIdentityProvider {
    pub fn new(db: DatabaseConnection, keys: JwtKeys) -> Self {
        Self { db, keys }
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn verify(&self, token: &str) -> Result<String, IdentityError> {
        match self.keys.validate_token(token) {
            Ok(claims) => Ok(claims.sub),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(IdentityError::Expired),
                _ => Err(IdentityError::Malformed(e.to_string())),
            },
        }
    }

    async fn create_account(&self, request: &SignupRequest) -> Result<UserInfo, IdentityError> {
        user_service::signup(&self.db, request)
            .await
            .map_err(|e| IdentityError::Rejected(e.to_string()))
    }

    async fn sign_in(&self, request: &LoginRequest) -> Result<LoginResponse, IdentityError> {
        let user = user_service::verify_credentials(&self.db, &request.email, &request.password)
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?
            .ok_or(IdentityError::InvalidCredentials)?;

        let access_token = self
            .keys
            .generate_access_token(&user.id, &user.email)
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        Ok(LoginResponse { access_token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::temp_connection;

    #[tokio::test]
    async fn test_signed_in_token_verifies_to_user_id() {
        let provider =
            LocalIdentityProvider::new(temp_connection().await, JwtKeys::from_secret("s3cret"));

        let user = provider
            .create_account(&SignupRequest {
                email: "lena@city.example".into(),
                password: "ferry2025".into(),
                name: "Lena".into(),
            })
            .await
            .unwrap();

        let login = provider
            .sign_in(&LoginRequest {
                email: "lena@city.example".into(),
                password: "ferry2025".into(),
            })
            .await
            .unwrap();

        assert_eq!(provider.verify(&login.access_token).await.unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_garbage_token_is_malformed() {
        let provider =
            LocalIdentityProvider::new(temp_connection().await, JwtKeys::from_secret("s3cret"));
        let err = provider.verify("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, IdentityError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let provider =
            LocalIdentityProvider::new(temp_connection().await, JwtKeys::from_secret("s3cret"));
        let err = provider
            .sign_in(&LoginRequest {
                email: "ghost@city.example".into(),
                password: "whatever1".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::InvalidCredentials));
    }
}
