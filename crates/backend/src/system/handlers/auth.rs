use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use contracts::system::auth::{
    ErrorResponse, LoginRequest, LoginResponse, SignupRequest, UserInfo, WhoAmIResponse,
};

use crate::system::auth::extractor::CurrentTenant;
use crate::system::auth::provider::{IdentityError, IdentityProvider};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// POST /api/auth/signup
pub async fn signup(
    State(provider): State<Arc<dyn IdentityProvider>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    match provider.create_account(&request).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user))),
        Err(e) => {
            tracing::warn!("Signup rejected for '{}': {}", request.email, e);
            let message = match e {
                IdentityError::Rejected(reason) => reason,
                other => other.to_string(),
            };
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))))
        }
    }
}

/// POST /api/auth/login
pub async fn login(
    State(provider): State<Arc<dyn IdentityProvider>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    match provider.sign_in(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(IdentityError::InvalidCredentials) => Err(StatusCode::UNAUTHORIZED),
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/auth/me
pub async fn me(CurrentTenant(tenant): CurrentTenant) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        anonymous: tenant.is_anonymous(),
        tenant,
    })
}
