use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    Json,
};
use contracts::system::auth::{ErrorResponse, Tenant};

use super::identity::IdentityResolver;

/// Тенант, определённый по заголовку `Authorization`.
/// Использование в хендлерах: `async fn handler(CurrentTenant(tenant): CurrentTenant) -> Response`
pub struct CurrentTenant(pub Tenant);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
    Arc<IdentityResolver>: FromRef<S>,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let resolver = Arc::<IdentityResolver>::from_ref(state);

        // Не-ASCII заголовок не проходит проверку схемы Bearer
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().unwrap_or("<non-ascii>")),
            None => None,
        };

        resolver.resolve(header).await.map(CurrentTenant).map_err(|rejected| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(rejected.0.to_string())),
            )
        })
    }
}
