use std::sync::Arc;
use std::time::Duration;

use contracts::system::auth::Tenant;
use serde::Deserialize;

use super::provider::{IdentityError, IdentityProvider};

/// Auth scheme name, compared case-insensitively (RFC 7235)
const BEARER_SCHEME: &str = "Bearer";

/// Token part of a bearer credential; `None` for any other scheme
fn bearer_token(header: &str) -> Option<&str> {
    match header.split_once(char::is_whitespace) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => Some(token.trim()),
        None if header.eq_ignore_ascii_case(BEARER_SCHEME) => Some(""),
        _ => None,
    }
}

/// What happens when a presented credential cannot be verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPolicy {
    /// Downgrade to the anonymous tenant
    FailOpen,
    /// Reject the request
    FailClosed,
}

impl AuthPolicy {
    fn on_failure(self, error: IdentityError) -> Result<Tenant, AuthRejected> {
        match self {
            AuthPolicy::FailOpen => {
                tracing::debug!("Credential not verified, continuing as anon: {}", error);
                Ok(Tenant::anonymous())
            }
            AuthPolicy::FailClosed => {
                tracing::warn!("Credential rejected: {}", error);
                Err(AuthRejected(error))
            }
        }
    }
}

#[derive(Debug)]
pub struct AuthRejected(pub IdentityError);

/// Maps an `Authorization` header value to a tenant
pub struct IdentityResolver {
    anon_key: String,
    policy: AuthPolicy,
    provider: Arc<dyn IdentityProvider>,
    verify_timeout: Duration,
}

impl IdentityResolver {
    pub fn new(
        anon_key: impl Into<String>,
        policy: AuthPolicy,
        provider: Arc<dyn IdentityProvider>,
        verify_timeout: Duration,
    ) -> Self {
        Self {
            anon_key: anon_key.into(),
            policy,
            provider,
            verify_timeout,
        }
    }

    pub fn policy(&self) -> AuthPolicy {
        self.policy
    }

    pub async fn resolve(&self, authorization: Option<&str>) -> Result<Tenant, AuthRejected> {
        let header = match authorization.map(str::trim) {
            None | Some("") => return Ok(Tenant::anonymous()),
            Some(h) => h,
        };

        let token = match bearer_token(header) {
            Some(t) => t,
            None => {
                return self.policy.on_failure(IdentityError::Malformed(
                    "authorization header is not a bearer credential".into(),
                ))
            }
        };

        if token.is_empty() {
            return Ok(Tenant::anonymous());
        }
        if token == self.anon_key {
            return Ok(Tenant::anonymous());
        }

        let verified = tokio::time::timeout(self.verify_timeout, self.provider.verify(token)).await;
        match verified {
            Ok(Ok(subject)) => Ok(Tenant::new(subject)),
            Ok(Err(e)) => self.policy.on_failure(e),
            Err(_) => self.policy.on_failure(IdentityError::Unavailable(format!(
                "verification exceeded {:?}",
                self.verify_timeout
            ))),
        }
    }
}
