use serde::{Deserialize, Serialize};
use std::fmt;

/// Tenant id used for callers without a verified identity
pub const ANON_TENANT: &str = "anon";

/// Identity scope for thread listing: a verified subject id or "anon"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tenant(String);

impl Tenant {
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    pub fn anonymous() -> Self {
        Self(ANON_TENANT.to_string())
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANON_TENANT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

impl SignupRequest {
    /// Returns the names of required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        missing
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub email_confirmed: bool,
}

/// GET /api/auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub tenant: Tenant,
    pub anonymous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub email: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_tenant() {
        let tenant = Tenant::anonymous();
        assert!(tenant.is_anonymous());
        assert_eq!(serde_json::to_string(&tenant).unwrap(), r#""anon""#);
        assert!(!Tenant::new("user-1").is_anonymous());
    }

    #[test]
    fn test_signup_missing_fields() {
        let req: SignupRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(req.missing_fields(), vec!["password", "name"]);
    }
}
