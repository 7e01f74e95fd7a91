//! API utilities for frontend-backend communication

use crate::system::auth::storage;

/// Public key sent instead of a session token; the backend treats it as anonymous
pub const ANON_KEY: &str = "public-anon-key";

/// Base URL of the backend: same host as the page, port 3000
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// `path` should start with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` value for a stored session token, or the anonymous key
pub fn bearer_for(token: Option<&str>) -> String {
    let token = token.filter(|t| !t.trim().is_empty()).unwrap_or(ANON_KEY);
    format!("Bearer {}", token)
}

/// `Authorization` value for the current session
pub fn auth_header() -> String {
    bearer_for(storage::get_access_token().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_falls_back_to_anon_key() {
        assert_eq!(bearer_for(None), "Bearer public-anon-key");
        assert_eq!(bearer_for(Some("  ")), "Bearer public-anon-key");
        assert_eq!(bearer_for(Some("abc.def")), "Bearer abc.def");
    }
}
