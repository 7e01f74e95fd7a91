use contracts::system::auth::{
    ErrorResponse, LoginRequest, LoginResponse, SignupRequest, UserInfo, WhoAmIResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer_for};

/// Регистрация (аккаунт подтверждается сразу)
pub async fn signup(request: &SignupRequest) -> Result<UserInfo, String> {
    let response = Request::post(&api_url("/api/auth/signup"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // Сервер возвращает {"error": "..."} для 400
        let reason = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(reason);
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Вход по email и паролю
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Err("Wrong email or password".to_string());
    }
    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Тенант, которого бэкенд определяет по `access_token`
pub async fn who_am_i(access_token: Option<&str>) -> Result<WhoAmIResponse, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &bearer_for(access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<WhoAmIResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
