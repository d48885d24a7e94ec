use gloo_net::http::Request;

use crate::models::{AuthResponse, LoginRequest, SignUpRequest};
use crate::utils::BACKEND_URL;

/// Log in with email and password.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    let url = format!("{}/api/users/login", BACKEND_URL);
    let request_body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Logging in: {}", email);

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Register a new account.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    let url = format!("{}/api/users/register", BACKEND_URL);
    let request_body = SignUpRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("📝 Registering account: {}", email);

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
