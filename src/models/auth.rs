use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Response shape shared by login and register. The backend is not guaranteed
/// to include tokens or the user on a failed attempt, so everything beyond the
/// message is optional and checked for presence by the caller.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_parses_full_payload() {
        let json = r#"{
            "message": "Login successful",
            "accessToken": "t1",
            "refreshToken": "t2",
            "user": { "name": "A", "email": "a@b.com" }
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("t1"));
        assert_eq!(response.refresh_token.as_deref(), Some("t2"));
        assert_eq!(response.user.as_ref().unwrap().name, "A");
    }

    #[test]
    fn auth_response_tolerates_missing_tokens() {
        let json = r#"{ "message": "Invalid credentials" }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
        assert!(response.access_token.is_none());
        assert!(response.user.is_none());
    }
}
