use serde::{Deserialize, Serialize};

/// Request body for user registration. Fields default to empty so a
/// missing key reads as an empty string and fails validation with 400
/// instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert!(req.password.is_empty());

        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn token_response_serializes_token_field() {
        let res = TokenResponse {
            token: "abc.def.ghi".into(),
        };
        let json = serde_json::to_string(&res).unwrap();
        assert_eq!(json, r#"{"token":"abc.def.ghi"}"#);
    }
}
