use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Empty object; the session travels in the cookie
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LoginResponse {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccountResponse {
    pub name: String,
}
