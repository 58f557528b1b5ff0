use serde::{Deserialize, Serialize};

/// Authenticated user, as stored in the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: String,
    pub name: String,
}
