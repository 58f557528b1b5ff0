use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    errors::{ApplicationError, AuthError},
    model::user::User,
};

/// The single account allowed to sign in
#[derive(Debug, Clone)]
pub struct AdminAccount {
    username: String,
    password_hash: String,
    name: String,
}

impl AdminAccount {
    pub fn new(username: &str, password: &str, name: &str) -> Result<Self, ApplicationError> {
        let password_hash = hash_password(password)
            .map_err(|e| ApplicationError::Internal(format!("Failed to hash password: {}", e)))?;

        Ok(Self {
            username: username.to_string(),
            password_hash,
            name: name.to_string(),
        })
    }

    pub fn check_username_password(&self, username: &str, password: &str) -> Result<User, AuthError> {
        // Verify even on a username mismatch so both failures cost the same
        let password_ok = verify_password(password, &self.password_hash);

        if username == self.username && password_ok {
            Ok(User {
                username: self.username.clone(),
                name: self.name.clone(),
            })
        } else {
            Err(AuthError::WrongCredentials)
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("123456").unwrap();

        assert_ne!(hash, "123456");
        assert!(verify_password("123456", &hash));
        assert!(!verify_password("654321", &hash));
        assert!(!verify_password("123456", "not a hash"));
    }

    #[test]
    fn test_admin_account() {
        let admin = AdminAccount::new("Admin", "123456", "John").unwrap();

        let user = admin.check_username_password("Admin", "123456").unwrap();
        assert_eq!(user.name, "John");

        assert!(matches!(
            admin.check_username_password("admin", "123456"),
            Err(AuthError::WrongCredentials)
        ));
        assert!(matches!(
            admin.check_username_password("Admin", "wrong"),
            Err(AuthError::WrongCredentials)
        ));
    }
}
