use thiserror::Error;

use crate::errors::ServiceError;

/// Business errors for session workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 1004,
            AuthError::HashError(_) => 1101,
            AuthError::Backend(_) => 1200,
            AuthError::Storage(_) => 1300,
        }
    }
}

impl From<ServiceError> for AuthError {
    fn from(e: ServiceError) -> Self {
        AuthError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_user_facing() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
        assert_eq!(AuthError::InvalidCredentials.code(), 1004);
    }

    #[test]
    fn storage_failures_map_to_storage_code() {
        let e: AuthError = ServiceError::Storage("disk full".into()).into();
        assert_eq!(e.code(), 1300);
        assert!(e.to_string().contains("disk full"));
    }
}
