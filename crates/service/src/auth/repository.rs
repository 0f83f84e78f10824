use async_trait::async_trait;
use models::{Role, User};

use super::domain::Credentials;
use super::errors::AuthError;

/// Credential-verification backend. The session service only talks to this
/// trait; where identities actually live is up to the implementation.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn find_identity(&self, role: Role, email: &str) -> Result<Option<User>, AuthError>;
    async fn get_credentials(&self, user_id: &str) -> Result<Option<Credentials>, AuthError>;
}

/// Fixed in-memory roster sharing one sentinel password.
pub mod roster {
    use super::*;
    use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
    use rand::rngs::OsRng;
    use std::collections::HashMap;

    pub const SENTINEL_PASSWORD: &str = "password";

    pub struct RosterAuthBackend {
        identities: HashMap<(Role, String), User>, // key: (role, email)
        creds: HashMap<String, Credentials>,       // key: user_id
    }

    impl RosterAuthBackend {
        /// Build a roster where every identity accepts `password`. The
        /// password is stored only as an argon2 hash.
        pub fn new(entries: Vec<(Role, User)>, password: &str) -> Result<Self, AuthError> {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|e| AuthError::HashError(e.to_string()))?
                .to_string();

            let mut identities = HashMap::new();
            let mut creds = HashMap::new();
            for (role, user) in entries {
                creds.insert(
                    user.id.clone(),
                    Credentials { user_id: user.id.clone(), password_hash: hash.clone(), password_algorithm: "argon2".into() },
                );
                identities.insert((role, user.email.clone()), user);
            }
            Ok(Self { identities, creds })
        }

        /// The demo roster: one donor and one recipient organization.
        pub fn builtin() -> Result<Self, AuthError> {
            let donor = User {
                id: "d1".into(),
                name: "John Donor".into(),
                email: "donor@example.com".into(),
                image: None,
                points: Some(250),
                verified: None,
            };
            let recipient = User {
                id: "r1".into(),
                name: "Charity Organization".into(),
                email: "org@example.com".into(),
                image: None,
                points: None,
                verified: Some(true),
            };
            Self::new(vec![(Role::Donor, donor), (Role::Recipient, recipient)], SENTINEL_PASSWORD)
        }

        pub fn len(&self) -> usize { self.identities.len() }

        pub fn is_empty(&self) -> bool { self.identities.is_empty() }
    }

    #[async_trait]
    impl AuthBackend for RosterAuthBackend {
        async fn find_identity(&self, role: Role, email: &str) -> Result<Option<User>, AuthError> {
            Ok(self.identities.get(&(role, email.to_string())).cloned())
        }

        async fn get_credentials(&self, user_id: &str) -> Result<Option<Credentials>, AuthError> {
            Ok(self.creds.get(user_id).cloned())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn roster_is_partitioned_by_role() -> Result<(), anyhow::Error> {
            let roster = RosterAuthBackend::builtin()?;
            assert_eq!(roster.len(), 2);
            assert!(roster.find_identity(Role::Donor, "donor@example.com").await?.is_some());
            assert!(roster.find_identity(Role::Recipient, "donor@example.com").await?.is_none());
            let org = roster.find_identity(Role::Recipient, "org@example.com").await?.unwrap();
            assert_eq!(org.verified, Some(true));

            let cred = roster.get_credentials("d1").await?.unwrap();
            assert_eq!(cred.password_algorithm, "argon2");
            assert!(!cred.password_hash.contains(SENTINEL_PASSWORD));
            assert!(roster.get_credentials("nobody").await?.is_none());
            Ok(())
        }
    }
}
