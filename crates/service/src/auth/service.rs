use std::sync::Arc;
use std::time::Duration;

use argon2::{Argon2, password_hash::PasswordVerifier, PasswordHash};
use models::User;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::domain::{AuthSession, LoginInput, SignupInput};
use super::errors::AuthError;
use super::ids::IdGenerator;
use super::repository::AuthBackend;
use crate::storage::kv_store::{keys, load_json, save_json, KeyValueStore};

/// Session service configuration
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Delay applied before login and signup resolve.
    pub simulated_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self { Self { simulated_latency: Duration::from_millis(1000) } }
}

impl From<&configs::SessionConfig> for SessionConfig {
    fn from(cfg: &configs::SessionConfig) -> Self {
        Self { simulated_latency: Duration::from_millis(cfg.simulated_latency_ms) }
    }
}

/// Owns the single active session.
///
/// Construct one at startup, call [`SessionService::restore_session`], and
/// pass it to whatever needs the current identity. Concurrent logins are not
/// coordinated: whichever finishes last is the session that sticks.
pub struct SessionService<B: AuthBackend> {
    backend: Arc<B>,
    storage: Arc<dyn KeyValueStore>,
    cfg: SessionConfig,
    ids: IdGenerator,
    active: RwLock<Option<AuthSession>>,
    last_error: RwLock<Option<String>>,
}

impl<B: AuthBackend> SessionService<B> {
    pub fn new(backend: Arc<B>, storage: Arc<dyn KeyValueStore>, cfg: SessionConfig) -> Self {
        Self {
            backend,
            storage,
            cfg,
            ids: IdGenerator::new(),
            active: RwLock::new(None),
            last_error: RwLock::new(None),
        }
    }

    /// Reload the persisted session, if any. Credentials are not re-checked.
    #[instrument(skip(self))]
    pub async fn restore_session(&self) -> Option<AuthSession> {
        let restored: Option<AuthSession> = load_json(self.storage.as_ref(), keys::SESSION).await;
        if let Some(session) = &restored {
            self.ids.reserve(&session.user.id);
            info!(user_id = %session.user.id, role = %session.role, "session_restored");
        } else {
            debug!("no stored session");
        }
        *self.active.write().await = restored.clone();
        restored
    }

    /// Authenticate against the backend and make the identity active.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{SessionService, SessionConfig, RosterAuthBackend};
    /// use service::auth::domain::LoginInput;
    /// use service::storage::LocalStorage;
    /// use models::Role;
    /// use std::{sync::Arc, time::Duration};
    /// tokio_test::block_on(async {
    ///     let path = std::env::temp_dir().join(format!("doc_session_{}.json", uuid::Uuid::new_v4()));
    ///     let storage = LocalStorage::open(&path).await.unwrap();
    ///     let backend = Arc::new(RosterAuthBackend::builtin().unwrap());
    ///     let svc = SessionService::new(backend, storage, SessionConfig { simulated_latency: Duration::ZERO });
    ///     let user = svc
    ///         .login(LoginInput { email: "donor@example.com".into(), password: "password".into(), role: Role::Donor })
    ///         .await
    ///         .unwrap();
    ///     assert_eq!(user.points, Some(250));
    ///     let _ = std::fs::remove_file(&path);
    /// });
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email, role = %input.role))]
    pub async fn login(&self, input: LoginInput) -> Result<User, AuthError> {
        self.begin_attempt().await;
        let outcome = match self.verify(&input).await {
            Ok(user) => self.establish(AuthSession { user, role: input.role }).await,
            Err(e) => Err(e),
        };
        self.finish("login", outcome).await
    }

    /// Create a new identity with role defaults and make it active. No
    /// uniqueness check is made against existing identities.
    #[instrument(skip(self, input), fields(email = %input.email, role = %input.role))]
    pub async fn signup(&self, input: SignupInput) -> Result<User, AuthError> {
        self.begin_attempt().await;
        let id = self.ids.next(input.role);
        let user = User::new_for_role(id, input.name, input.email, input.image, input.role);
        let outcome = self.establish(AuthSession { user, role: input.role }).await;
        self.finish("signup", outcome).await
    }

    /// Drop the persisted entry, then the active identity. When the entry
    /// cannot be removed the session stays active.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove(keys::SESSION).await?;
        let previous = self.active.write().await.take();
        *self.last_error.write().await = None;
        if let Some(session) = previous {
            info!(user_id = %session.user.id, "user_logged_out");
        }
        Ok(())
    }

    pub async fn current(&self) -> Option<AuthSession> {
        self.active.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.active.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.active.read().await.is_some()
    }

    /// Message of the most recent failed attempt; cleared when a new attempt starts.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    async fn begin_attempt(&self) {
        *self.last_error.write().await = None;
        if !self.cfg.simulated_latency.is_zero() {
            tokio::time::sleep(self.cfg.simulated_latency).await;
        }
    }

    async fn verify(&self, input: &LoginInput) -> Result<User, AuthError> {
        let user = self.backend
            .find_identity(input.role, &input.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let cred = self.backend
            .get_credentials(&user.id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user)
    }

    async fn establish(&self, session: AuthSession) -> Result<User, AuthError> {
        save_json(self.storage.as_ref(), keys::SESSION, &session).await?;
        let user = session.user.clone();
        info!(user_id = %user.id, role = %session.role, "session_established");
        *self.active.write().await = Some(session);
        Ok(user)
    }

    async fn finish(&self, op: &'static str, outcome: Result<User, AuthError>) -> Result<User, AuthError> {
        if let Err(e) = &outcome {
            warn!(op, code = e.code(), error = %e, "auth_attempt_failed");
            *self.last_error.write().await = Some(e.to_string());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::roster::RosterAuthBackend;
    use crate::storage::LocalStorage;
    use models::Role;
    use std::path::PathBuf;

    async fn fixture() -> anyhow::Result<(SessionService<RosterAuthBackend>, Arc<LocalStorage>, PathBuf)> {
        let path = std::env::temp_dir().join(format!("svc_session_{}.json", uuid::Uuid::new_v4()));
        let storage = LocalStorage::open(&path).await?;
        let backend = Arc::new(RosterAuthBackend::builtin()?);
        let svc = SessionService::new(backend, storage.clone(), SessionConfig { simulated_latency: Duration::ZERO });
        Ok((svc, storage, path))
    }

    fn donor_login(password: &str) -> LoginInput {
        LoginInput { email: "donor@example.com".into(), password: password.into(), role: Role::Donor }
    }

    #[tokio::test]
    async fn login_persists_user_and_role() -> anyhow::Result<()> {
        let (svc, storage, path) = fixture().await?;
        let user = svc.login(donor_login("password")).await?;
        assert_eq!(user.id, "d1");
        assert_eq!(user.points, Some(250));

        let stored = storage.get(keys::SESSION).await.unwrap();
        assert_eq!(stored["role"], "donor");
        assert_eq!(stored["user"]["email"], "donor@example.com");
        assert!(svc.is_authenticated().await);
        assert!(svc.last_error().await.is_none());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn bad_credentials_leave_nothing_behind() -> anyhow::Result<()> {
        let (svc, storage, path) = fixture().await?;

        let wrong_password = svc.login(donor_login("wrong")).await;
        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
        assert_eq!(svc.last_error().await.as_deref(), Some("Invalid email or password"));

        let unknown = svc
            .login(LoginInput { email: "nobody@example.com".into(), password: "password".into(), role: Role::Donor })
            .await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));

        // right email, wrong role
        let wrong_role = svc
            .login(LoginInput { email: "donor@example.com".into(), password: "password".into(), role: Role::Recipient })
            .await;
        assert!(matches!(wrong_role, Err(AuthError::InvalidCredentials)));

        assert!(storage.get(keys::SESSION).await.is_none());
        assert!(svc.current().await.is_none());

        // retrying with the right password recovers and clears the message
        svc.login(donor_login("password")).await?;
        assert!(svc.last_error().await.is_none());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn signup_applies_role_defaults() -> anyhow::Result<()> {
        let (svc, _storage, path) = fixture().await?;
        let donor = svc
            .signup(SignupInput { name: "Asha".into(), email: "asha@example.com".into(), image: None, password: "x".into(), role: Role::Donor })
            .await?;
        assert!(donor.id.starts_with('d'));
        assert_eq!(donor.points, Some(0));

        let org = svc
            .signup(SignupInput { name: "Shelter".into(), email: "shelter@example.com".into(), image: None, password: "x".into(), role: Role::Recipient })
            .await?;
        assert!(org.id.starts_with('r'));
        assert_eq!(org.verified, Some(false));
        assert_ne!(donor.id, org.id);

        // last signup wins the session
        assert_eq!(svc.current().await.unwrap().role, Role::Recipient);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn logout_then_restore_yields_nothing() -> anyhow::Result<()> {
        let (svc, _storage, path) = fixture().await?;
        svc.login(donor_login("password")).await?;
        svc.logout().await?;
        assert!(svc.current_user().await.is_none());
        assert!(svc.restore_session().await.is_none());
        assert!(!svc.is_authenticated().await);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    /// Store whose removals always fail.
    #[derive(Default)]
    struct StuckStore {
        values: std::sync::Mutex<std::collections::HashMap<String, serde_json::Value>>,
    }

    #[async_trait::async_trait]
    impl KeyValueStore for StuckStore {
        async fn get(&self, key: &str) -> Option<serde_json::Value> {
            self.values.lock().unwrap().get(key).cloned()
        }
        async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), crate::errors::ServiceError> {
            self.values.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }
        async fn remove(&self, _key: &str) -> Result<bool, crate::errors::ServiceError> {
            Err(crate::errors::ServiceError::Storage("read-only".into()))
        }
    }

    #[tokio::test]
    async fn failed_logout_keeps_session() -> anyhow::Result<()> {
        let storage = Arc::new(StuckStore::default());
        let backend = Arc::new(RosterAuthBackend::builtin()?);
        let svc = SessionService::new(backend, storage.clone(), SessionConfig { simulated_latency: Duration::ZERO });
        svc.login(donor_login("password")).await?;

        assert!(matches!(svc.logout().await, Err(AuthError::Storage(_))));
        assert!(svc.is_authenticated().await);
        // memory and storage still agree
        let restored = svc.restore_session().await.map(|s| s.user.id);
        assert_eq!(restored.as_deref(), Some("d1"));
        assert_eq!(svc.current_user().await.map(|u| u.id).as_deref(), Some("d1"));
        Ok(())
    }

    #[tokio::test]
    async fn simulated_latency_is_applied() -> anyhow::Result<()> {
        let (_, storage, path) = fixture().await?;
        let backend = Arc::new(RosterAuthBackend::builtin()?);
        let svc = SessionService::new(backend, storage, SessionConfig { simulated_latency: Duration::from_millis(50) });
        let started = std::time::Instant::now();
        svc.login(donor_login("password")).await?;
        assert!(started.elapsed() >= Duration::from_millis(50));

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
