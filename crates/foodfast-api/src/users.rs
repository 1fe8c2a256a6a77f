//! # User Directory
//!
//! Mocked accounts: one demo login, one permanently-taken email, a single
//! mutable profile. No passwords are stored or hashed anywhere; this is a
//! demo, not an auth system.
//!
//! ## Demo Fixtures
//! ```text
//! login:     demo@foodfast.com / password      → John Doe
//! register:  existing@foodfast.com            → always conflicts
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::error::{ServiceError, ServiceResult};
use crate::Shared;
use foodfast_core::types::User;
use foodfast_core::validation::validate_email;
use foodfast_core::ValidationError;

/// The one email/password pair the mock accepts.
pub const DEMO_EMAIL: &str = "demo@foodfast.com";
pub const DEMO_PASSWORD: &str = "password";

/// Registering this email always conflicts, for demoing the error path.
pub const TAKEN_EMAIL: &str = "existing@foodfast.com";

const DEFAULT_AVATAR: &str = "/professional-headshot.png";

/// The profile every session starts with.
pub(crate) fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: DEMO_EMAIL.to_string(),
        avatar: Some(DEFAULT_AVATAR.to_string()),
    }
}

/// A partial profile update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

/// Service handle for accounts and the profile.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    shared: Arc<Shared>,
}

impl UserDirectory {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        UserDirectory { shared }
    }

    /// Attempts a login.
    ///
    /// Only the demo credentials succeed; anything else is
    /// [`ServiceError::Unauthorized`].
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<User> {
        self.shared.ensure_online()?;
        self.shared.latency.simulate(self.shared.latency.auth).await;

        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            let user = self.shared.profile.lock().expect("profile mutex poisoned");
            info!(user_id = %user.id, "Login succeeded");
            return Ok(user.clone());
        }

        warn!(email = %email, "Login rejected");
        Err(ServiceError::Unauthorized)
    }

    /// Registers a new account.
    ///
    /// ## Server-Side Checks
    /// - All three fields required
    /// - Email must look like an email
    /// - The well-known taken email always conflicts
    ///
    /// The returned account is not persisted anywhere; the mock hands back
    /// a fresh user and forgets it, which is all the demo flow needs.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ServiceResult<User> {
        self.shared.ensure_online()?;
        self.shared.latency.simulate(self.shared.latency.auth).await;

        for (field, value) in [("name", name), ("email", email), ("password", password)] {
            if value.trim().is_empty() {
                return Err(ValidationError::required(field).into());
            }
        }
        validate_email(email)?;

        if email == TAKEN_EMAIL {
            return Err(ServiceError::conflict("email", email));
        }

        let user = User {
            id: self.shared.ids.generate(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            avatar: Some(DEFAULT_AVATAR.to_string()),
        };

        info!(user_id = %user.id, "Account registered");
        Ok(user)
    }

    /// Fetches the session profile.
    pub async fn get_profile(&self) -> ServiceResult<User> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.profile_fetch)
            .await;

        let user = self.shared.profile.lock().expect("profile mutex poisoned");
        debug!(user_id = %user.id, "Profile fetched");
        Ok(user.clone())
    }

    /// Applies a partial update to the session profile.
    pub async fn update_profile(&self, patch: ProfilePatch) -> ServiceResult<User> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.profile_update)
            .await;

        if let Some(email) = &patch.email {
            validate_email(email)?;
        }

        let mut user = self.shared.profile.lock().expect("profile mutex poisoned");
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }

        info!(user_id = %user.id, "Profile updated");
        Ok(user.clone())
    }

    /// Requests a password-reset email.
    ///
    /// Answers the same message whether or not the account exists, so the
    /// endpoint can't be used to probe for registered emails.
    pub async fn request_password_reset(&self, email: &str) -> ServiceResult<String> {
        self.shared.ensure_online()?;
        self.shared.latency.simulate(self.shared.latency.auth).await;

        validate_email(email)?;

        info!(email = %email, "Password reset requested");
        Ok(
            "If an account with this email exists, you will receive a password reset link shortly."
                .to_string(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Backend;

    #[tokio::test]
    async fn test_demo_login() {
        let backend = Backend::for_tests();

        let user = backend
            .users()
            .login(DEMO_EMAIL, DEMO_PASSWORD)
            .await
            .unwrap();
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, DEMO_EMAIL);
    }

    #[tokio::test]
    async fn test_wrong_credentials_unauthorized() {
        let backend = Backend::for_tests();

        let err = backend
            .users()
            .login(DEMO_EMAIL, "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));

        let err = backend
            .users()
            .login("nobody@foodfast.com", DEMO_PASSWORD)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[tokio::test]
    async fn test_register() {
        let backend = Backend::for_tests();

        let user = backend
            .users()
            .register("Jane Smith", "jane@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(user.id, "0001");
        assert_eq!(user.name, "Jane Smith");
        assert!(user.avatar.is_some());
    }

    #[tokio::test]
    async fn test_register_validation_and_conflict() {
        let backend = Backend::for_tests();
        let users = backend.users();

        let err = users.register("", "jane@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = users
            .register("Jane", "not-an-email", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = users.register("Jane", TAKEN_EMAIL, "pw").await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_profile_roundtrip() {
        let backend = Backend::for_tests();
        let users = backend.users();

        let before = users.get_profile().await.unwrap();
        assert_eq!(before.name, "John Doe");

        let after = users
            .update_profile(ProfilePatch {
                name: Some("Johnny Doe".to_string()),
                email: None,
                avatar: None,
            })
            .await
            .unwrap();
        assert_eq!(after.name, "Johnny Doe");
        assert_eq!(after.email, before.email); // untouched

        // the update sticks for later fetches
        let again = users.get_profile().await.unwrap();
        assert_eq!(again.name, "Johnny Doe");
    }

    #[tokio::test]
    async fn test_update_profile_rejects_bad_email() {
        let backend = Backend::for_tests();

        let err = backend
            .users()
            .update_profile(ProfilePatch {
                name: None,
                email: Some("broken".to_string()),
                avatar: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_password_reset_is_non_probing() {
        let backend = Backend::for_tests();
        let users = backend.users();

        let known = users.request_password_reset(DEMO_EMAIL).await.unwrap();
        let unknown = users
            .request_password_reset("stranger@example.com")
            .await
            .unwrap();
        assert_eq!(known, unknown);

        assert!(users.request_password_reset("nope").await.is_err());
    }
}
