//! # Profile Commands
//!
//! Account and profile operations against the mocked user directory.

use tracing::debug;

use crate::error::ApiError;
use foodfast_api::{Backend, ProfilePatch};
use foodfast_core::types::User;

/// Attempts a login with the given credentials.
pub async fn login(backend: &Backend, email: &str, password: &str) -> Result<User, ApiError> {
    debug!(email = %email, "login command");
    Ok(backend.users().login(email, password).await?)
}

/// Registers a new account.
pub async fn register(
    backend: &Backend,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    debug!(email = %email, "register command");
    Ok(backend.users().register(name, email, password).await?)
}

/// Fetches the session profile.
pub async fn get_profile(backend: &Backend) -> Result<User, ApiError> {
    debug!("get_profile command");
    Ok(backend.users().get_profile().await?)
}

/// Applies a partial update to the session profile.
pub async fn update_profile(backend: &Backend, patch: ProfilePatch) -> Result<User, ApiError> {
    debug!("update_profile command");
    Ok(backend.users().update_profile(patch).await?)
}

/// Requests a password-reset email.
pub async fn request_password_reset(backend: &Backend, email: &str) -> Result<String, ApiError> {
    debug!(email = %email, "request_password_reset command");
    Ok(backend.users().request_password_reset(email).await?)
}
