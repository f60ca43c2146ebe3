use anyhow::anyhow;
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::db::user_repository::UserRepository;
use crate::error::AuthError;
use crate::models::user::{NewUser, User};
use crate::utils::password::{hash_password, verify_password};

/// Argon2 is CPU-bound; run it on the blocking pool instead of a runtime worker.
async fn hash_blocking(password: &str) -> Result<String, AuthError> {
    let password = password.to_string();
    let hashed = spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| anyhow!("password hashing task failed: {}", e))?;
    Ok(hashed.map_err(|e| anyhow!("password hashing failed: {}", e))?)
}

async fn verify_blocking(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();
    let verified = spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| anyhow!("password verification task failed: {}", e))?;
    Ok(verified.map_err(|e| anyhow!("stored password hash is malformed: {}", e))?)
}

/// Looks up `username` and checks `password` against the stored hash.
///
/// `Ok(None)` covers every "these credentials don't open an account" case:
/// unknown user, wrong password, unusable password and inactive account.
/// Store failures and malformed hashes are `Err`.
pub async fn authenticate(
    users: &dyn UserRepository,
    username: &str,
    password: &str,
) -> Result<Option<User>, AuthError> {
    let user = match users.find_user_by_username(username).await? {
        Some(user) => user,
        None => {
            // Hash anyway so an unknown username costs as much as a wrong password.
            let _ = hash_blocking(password).await;
            debug!("authentication failed: unknown user");
            return Ok(None);
        }
    };

    if user.password_hash.trim().is_empty() {
        debug!(user_id = %user.id, "authentication failed: unusable password");
        return Ok(None);
    }

    let matched = verify_blocking(password, &user.password_hash).await?;

    if !matched {
        debug!(user_id = %user.id, "authentication failed: wrong password");
        return Ok(None);
    }

    if !user.is_active {
        debug!(user_id = %user.id, "authentication failed: inactive user");
        return Ok(None);
    }

    Ok(Some(user))
}

/// Hashes `password` and stores a new account whose username and e-mail are both `email`.
pub async fn create_user(users: &dyn UserRepository, email: &str, password: &str) -> Result<User, AuthError> {
    let password_hash = hash_blocking(password).await?;
    let user = users.create_user(&NewUser::from_email(email, password_hash)).await?;
    Ok(user)
}
