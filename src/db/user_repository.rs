use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::user::{NewUser, User};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("username `{0}` is already taken")]
    Duplicate(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Fails with `RepositoryError::Duplicate` when the username is taken.
    async fn create_user(&self, new_user: &NewUser) -> Result<User, RepositoryError>;

    async fn update_last_login(&self, user_id: Uuid, at: OffsetDateTime) -> Result<(), RepositoryError>;
}
