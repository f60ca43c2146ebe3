use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::user_repository::{RepositoryError, UserRepository};
use crate::models::user::{NewUser, User};

/// In-memory user store with the same uniqueness rule as the `users` table.
#[derive(Default)]
pub struct MockDb {
    users: Mutex<Vec<User>>,
}

impl MockDb {
    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn deactivate(&self, username: &str) {
        for user in self.users.lock().unwrap().iter_mut() {
            if user.username == username {
                user.is_active = false;
            }
        }
    }
}

#[async_trait]
impl UserRepository for MockDb {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(RepositoryError::Duplicate(new_user.username.clone()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            is_active: true,
            date_joined: OffsetDateTime::now_utc(),
            last_login: None,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_last_login(&self, user_id: Uuid, at: OffsetDateTime) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.last_login = Some(at);
        }
        Ok(())
    }
}
