use crate::config::Config;
use crate::db::user_repository::UserRepository;
use crate::services::session_store::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub config: Arc<Config>,
}
