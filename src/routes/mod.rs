pub mod auth;
pub mod home;

use axum::{
    routing::{any, get, post},
    Router,
};

use crate::state::AppState;
use auth::{handle_signin, handle_signout, handle_signup, signin_page};

pub const SIGNIN_PATH: &str = "/signin";
pub const SIGNUP_PATH: &str = "/signup";
pub const SIGNOUT_PATH: &str = "/signout";

pub fn router(state: AppState) -> Router {
    let home_path = state.config.home_path.clone();

    Router::new()
        .route(SIGNIN_PATH, get(signin_page).post(handle_signin))
        .route(SIGNUP_PATH, post(handle_signup))
        .route(SIGNOUT_PATH, any(handle_signout))
        .route(&home_path, get(home::home))
        .with_state(state)
}
