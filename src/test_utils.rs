use std::sync::Arc;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use tracing::Level;

use crate::{
    config::Config,
    db::{mock_db::MockDb, user_repository::UserRepository},
    routes::{self, auth::session::{SessionContext, SESSION_COOKIE}},
    services::{authenticator::create_user, session_store::MemorySessionStore},
    state::AppState,
};

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/accounts_test".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        home_path: "/home".to_string(),
        session_cookie_secure: false,
        session_cookie_age: 3600,
        log_level: Level::DEBUG,
    }
}

pub fn test_state() -> (AppState, Arc<MockDb>, Arc<MemorySessionStore>) {
    let db = Arc::new(MockDb::default());
    let sessions = Arc::new(MemorySessionStore::default());
    let state = AppState {
        db: db.clone(),
        sessions: sessions.clone(),
        config: Arc::new(test_config()),
    };
    (state, db, sessions)
}

pub fn test_state_with_db(db: impl UserRepository + 'static) -> (AppState, Arc<MemorySessionStore>) {
    let sessions = Arc::new(MemorySessionStore::default());
    let state = AppState {
        db: Arc::new(db),
        sessions: sessions.clone(),
        config: Arc::new(test_config()),
    };
    (state, sessions)
}

pub fn test_app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn seed_user(db: &MockDb, email: &str, password: &str) {
    create_user(db, email, password).await.unwrap();
}

pub async fn session_context(state: &AppState) -> SessionContext {
    let (mut parts, _) = Request::new(()).into_parts();
    match SessionContext::from_request_parts(&mut parts, state).await {
        Ok(ctx) => ctx,
        Err(never) => match never {},
    }
}

fn request(method: Method, uri: &str, content_type: Option<&str>, body: Body, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    if let Some(key) = session {
        builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, key));
    }
    builder.body(body).unwrap()
}

pub fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, None, Body::empty(), session)
}

pub fn post_json(uri: &str, body: &str, session: Option<&str>) -> Request<Body> {
    request(
        Method::POST,
        uri,
        Some("application/json"),
        Body::from(body.to_string()),
        session,
    )
}

pub fn post_form(uri: &str, body: &str, session: Option<&str>) -> Request<Body> {
    request(
        Method::POST,
        uri,
        Some("application/x-www-form-urlencoded"),
        Body::from(body.to_string()),
        session,
    )
}

/// Session key set by the response, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE);
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.strip_prefix(prefix.as_str()))
        .map(|rest| rest.split(';').next().unwrap_or("").to_string())
        .find(|key| !key.is_empty())
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
