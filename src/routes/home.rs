use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::responses::found;

use super::auth::session::SessionContext;
use super::SIGNIN_PATH;

pub async fn home(session: SessionContext) -> Response {
    match session.current().await {
        Ok(Some(data)) => format!("Signed in as {}", data.username).into_response(),
        Ok(None) => found(SIGNIN_PATH),
        Err(e) => {
            error!(error = ?e, "failed to load session");
            found(SIGNIN_PATH)
        }
    }
}
