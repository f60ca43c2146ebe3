use axum::response::IntoResponse;
use tracing::info;

use crate::responses::LoginPage;

use super::session::SessionContext;

/// Ends the session unconditionally and shows the login page with its error flag set.
pub async fn handle_signout(session: SessionContext) -> impl IntoResponse {
    let had_session = session.key().is_some();
    let jar = session.logout().await;
    info!(had_session, "user signed out");

    (jar, LoginPage::with_error(None))
}
