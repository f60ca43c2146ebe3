use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use crate::{
    error::{AuthError, ErrorKind},
    models::credentials::SignInCredentials,
    responses::{found, LoginPage, INVALID_CREDENTIALS_NOTICE, INVALID_USER_DATA},
    services::authenticator::authenticate,
    state::AppState,
    utils::form_data::FormData,
};

use super::session::SessionContext;

pub async fn signin_page() -> Response {
    LoginPage::blank().into_response()
}

pub async fn handle_signin(
    State(state): State<AppState>,
    session: SessionContext,
    body: Bytes,
) -> Response {
    match sign_in(&state, session, &body).await {
        Ok(jar) => (jar, found(&state.config.home_path)).into_response(),
        Err(err) => match err.kind() {
            ErrorKind::Validation => {
                warn!(error = %err, "rejected sign-in request");
                INVALID_USER_DATA.into_response()
            }
            ErrorKind::Authentication => {
                debug!("sign-in refused");
                LoginPage::with_error(Some(INVALID_CREDENTIALS_NOTICE)).into_response()
            }
            ErrorKind::Internal => {
                error!(error = ?err, "sign-in failed");
                LoginPage::with_error(Some(INVALID_CREDENTIALS_NOTICE)).into_response()
            }
        },
    }
}

/// Parses the body, checks the credentials and opens a session.
/// Returns the cookie jar carrying the new session.
pub async fn sign_in(state: &AppState, session: SessionContext, body: &[u8]) -> Result<CookieJar, AuthError> {
    let data = FormData::parse(body)?;
    let creds = SignInCredentials::from_form(&data)?;

    let user = match creds.pair() {
        Some((email, password)) => authenticate(state.db.as_ref(), email, password).await?,
        None => None,
    }
    .ok_or(AuthError::InvalidCredentials)?;

    state.db.update_last_login(user.id, OffsetDateTime::now_utc()).await?;
    let jar = session.login(&user).await?;

    info!(user_id = %user.id, "user signed in");
    Ok(jar)
}
