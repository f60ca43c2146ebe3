use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use anyhow::anyhow;
use axum_extra::extract::cookie::CookieJar;
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use crate::{
    error::AuthError,
    models::credentials::SignUpCredentials,
    responses::{INVALID_SIGNUP_DATA, INVALID_USER_DATA, PASSWORDS_DO_NOT_MATCH, SIGNUP_COMPLETE, SIGNUP_FAILED},
    services::authenticator::{authenticate, create_user},
    state::AppState,
    utils::form_data::FormData,
};

use super::session::SessionContext;

pub async fn handle_signup(
    State(state): State<AppState>,
    session: SessionContext,
    body: Bytes,
) -> Response {
    match sign_up(&state, session, &body).await {
        Ok(jar) => (jar, SIGNUP_COMPLETE).into_response(),
        Err(AuthError::MissingField(field)) => {
            warn!(field, "sign-up request missing field");
            INVALID_USER_DATA.into_response()
        }
        Err(AuthError::PasswordMismatch) => {
            debug!("sign-up passwords do not match");
            PASSWORDS_DO_NOT_MATCH.into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            warn!("new account could not be authenticated");
            INVALID_SIGNUP_DATA.into_response()
        }
        Err(err @ (AuthError::DuplicateUser(_) | AuthError::Internal(_))) => {
            error!(error = ?err, "sign-up failed");
            SIGNUP_FAILED.into_response()
        }
    }
}

/// Creates the account, then signs it straight in.
/// No duplicate check happens up front; the user store rejects taken usernames.
pub async fn sign_up(state: &AppState, session: SessionContext, body: &[u8]) -> Result<CookieJar, AuthError> {
    let data = FormData::parse(body)?;
    let creds = SignUpCredentials::from_form(&data)?;

    if !creds.passwords_match() {
        return Err(AuthError::PasswordMismatch);
    }

    let (email, password) = creds
        .pair()
        .ok_or_else(|| anyhow!("sign-up body sent null for email or password"))?;

    let created = create_user(state.db.as_ref(), email, password).await?;
    info!(user_id = %created.id, "user created");

    let user = authenticate(state.db.as_ref(), email, password)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    state.db.update_last_login(user.id, OffsetDateTime::now_utc()).await?;
    let jar = session.login(&user).await?;
    info!(user_id = %user.id, "user signed in after sign-up");
    Ok(jar)
}
