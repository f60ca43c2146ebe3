use std::{convert::Infallible, sync::Arc};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration as TimeDuration;
use tracing::warn;

use crate::{
    models::user::User,
    services::session_store::{SessionData, SessionStore},
    state::AppState,
};

pub const SESSION_COOKIE: &str = "sessionid";

/// The caller's session, handed to each handler explicitly.
///
/// Holds the store and the incoming cookies; `login` and `logout` return the
/// jar that has to go out with the response.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    jar: CookieJar,
    secure: bool,
    max_age: i64,
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(SessionContext {
            store: state.sessions.clone(),
            jar: CookieJar::from_headers(&parts.headers),
            secure: state.config.session_cookie_secure,
            max_age: state.config.session_cookie_age,
        })
    }
}

impl SessionContext {
    pub fn key(&self) -> Option<&str> {
        self.jar.get(SESSION_COOKIE).map(|c| c.value())
    }

    pub async fn current(&self) -> anyhow::Result<Option<SessionData>> {
        match self.key() {
            Some(key) => self.store.load(key).await,
            None => Ok(None),
        }
    }

    /// Replaces whatever session the request carried with a fresh one for `user`.
    pub async fn login(self, user: &User) -> anyhow::Result<CookieJar> {
        if let Some(old) = self.key() {
            self.store.delete(old).await?;
        }

        let key = self.store.create(SessionData::for_user(user)).await?;

        let cookie = Cookie::build((SESSION_COOKIE, key))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(TimeDuration::seconds(self.max_age))
            .build();

        Ok(self.jar.add(cookie))
    }

    /// Drops the current session, if any. Store failures are logged, never returned.
    pub async fn logout(self) -> CookieJar {
        if let Some(key) = self.key() {
            if let Err(e) = self.store.delete(key).await {
                warn!(error = ?e, "failed to delete session on logout");
            }
        }

        self.jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
    }
}
