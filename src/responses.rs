use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

pub const INVALID_USER_DATA: &str = "User data is invalid";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const INVALID_SIGNUP_DATA: &str = "Invalid signup data";
pub const SIGNUP_FAILED: &str = "Something went wrong when signing up the user";
pub const SIGNUP_COMPLETE: &str = "Signup complete. User Logged in";

/// Notice shown above the form after a failed sign-in.
pub const INVALID_CREDENTIALS_NOTICE: &str = "Invalid user data";

const LOGIN_TEMPLATE: &str = include_str!("../templates/login.html");

/// The login view. `error` mirrors the template's error flag; `notice` is a one-shot message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginPage {
    pub error: bool,
    pub notice: Option<&'static str>,
}

impl LoginPage {
    pub fn blank() -> Self {
        LoginPage::default()
    }

    pub fn with_error(notice: Option<&'static str>) -> Self {
        LoginPage { error: true, notice }
    }

    pub fn render(&self) -> String {
        let notice = match self.notice {
            Some(msg) => format!(r#"<p class="notice">{}</p>"#, msg),
            None => String::new(),
        };
        let error = if self.error {
            r#"<p class="error" data-error-message="true">Invalid email or password.</p>"#
        } else {
            ""
        };

        LOGIN_TEMPLATE
            .replace("{{ notice }}", &notice)
            .replace("{{ error }}", error)
    }
}

impl IntoResponse for LoginPage {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

/// 302 with a `Location` header.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
