use thiserror::Error;

use crate::db::user_repository::RepositoryError;
use crate::utils::form_data::BodyError;

/// Coarse failure category, used by handlers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Internal,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user `{0}` already exists")]
    DuplicateUser(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingField(_) | AuthError::PasswordMismatch => ErrorKind::Validation,
            AuthError::InvalidCredentials => ErrorKind::Authentication,
            AuthError::DuplicateUser(_) | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(username) => AuthError::DuplicateUser(username),
            RepositoryError::Database(e) => AuthError::Internal(e.into()),
        }
    }
}

impl From<BodyError> for AuthError {
    fn from(err: BodyError) -> Self {
        AuthError::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_failures() {
        assert_eq!(AuthError::MissingField("email").kind(), ErrorKind::Validation);
        assert_eq!(AuthError::PasswordMismatch.kind(), ErrorKind::Validation);
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Authentication);
        assert_eq!(AuthError::DuplicateUser("a@b.com".into()).kind(), ErrorKind::Internal);
        assert_eq!(AuthError::Internal(anyhow::anyhow!("boom")).kind(), ErrorKind::Internal);
    }

    #[test]
    fn duplicate_repository_error_keeps_the_username() {
        let err: AuthError = RepositoryError::Duplicate("a@b.com".into()).into();
        assert!(matches!(err, AuthError::DuplicateUser(ref u) if u == "a@b.com"));
    }
}
