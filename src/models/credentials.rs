use crate::error::AuthError;
use crate::utils::form_data::FormData;

/// The key must be present; its value may still be an explicit `null`.
fn require(data: &FormData, key: &'static str) -> Result<Option<String>, AuthError> {
    data.field(key)
        .map(|value| value.map(str::to_string))
        .ok_or(AuthError::MissingField(key))
}

pub struct SignInCredentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignInCredentials {
    pub fn from_form(data: &FormData) -> Result<Self, AuthError> {
        Ok(SignInCredentials {
            email: require(data, "email")?,
            password: require(data, "password")?,
        })
    }

    /// `None` if either value was sent as `null`; such a pair never authenticates.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }
}

pub struct SignUpCredentials {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl SignUpCredentials {
    pub fn from_form(data: &FormData) -> Result<Self, AuthError> {
        Ok(SignUpCredentials {
            email: require(data, "email")?,
            password: require(data, "password")?,
            confirm_password: require(data, "confirm_password")?,
        })
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// `None` if the e-mail or password was sent as `null`.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_email_and_password() {
        let missing_password = FormData::parse(b"email=u%40example.com").unwrap();
        let missing_email = FormData::parse(br#"{"password":"pw123"}"#).unwrap();

        assert!(matches!(
            SignInCredentials::from_form(&missing_password),
            Err(AuthError::MissingField("password"))
        ));
        assert!(matches!(
            SignInCredentials::from_form(&missing_email),
            Err(AuthError::MissingField("email"))
        ));
    }

    #[test]
    fn null_values_are_present_but_unusable() {
        let data = FormData::parse(br#"{"email":null,"password":"pw123"}"#).unwrap();
        let creds = SignInCredentials::from_form(&data).unwrap();

        assert_eq!(creds.email, None);
        assert!(creds.pair().is_none());
    }

    #[test]
    fn sign_up_requires_confirmation() {
        let data = FormData::parse(b"email=a%40b.com&password=x").unwrap();

        assert!(matches!(
            SignUpCredentials::from_form(&data),
            Err(AuthError::MissingField("confirm_password"))
        ));
    }

    #[test]
    fn sign_up_compares_passwords_exactly() {
        let data = FormData::parse(b"email=a%40b.com&password=x&confirm_password=X").unwrap();
        let creds = SignUpCredentials::from_form(&data).unwrap();

        assert!(!creds.passwords_match());
    }

    #[test]
    fn null_password_does_not_match_a_real_one() {
        let data = FormData::parse(br#"{"email":"a@b.com","password":null,"confirm_password":"x"}"#).unwrap();
        let creds = SignUpCredentials::from_form(&data).unwrap();

        assert!(!creds.passwords_match());
    }
}
