pub mod authenticator;
pub mod session_store;
