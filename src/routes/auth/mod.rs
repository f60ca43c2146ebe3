pub mod session;
pub mod signin;
pub mod signout;
pub mod signup;

pub use signin::{handle_signin, signin_page};
pub use signout::handle_signout;
pub use signup::handle_signup;
