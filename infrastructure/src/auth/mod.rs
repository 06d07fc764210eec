//! Authentication adapters implementing the
//! [`Authenticator`](polls_application::Authenticator) port.

mod token;

pub use token::TokenAuthenticator;
