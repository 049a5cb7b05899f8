pub mod access_jwt;
pub mod factory;
pub mod failure;

pub use access_jwt::{AuthenticatedIdentity, TokenAuthenticator};
pub use factory::build_authenticator;
pub use failure::{AuthFailure, AuthFailureKind};
