/// Factory: build `TokenAuthenticator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::TokenAuthenticator;

pub fn build_authenticator(config: &Config) -> Arc<TokenAuthenticator> {
    Arc::new(TokenAuthenticator::new(&config.jwt_access_secret))
}
