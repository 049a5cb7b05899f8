/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc で cheap)
 * - TokenAuthenticator は起動時に一度だけ作り、以後は読み取り専用
 */
use std::sync::Arc;

use crate::services::auth::TokenAuthenticator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<TokenAuthenticator>,
}

impl AppState {
    pub fn new(auth: Arc<TokenAuthenticator>) -> Self {
        Self { auth }
    }
}
