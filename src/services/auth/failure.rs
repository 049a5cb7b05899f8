/*
 * Responsibility
 * - 認証失敗の分類 (kind) と、クライアントに返す固定メッセージ
 * - HTTP status への対応付けは error.rs (境界) 側で行う
 */
use std::fmt;

use thiserror::Error;

/// Classification of a rejected authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthFailureKind {
    /// No token was supplied with the request.
    Unauthenticated,
    /// The token verified but its `exp` claim is in the past.
    TokenExpired,
    /// Malformed token, bad signature, unexpected algorithm or unusable claims.
    TokenInvalid,
    /// The verifier failed for a reason unrelated to the token itself.
    InternalError,
}

impl AuthFailureKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::Unauthenticated => "User not authenticated",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Invalid token",
            Self::InternalError => "Internal Server Error",
        }
    }

    /// Stable label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::TokenExpired => "token_expired",
            Self::TokenInvalid => "token_invalid",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for AuthFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified authentication failure.
///
/// Carries only the kind and its client-facing message, never the token or the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthFailure {
    kind: AuthFailureKind,
    message: &'static str,
}

impl AuthFailure {
    pub fn new(kind: AuthFailureKind) -> Self {
        Self {
            kind,
            message: kind.message(),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::new(AuthFailureKind::Unauthenticated)
    }

    pub fn invalid() -> Self {
        Self::new(AuthFailureKind::TokenInvalid)
    }

    pub fn kind(&self) -> AuthFailureKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl From<AuthFailureKind> for AuthFailure {
    fn from(kind: AuthFailureKind) -> Self {
        Self::new(kind)
    }
}
