use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

use crate::services::auth::failure::{AuthFailure, AuthFailureKind};

/// Session token claims.
///
/// Only `userId` is read here. `exp` is enforced by `jsonwebtoken::Validation`
/// directly from the raw payload, so it does not need a field.
#[derive(Debug, Clone, Deserialize)]
struct SessionClaims {
    // Keep as Value: the issuer may put either a string or a number here.
    #[serde(default, rename = "userId")]
    user_id: Option<serde_json::Value>,
}

/// User identifier carried by a session token.
///
/// Serialises back to the same JSON shape it was issued with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(serde_json::Number),
}

impl UserId {
    /// `None` for anything that cannot identify a user (null, "", 0, bool, object, array).
    fn from_claim(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) if !s.is_empty() => Some(Self::Text(s)),
            serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(Self::Number(n)),
            _ => None,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// The only data from a verified token that is passed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedIdentity {
    pub id: UserId,
}

/// HS256 session-token verifier.
///
/// - The secret is consumed at construction and only lives inside the decoding key.
/// - Key material is not printable via Debug.
/// - Stateless: `authenticate` takes `&self` and can be shared across tasks behind an `Arc`.
#[derive(Clone)]
pub struct TokenAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenAuthenticator")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl TokenAuthenticator {
    pub const ALGORITHM: Algorithm = Algorithm::HS256;

    pub fn new(secret: &SecretString) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Self::ALGORITHM);
        // exp and nbf are checked when present, with no skew tolerance.
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.required_spec_claims = HashSet::new();
        // Session tokens carry no audience; without this a token that has one is rejected.
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Decide whether `raw_token` identifies a user.
    ///
    /// Every failure is classified into exactly one [`AuthFailureKind`] and reported
    /// through `tracing`. Neither the token nor the secret is ever logged.
    pub fn authenticate(
        &self,
        raw_token: Option<&str>,
    ) -> Result<AuthenticatedIdentity, AuthFailure> {
        let result = self.verify(raw_token);

        match &result {
            Ok(identity) => tracing::debug!(user_id = %identity.id, "session token accepted"),
            Err(failure) if failure.kind() == AuthFailureKind::InternalError => {
                tracing::error!(
                    kind = %failure.kind(),
                    reason = failure.message(),
                    "authentication failed"
                );
            }
            Err(failure) => {
                tracing::warn!(
                    kind = %failure.kind(),
                    reason = failure.message(),
                    "authentication rejected"
                );
            }
        }

        result
    }

    fn verify(&self, raw_token: Option<&str>) -> Result<AuthenticatedIdentity, AuthFailure> {
        let token = match raw_token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthFailure::unauthenticated()),
        };

        let data =
            jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
                .map_err(|err| {
                    let kind = classify(&err);
                    if kind == AuthFailureKind::InternalError {
                        tracing::error!(error_kind = ?err.kind(), "session token verifier error");
                    }
                    AuthFailure::new(kind)
                })?;

        // Signature and exp are fine at this point; the identity claim is a separate check.
        let id = data
            .claims
            .user_id
            .and_then(UserId::from_claim)
            .ok_or_else(AuthFailure::invalid)?;

        Ok(AuthenticatedIdentity { id })
    }
}

/// Map a verifier error to the failure taxonomy.
///
/// Anything about the token itself is `TokenInvalid`; anything about keys,
/// crypto backends or error kinds this crate does not know is `InternalError`.
pub fn classify(err: &jsonwebtoken::errors::Error) -> AuthFailureKind {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthFailureKind::TokenExpired,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::InvalidClaimFormat(_)
        | ErrorKind::ImmatureSignature
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject => AuthFailureKind::TokenInvalid,
        _ => AuthFailureKind::InternalError,
    }
}
