/*
 * Responsibility
 * - GET /me (認証必須)
 * - middleware が載せた AuthCtx をそのまま返す: `{ "user": { "id": ... } }`
 */
use axum::Json;

use crate::api::v1::extractors::{AuthCtx, AuthCtxExtractor};

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<AuthCtx> {
    Json(ctx)
}
