//! session token (cookie `token`) 検証 → AuthCtx を extensions に入れる
//!
//! - 成功: `AuthCtx { user: { id } }` を request extensions に格納して次へ
//! - 失敗: ここで打ち切り、`{ message, success: false }` を返す (handler は実行されない)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::middleware::auth::cookie::token_cookie;
use crate::state::AppState;

/// 保護したい Router に認証ゲートを掛ける。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = state.auth.authenticate(token_cookie(req.headers()))?;

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(identity));

    Ok(next.run(req).await)
}
