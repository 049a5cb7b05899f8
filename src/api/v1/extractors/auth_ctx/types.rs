/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークン検証そのものは services::auth の責務
 * - 下流に見せるのは `user: { id }` だけ。他の claim は載せない
 */
use serde::Serialize;

use crate::services::auth::AuthenticatedIdentity;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// リクエストごとに作られ、作成後は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthCtx {
    pub user: AuthenticatedIdentity,
}

impl AuthCtx {
    pub fn new(user: AuthenticatedIdentity) -> Self {
        Self { user }
    }
}
