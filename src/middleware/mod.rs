/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: session cookie の検証ゲート
 * - http: request id / trace / body limit / timeout
 */
pub mod auth;
pub mod http;
