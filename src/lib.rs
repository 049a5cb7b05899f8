/*
 * Responsibility
 * - session cookie の認証ゲートと、それを載せる HTTP サービス一式を公開する
 * - main.rs は app::run() を呼ぶだけ
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
