/*
 * Responsibility
 * - v1 の公開ポイント (routes() / extractors の re-export など)
 */
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
