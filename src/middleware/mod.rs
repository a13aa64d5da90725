/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 適用順は app.rs で決める (gateway → request_context → handler)
 */
pub mod gateway;
pub mod http;
pub mod request_context;
