/*!
 * Security context extractor
 *
 * Responsibility:
 * - request から取り出したセキュリティ情報 (SecurityCtx) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - SecurityCtx
 * - SecurityCtxExtractor
 */

mod core;
mod types;

pub use self::core::SecurityCtxExtractor;
pub use types::SecurityCtx;
