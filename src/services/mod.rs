/*
 * Responsibility
 * - handler / extractor から使う service の公開
 */
pub mod request_context;
pub mod security_context;

pub use security_context::SecurityContext;
