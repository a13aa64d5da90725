/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use crate::config::Config;
use crate::services::SecurityContext;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub security: Arc<SecurityContext>,
}

impl AppState {
    pub fn new(security: Arc<SecurityContext>) -> Self {
        Self { security }
    }

    pub fn from_config(config: &Config) -> Self {
        let security =
            SecurityContext::new(config.token_header.clone(), config.token_prefix.clone());
        Self::new(Arc::new(security))
    }
}
