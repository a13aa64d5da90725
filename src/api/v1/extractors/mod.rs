mod inner_route;
mod security_ctx;

pub use inner_route::InnerRoute;
pub use security_ctx::{SecurityCtx, SecurityCtxExtractor};
