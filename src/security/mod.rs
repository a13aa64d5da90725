/*!
 * Security primitives shared with the gateway / auth middleware
 *
 * Public API:
 * - constants (attribute keys, token header / prefix, metadata key)
 * - RequestAttributes, RequestLike, RequestSnapshot
 * - InnerAuth, inner_auth
 */

mod attributes;
pub mod constants;
mod inner_auth;
mod request;

pub use attributes::RequestAttributes;
pub use inner_auth::{InnerAuth, inner_auth};
pub use request::{RequestLike, RequestSnapshot};
