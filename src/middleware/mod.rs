pub mod auth;
pub mod policy;
pub mod response;

pub use auth::{authorize, AuthUser, Gate};
pub use policy::{Access, ResourceKind, Verb};
pub use response::{ApiResponse, ApiResult};
