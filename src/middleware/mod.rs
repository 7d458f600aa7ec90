pub mod auth;
pub mod response;

pub use auth::{token_auth_middleware, AuthStaff, TOKEN_HEADER};
pub use response::{ApiResponse, ApiResult};
