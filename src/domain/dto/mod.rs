//! 요청/응답 DTO 모듈

pub mod tokens;
pub mod users;

pub use tokens::{ApiResponse, LogoutRequest, RefreshTokenRequest};
pub use users::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
