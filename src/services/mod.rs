//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 저장소를 주입받으며, `main`에서 한 번 생성되어
//! `web::Data`로 핸들러에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let token_service = TokenService::new(jwt_config, Arc::new(InMemoryRefreshTokenStore::new()));
//! let user_service = UserService::new(Arc::new(InMemoryUserRepository::with_seed_data()));
//! ```

pub mod users;
pub mod auth;
