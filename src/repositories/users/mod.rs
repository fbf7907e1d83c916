//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 인터페이스와 메모리 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo = InMemoryUserRepository::with_seed_data();
//! let user = user_repo.find_by_credentials("admin", "1234", None).await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
