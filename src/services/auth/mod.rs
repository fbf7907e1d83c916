//! 인증 및 보안 서비스 모듈
//!
//! JWT 액세스/리프레시 토큰의 발급, 검증, 회전, 폐기를 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 액세스/리프레시 키 분리
//! - 리프레시 토큰 1회 사용 (회전 시 이전 토큰 무효화)
//! - 활성 리프레시 토큰 목록의 만료 항목 정리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let tokens = token_service.issue_token_pair(&user)?;
//! let claims = token_service.validate_access_token(&tokens.access_token)?;
//! ```

pub mod token_service;

pub use token_service::*;
