//! 토큰 게이트 백엔드
//!
//! JWT 액세스/리프레시 토큰을 발급하고 검증하는 인증 게이트와,
//! 그 뒤에 위치한 소수의 REST 엔드포인트를 제공합니다.
//!
//! # Features
//!
//! - **JWT 인증**: 15분 액세스 토큰 + 7일 리프레시 토큰, 키 분리
//! - **리프레시 토큰 회전**: 각 리프레시 토큰은 정확히 한 번만 사용 가능
//! - **폐기(로그아웃)**: 활성 목록에서 즉시 제거
//! - **만료 정리**: 활성 목록의 만료 항목을 지연/주기적으로 제거
//! - **주입형 저장소**: 토큰 목록과 사용자 저장소 모두 trait 뒤에 위치
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← TokenService / UserService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 활성 리프레시 토큰 목록 / 사용자 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use token_gate_backend::config::JwtConfig;
//! use token_gate_backend::repositories::tokens::InMemoryRefreshTokenStore;
//! use token_gate_backend::services::auth::TokenService;
//!
//! let token_service = TokenService::new(
//!     JwtConfig::from_env()?,
//!     Arc::new(InMemoryRefreshTokenStore::new()),
//! );
//! let tokens = token_service.issue_token_pair(&user)?;
//! let rotated = token_service.rotate_refresh_token(&tokens.refresh_token)?;
//! ```

pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
