//! 활성 리프레시 토큰 리포지토리 모듈
//!
//! 발급된 리프레시 토큰 중 아직 사용(회전)되거나 폐기되지 않은 토큰의 목록을 관리합니다.
//!
//! # Features
//!
//! - **원자적 회수**: `take`는 존재 확인과 제거를 하나의 임계 구역에서 수행
//! - **만료 색인**: 만료 시각 순 색인으로 만료 항목을 지연/주기 정리
//! - **해시 키**: 토큰 원문 대신 SHA256 해시를 키로 저장
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{InMemoryRefreshTokenStore, RefreshTokenStore};
//!
//! let store = InMemoryRefreshTokenStore::new();
//! store.insert("refresh_token", expires_at);
//! assert!(store.take("refresh_token"));
//! assert!(!store.take("refresh_token"));
//! ```

pub mod token_repository;

pub use token_repository::*;
