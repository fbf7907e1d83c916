//! # Configuration Module
//!
//! 서비스 설정을 관리하는 모듈입니다. 모든 설정은 환경 변수(.env 파일 포함)에서 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 백그라운드 정리 주기
//! - [`auth_config`] - JWT 서명 키와 토큰 유효 기간
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production / 기본값 production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="3000"
//! export WORKERS="4"
//! export REFRESH_SWEEP_INTERVAL_SECS="300"
//!
//! # JWT 설정 (운영 환경 필수)
//! export JWT_ACCESS_SECRET="access-secret"
//! export JWT_REFRESH_SECRET="refresh-secret"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
