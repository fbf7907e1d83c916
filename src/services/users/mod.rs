//! 사용자 관리 서비스 모듈
//!
//! 회원가입과 자격 증명 확인을 담당합니다. 토큰 발급은 [`crate::services::auth`]의 몫입니다.

pub mod user_service;

pub use user_service::*;
