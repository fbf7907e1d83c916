//! 에러 타입 모듈
//!
//! [`errors::AppError`]를 재export 합니다.

pub mod errors;

pub use errors::*;
