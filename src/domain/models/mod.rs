//! 도메인 모델 모듈
//!
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`auth`] - 미들웨어가 요청에 주입하는 인증 사용자 정보

pub mod auth;
pub mod token;

pub use auth::{AuthMode, AuthenticatedUser, OptionalUser};
pub use token::{TokenClaims, TokenKind, TokenPair};
