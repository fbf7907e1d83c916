//! 도메인 엔티티 모듈
//!
//! 식별 정보 저장소가 소유하는 엔티티들을 정의합니다.

pub mod users;

pub use users::{NewUser, User};
