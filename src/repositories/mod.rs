//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 저장소는 trait 뒤에 있으며, 서비스에 `Arc<dyn ...>`로 주입됩니다.
//!
//! - [`users`] - 식별 정보 저장소 (추가 전용)
//! - [`tokens`] - 활성 리프레시 토큰 목록

pub mod tokens;
pub mod users;
