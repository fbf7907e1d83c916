//! 도메인 계층
//!
//! - [`entities`] - 식별 정보 저장소가 소유하는 사용자 엔티티
//! - [`models`] - JWT 클레임, 토큰 쌍, 인증 사용자 정보
//! - [`dto`] - HTTP 요청/응답 구조체

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{NewUser, User};
pub use dto::{
    ApiResponse, AuthResponse, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest,
    UserResponse,
};
pub use models::{AuthMode, AuthenticatedUser, OptionalUser, TokenClaims, TokenKind, TokenPair};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_reexports() {
        let user = NewUser::new("alice", "pw", "+1").into_user(3);
        let response = ApiResponse::success(UserResponse::from(&user));
        let claims = TokenClaims::for_user(user.id, &user.username, TokenKind::Access, 0, 60);

        assert_eq!(response.data.map(|u| u.id), Some(3));
        assert_eq!(AuthenticatedUser::from(claims).username, "alice");
    }
}
