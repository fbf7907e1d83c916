//! 인증 요청관련 DTO
//!
//! 필드가 누락된 요청도 역직렬화는 성공시키고, `validator`로 400 응답을 만듭니다.
use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
}

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    /// 주어진 경우에만 전화번호까지 대조합니다.
    #[serde(default)]
    pub phone: Option<String>,
}
