use serde::Serialize;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenPair;

/// 비밀번호를 제외한 사용자 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub phone: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// 로그인/회원가입 응답
///
/// ```json
/// {
///   "user": { "id": 1, "username": "admin", "phone": "+10000000001" },
///   "access_token": "...",
///   "refresh_token": "...",
///   "expires_in": 900,
///   "token_type": "Bearer"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}
