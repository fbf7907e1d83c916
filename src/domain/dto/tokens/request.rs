use serde::Deserialize;

/// 토큰 갱신 요청 DTO
///
/// 빈 토큰은 400이 아니라 401이어야 하므로 검증은 `TokenService::rotate_refresh_token`에 맡깁니다.
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: String,
}

/// 로그아웃 요청 DTO
///
/// 빈 토큰 검사는 `TokenService::revoke`가 직접 수행합니다.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh_token: String,
}
