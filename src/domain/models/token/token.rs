//! JWT 클레임 구조체 및 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰이 공유하는 클레임과, 클라이언트에 전달되는
//! 토큰 쌍을 정의합니다.
use serde::{Deserialize, Serialize};

/// 토큰 종류
///
/// 서명 키와 별개로 클레임에 기록되어, 두 키가 같더라도 종류가 섞이지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `id`: 사용자 ID
/// - `username`: 사용자 이름
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `typ`: 토큰 종류 (`access` / `refresh`)
/// - `jti`: 토큰 고유 식별자 (리프레시 토큰에만 포함)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: i64,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub typ: TokenKind,
    /// 같은 초에 같은 사용자에게 발급된 리프레시 토큰도 서로 다른 문자열이 되도록 합니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl TokenClaims {
    /// 사용자 정보로 클레임을 구성합니다. 만료 시각은 `i64` 범위에서 포화됩니다.
    pub fn for_user(id: i64, username: &str, typ: TokenKind, iat: i64, ttl_seconds: i64) -> Self {
        Self {
            id,
            username: username.to_string(),
            iat,
            exp: iat.saturating_add(ttl_seconds),
            typ,
            jti: None,
        }
    }

    pub fn with_jti(mut self, jti: String) -> Self {
        self.jti = Some(jti);
        self
    }

    /// `now` 시점에 만료되었는지 확인합니다. 만료 시각 당일 초까지는 유효합니다.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }
}

/// JWT 토큰 쌍 구조체
///
/// OAuth 2.0 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (1회용 토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
    /// 항상 "Bearer"
    pub token_type: String,
}

impl TokenPair {
    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            token_type: "Bearer".to_string(),
        }
    }
}
