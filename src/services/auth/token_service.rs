//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 발급, 검증, 회전(rotation), 폐기를 담당합니다.
//!
//! ## 토큰 수명 주기
//!
//! ```text
//! 액세스 토큰:   발급 ──▶ (15분 경과) 만료              서버 저장 없음
//!
//! 리프레시 토큰: 발급 ──▶ Active ──┬─ rotate ──▶ Redeemed   (새 토큰 쌍 반환)
//!                        (활성목록) ├─ revoke ──▶ Revoked
//!                                  └─ (7일 경과) Expired     (정리 시 제거)
//! ```
//!
//! `Redeemed`/`Revoked` 상태의 토큰은 서명과 만료 시각이 유효하더라도 다시 사용할 수 없습니다.

use std::sync::Arc;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::domain::entities::users::User;
use crate::domain::models::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::tokens::{fingerprint, RefreshTokenStore};

/// HMAC 서명 키 한 벌 (서명용 + 검증용)
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하며, 액세스 토큰과 리프레시 토큰은 서로 다른 키로 서명합니다.
/// 활성 리프레시 토큰 목록은 생성 시 주입받은 [`RefreshTokenStore`]가 관리합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let store = Arc::new(InMemoryRefreshTokenStore::new());
/// let token_service = TokenService::new(JwtConfig::from_env()?, store);
///
/// let pair = token_service.issue_token_pair(&user)?;
/// let claims = token_service.validate_access_token(&pair.access_token)?;
/// let rotated = token_service.rotate_refresh_token(&pair.refresh_token)?;
/// ```
pub struct TokenService {
    config: JwtConfig,
    access_keys: SigningKeys,
    refresh_keys: SigningKeys,
    store: Arc<dyn RefreshTokenStore>,
}

impl TokenService {
    pub fn new(config: JwtConfig, store: Arc<dyn RefreshTokenStore>) -> Self {
        Self {
            access_keys: SigningKeys::from_secret(&config.access_secret),
            refresh_keys: SigningKeys::from_secret(&config.refresh_secret),
            config,
            store,
        }
    }

    /// 액세스 토큰 유효 기간 (초)
    pub fn access_ttl_seconds(&self) -> i64 {
        self.config.access_ttl_seconds()
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// 부수 효과가 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue_access_token(&self, user: &User) -> AppResult<String> {
        self.issue_access_token_at(user, Utc::now().timestamp())
    }

    pub fn issue_access_token_at(&self, user: &User, now: i64) -> AppResult<String> {
        self.sign_access(user.id, &user.username, now)
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// 서명한 토큰을 활성 목록에 추가한 뒤 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue_refresh_token(&self, user: &User) -> AppResult<String> {
        self.issue_refresh_token_at(user, Utc::now().timestamp())
    }

    pub fn issue_refresh_token_at(&self, user: &User, now: i64) -> AppResult<String> {
        self.sign_refresh(user.id, &user.username, now)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 로그인과 회원가입 시 사용됩니다.
    pub fn issue_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        let now = Utc::now().timestamp();
        self.pair_for(user.id, &user.username, now)
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - 토큰이 비어있음
    /// * `AppError::InvalidToken` - 서명 불일치, 형식 오류, 만료
    pub fn validate_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.validate_access_token_at(token, Utc::now().timestamp())
    }

    pub fn validate_access_token_at(&self, token: &str, now: i64) -> AppResult<TokenClaims> {
        if token.is_empty() {
            return Err(AppError::Unauthenticated("access token is required".to_string()));
        }

        let claims = Self::decode_claims(token, &self.access_keys)
            .map_err(|e| AppError::InvalidToken(format!("invalid access token: {}", e)))?;

        if claims.typ != TokenKind::Access {
            return Err(AppError::InvalidToken("not an access token".to_string()));
        }

        if claims.is_expired_at(now) {
            return Err(AppError::InvalidToken("access token has expired".to_string()));
        }

        Ok(claims)
    }

    /// 리프레시 토큰 회전
    ///
    /// 제출된 토큰을 활성 목록에서 원자적으로 제거하고 새 토큰 쌍을 발급합니다.
    /// 같은 토큰으로 동시에 두 번 호출되면 정확히 한 쪽만 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - 토큰이 비어있음
    /// * `AppError::Forbidden` - 활성 목록에 없음(폐기/사용됨/미발급), 서명 불일치, 만료
    pub fn rotate_refresh_token(&self, token: &str) -> AppResult<TokenPair> {
        self.rotate_refresh_token_at(token, Utc::now().timestamp())
    }

    pub fn rotate_refresh_token_at(&self, token: &str, now: i64) -> AppResult<TokenPair> {
        if token.is_empty() {
            return Err(AppError::Unauthenticated("refresh token is required".to_string()));
        }

        let claims = Self::decode_claims(token, &self.refresh_keys).map_err(|e| {
            log::debug!("리프레시 토큰 서명 검증 실패 [{}]: {}", short_fingerprint(token), e);
            AppError::Forbidden("invalid refresh token".to_string())
        })?;

        if claims.typ != TokenKind::Refresh {
            return Err(AppError::Forbidden("not a refresh token".to_string()));
        }

        if claims.is_expired_at(now) {
            self.store.remove(token);
            log::info!("만료된 리프레시 토큰 제출 - user_id: {} [{}]", claims.id, short_fingerprint(token));
            return Err(AppError::Forbidden("refresh token has expired".to_string()));
        }

        if !self.store.take(token) {
            log::warn!(
                "활성 목록에 없는 리프레시 토큰 제출 - user_id: {} [{}]",
                claims.id,
                short_fingerprint(token)
            );
            return Err(AppError::Forbidden("refresh token is not active".to_string()));
        }

        let pair = self.pair_for(claims.id, &claims.username, now)?;
        log::info!("리프레시 토큰 회전 완료 - user_id: {}", claims.id);
        Ok(pair)
    }

    /// 리프레시 토큰 폐기 (로그아웃)
    ///
    /// 활성 목록에 있으면 제거합니다. 한 번도 유효하지 않았던 토큰이어도 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 토큰이 비어있음
    pub fn revoke(&self, token: &str) -> AppResult<()> {
        if token.is_empty() {
            return Err(AppError::BadRequest("refresh_token is required".to_string()));
        }

        self.store.remove(token);
        log::info!("리프레시 토큰 폐기 [{}]", short_fingerprint(token));
        Ok(())
    }

    /// 만료된 리프레시 토큰을 활성 목록에서 정리합니다.
    pub fn purge_expired(&self) -> usize {
        self.store.purge_expired(Utc::now().timestamp())
    }

    /// 현재 활성 리프레시 토큰 수
    pub fn active_refresh_tokens(&self) -> usize {
        self.store.len()
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    /// 스킴 이름은 대소문자를 구분하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - Bearer 스킴이 아니거나 토큰이 비어있음
    pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
        let (scheme, token) = auth_header
            .trim()
            .split_once(' ')
            .map(|(scheme, token)| (scheme, token.trim()))
            .unwrap_or((auth_header.trim(), ""));

        if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
            return Err(AppError::Unauthenticated("bearer token is required".to_string()));
        }

        Ok(token)
    }

    fn pair_for(&self, id: i64, username: &str, now: i64) -> AppResult<TokenPair> {
        let access_token = self.sign_access(id, username, now)?;
        let refresh_token = self.sign_refresh(id, username, now)?;

        Ok(TokenPair::bearer(access_token, refresh_token, self.access_ttl_seconds()))
    }

    fn sign_access(&self, id: i64, username: &str, now: i64) -> AppResult<String> {
        let claims =
            TokenClaims::for_user(id, username, TokenKind::Access, now, self.config.access_ttl_seconds());

        encode(&Header::new(Algorithm::HS256), &claims, &self.access_keys.encoding)
            .context("액세스 토큰 생성 실패")
    }

    fn sign_refresh(&self, id: i64, username: &str, now: i64) -> AppResult<String> {
        let claims =
            TokenClaims::for_user(id, username, TokenKind::Refresh, now, self.config.refresh_ttl_seconds())
                .with_jti(Uuid::new_v4().to_string());

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.refresh_keys.encoding)
            .with_context(|| format!("리프레시 토큰 생성 실패 - user_id: {}", id))?;

        self.store.insert(&token, claims.exp);
        log::debug!("리프레시 토큰 발급 - user_id: {} [{}]", id, short_fingerprint(&token));
        Ok(token)
    }

    /// 서명만 검증합니다. 만료는 호출자가 주어진 시각으로 확인합니다.
    fn decode_claims(token: &str, keys: &SigningKeys) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<TokenClaims>(token, &keys.decoding, &validation).map(|data| data.claims)
    }
}

fn short_fingerprint(token: &str) -> String {
    fingerprint(token)[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;
    use crate::domain::entities::users::NewUser;
    use crate::repositories::tokens::InMemoryRefreshTokenStore;

    const DAY: i64 = 24 * 60 * 60;

    fn service() -> TokenService {
        TokenService::new(
            JwtConfig::with_secrets("test-access-secret", "test-refresh-secret"),
            Arc::new(InMemoryRefreshTokenStore::new()),
        )
    }

    fn alice() -> User {
        NewUser::new("alice", "pw", "+1555").into_user(7)
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = service();
        let token = service.issue_access_token(&alice()).unwrap();

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(claims.jti.is_none());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_access_token_does_not_touch_active_set() {
        let service = service();
        service.issue_access_token(&alice()).unwrap();

        assert_eq!(service.active_refresh_tokens(), 0);
    }

    #[test]
    fn test_empty_access_token_is_unauthenticated() {
        let result = service().validate_access_token("");

        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }

    #[test]
    fn test_garbage_access_token_is_invalid() {
        let result = service().validate_access_token("not.a.jwt");

        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_expired_access_token_is_invalid() {
        let service = service();
        let issued_at = Utc::now().timestamp();
        let token = service.issue_access_token_at(&alice(), issued_at).unwrap();

        assert!(service.validate_access_token_at(&token, issued_at + 15 * 60).is_ok());
        let result = service.validate_access_token_at(&token, issued_at + 15 * 60 + 1);
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_key_separation() {
        let service = service();
        let access = service.issue_access_token(&alice()).unwrap();
        let refresh = service.issue_refresh_token(&alice()).unwrap();

        assert!(matches!(
            service.validate_access_token(&refresh),
            Err(AppError::InvalidToken(_))
        ));
        assert!(matches!(
            service.rotate_refresh_token(&access),
            Err(AppError::Forbidden(_))
        ));
        // 액세스 토큰으로 회전 시도한 뒤에도 리프레시 토큰은 그대로 유효
        assert!(service.rotate_refresh_token(&refresh).is_ok());
    }

    #[test]
    fn test_token_signed_with_foreign_secret_is_rejected() {
        let other = TokenService::new(
            JwtConfig::with_secrets("other-access", "other-refresh"),
            Arc::new(InMemoryRefreshTokenStore::new()),
        );
        let service = service();

        let foreign_access = other.issue_access_token(&alice()).unwrap();
        assert!(matches!(
            service.validate_access_token(&foreign_access),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_refresh_token_is_single_use() {
        let service = service();
        let refresh = service.issue_refresh_token(&alice()).unwrap();

        let pair = service.rotate_refresh_token(&refresh).unwrap();
        assert_ne!(pair.refresh_token, refresh);
        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 15 * 60);

        let second = service.rotate_refresh_token(&refresh);
        assert!(matches!(second, Err(AppError::Forbidden(_))));

        // 새로 받은 토큰은 사용 가능
        assert!(service.rotate_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_rotation_issues_valid_access_token_for_same_identity() {
        let service = service();
        let refresh = service.issue_refresh_token(&alice()).unwrap();

        let pair = service.rotate_refresh_token(&refresh).unwrap();
        let claims = service.validate_access_token(&pair.access_token).unwrap();
        assert_eq!((claims.id, claims.username.as_str()), (7, "alice"));
        assert_eq!(service.active_refresh_tokens(), 1);
    }

    #[test]
    fn test_refresh_tokens_issued_in_same_second_differ() {
        let service = service();
        let now = Utc::now().timestamp();
        let a = service.issue_refresh_token_at(&alice(), now).unwrap();
        let b = service.issue_refresh_token_at(&alice(), now).unwrap();

        assert_ne!(a, b);
        assert_eq!(service.active_refresh_tokens(), 2);
    }

    #[test]
    fn test_empty_refresh_token_is_unauthenticated() {
        let result = service().rotate_refresh_token("");

        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }

    #[test]
    fn test_revoke_then_rotate_is_forbidden() {
        let service = service();
        let refresh = service.issue_refresh_token(&alice()).unwrap();

        service.revoke(&refresh).unwrap();
        assert!(matches!(
            service.rotate_refresh_token(&refresh),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_revoke_is_idempotent_and_accepts_unknown_tokens() {
        let service = service();

        assert!(service.revoke("never-issued").is_ok());
        assert!(service.revoke("never-issued").is_ok());
        assert!(matches!(
            service.rotate_refresh_token("never-issued"),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_revoke_requires_token() {
        let result = service().revoke("");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_refresh_token_expiry_boundary() {
        let service = service();
        let issued_at = Utc::now().timestamp();

        let at_boundary = service.issue_refresh_token_at(&alice(), issued_at).unwrap();
        assert!(service.rotate_refresh_token_at(&at_boundary, issued_at + 7 * DAY).is_ok());

        let past_boundary = service.issue_refresh_token_at(&alice(), issued_at).unwrap();
        let result = service.rotate_refresh_token_at(&past_boundary, issued_at + 7 * DAY + 1);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_expired_refresh_token_in_active_set_is_forbidden() {
        let service = service();
        let now = Utc::now().timestamp();
        let stale = service.issue_refresh_token_at(&alice(), now - 8 * DAY).unwrap();

        assert_eq!(service.active_refresh_tokens(), 1);
        let result = service.rotate_refresh_token_at(&stale, now);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert_eq!(service.active_refresh_tokens(), 0);
    }

    #[test]
    fn test_purge_expired_drops_stale_entries() {
        let service = service();
        let now = Utc::now().timestamp();
        service.issue_refresh_token_at(&alice(), now - 8 * DAY).unwrap();

        assert_eq!(service.purge_expired(), 1);
        assert_eq!(service.active_refresh_tokens(), 0);
    }

    #[test]
    fn test_concurrent_rotation_has_single_winner() {
        let service = Arc::new(service());
        let refresh = service.issue_refresh_token(&alice()).unwrap();

        let threads = 8;
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let service = Arc::clone(&service);
                let barrier = Arc::clone(&barrier);
                let refresh = refresh.clone();
                thread::spawn(move || {
                    barrier.wait();
                    service.rotate_refresh_token(&refresh)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        let forbidden = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Forbidden(_))))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(forbidden, threads - 1);
        // 회전으로 받은 새 토큰 하나만 남음
        assert_eq!(service.active_refresh_tokens(), 1);
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(matches!(
            TokenService::extract_bearer_token("Basic dXNlcjpwYXNz"),
            Err(AppError::Unauthenticated(_))
        ));
        assert!(matches!(
            TokenService::extract_bearer_token("Bearer "),
            Err(AppError::Unauthenticated(_))
        ));
        assert!(matches!(
            TokenService::extract_bearer_token("Bearer"),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token_scheme_is_case_insensitive() {
        assert_eq!(TokenService::extract_bearer_token("bearer abc").unwrap(), "abc");
        assert_eq!(TokenService::extract_bearer_token("BEARER  abc ").unwrap(), "abc");
    }

    #[test]
    fn test_token_kind_is_checked_even_with_shared_secret() {
        let service = TokenService::new(
            JwtConfig::with_secrets("shared", "shared"),
            Arc::new(InMemoryRefreshTokenStore::new()),
        );
        let access = service.issue_access_token(&alice()).unwrap();
        let refresh = service.issue_refresh_token(&alice()).unwrap();

        assert!(matches!(
            service.validate_access_token(&refresh),
            Err(AppError::InvalidToken(_))
        ));
        assert!(matches!(
            service.rotate_refresh_token(&access),
            Err(AppError::Forbidden(_))
        ));
        // 거절된 회전 시도는 활성 목록을 건드리지 않음
        assert_eq!(service.active_refresh_tokens(), 1);
        assert!(service.rotate_refresh_token(&refresh).is_ok());
    }

    #[test]
    fn test_oversized_ttl_does_not_overflow() {
        let mut config = JwtConfig::with_secrets("a", "r");
        config.refresh_ttl_days = i64::MAX / 2;
        let service = TokenService::new(config, Arc::new(InMemoryRefreshTokenStore::new()));

        let refresh = service.issue_refresh_token_at(&alice(), 1_700_000_000).unwrap();
        assert!(service.rotate_refresh_token_at(&refresh, 1_700_000_001).is_ok());
    }
}
