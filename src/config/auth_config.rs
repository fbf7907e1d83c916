//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰 서명 키와 유효 기간을 관리하는 모듈입니다.
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명됩니다.
//! 한쪽 키로 서명된 토큰은 다른 쪽 검증을 절대 통과하지 못합니다.
//!
//! ## 필수 환경 변수 (staging / production)
//!
//! ```bash
//! export JWT_ACCESS_SECRET="$(openssl rand -base64 32)"
//! export JWT_REFRESH_SECRET="$(openssl rand -base64 32)"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export JWT_ACCESS_TTL_MINUTES="15"
//! export JWT_REFRESH_TTL_DAYS="7"
//! ```
//!
//! development / test 환경에서는 키가 없으면 경고 로그와 함께
//! 안전하지 않은 기본 키를 사용합니다. 그 외 환경에서는 기동이 실패합니다.
//! 두 키가 같으면 환경과 관계없이 기동이 실패합니다.
//!
//! 유효 기간 상한: 액세스 토큰 1일, 리프레시 토큰 365일.

use std::env;
use crate::config::Environment;
use crate::errors::AppError;

const DEFAULT_ACCESS_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TTL_DAYS: i64 = 7;
const MAX_ACCESS_TTL_MINUTES: i64 = 24 * 60;
const MAX_REFRESH_TTL_DAYS: i64 = 365;

const DEV_ACCESS_SECRET: &str = "dev-access-secret-not-for-production";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-not-for-production";

/// JWT 서명 설정
///
/// 기동 시 [`JwtConfig::from_env`]로 한 번만 생성되어 `TokenService`에 주입됩니다.
#[derive(Clone)]
pub struct JwtConfig {
    /// 액세스 토큰 서명 키
    pub access_secret: String,
    /// 리프레시 토큰 서명 키 (액세스 키와 달라야 함)
    pub refresh_secret: String,
    /// 액세스 토큰 유효 기간 (분)
    pub access_ttl_minutes: i64,
    /// 리프레시 토큰 유효 기간 (일)
    pub refresh_ttl_days: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

impl JwtConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 운영 계열 환경에서 키가 없거나, 두 키가 같거나,
    ///   유효 기간이 상한을 넘는 경우
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&Environment::current(), |key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 구성합니다.
    ///
    /// 환경 변수 대신 임의의 키-값 소스를 사용할 수 있어 테스트에서 활용됩니다.
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_secret =
            Self::resolve_secret(environment, &lookup, "JWT_ACCESS_SECRET", DEV_ACCESS_SECRET)?;
        let refresh_secret =
            Self::resolve_secret(environment, &lookup, "JWT_REFRESH_SECRET", DEV_REFRESH_SECRET)?;

        if access_secret == refresh_secret {
            return Err(AppError::ConfigError(
                "JWT_ACCESS_SECRET and JWT_REFRESH_SECRET must differ".to_string(),
            ));
        }

        let access_ttl_minutes = Self::bounded_or_default(
            &lookup,
            "JWT_ACCESS_TTL_MINUTES",
            DEFAULT_ACCESS_TTL_MINUTES,
            MAX_ACCESS_TTL_MINUTES,
        )?;
        let refresh_ttl_days = Self::bounded_or_default(
            &lookup,
            "JWT_REFRESH_TTL_DAYS",
            DEFAULT_REFRESH_TTL_DAYS,
            MAX_REFRESH_TTL_DAYS,
        )?;

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl_minutes,
            refresh_ttl_days,
        })
    }

    /// 기본 유효 기간과 주어진 키로 설정을 생성합니다.
    pub fn with_secrets(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl_minutes: DEFAULT_ACCESS_TTL_MINUTES,
            refresh_ttl_days: DEFAULT_REFRESH_TTL_DAYS,
        }
    }

    /// 액세스 토큰 유효 기간 (초)
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_minutes.saturating_mul(60)
    }

    /// 리프레시 토큰 유효 기간 (초)
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_days.saturating_mul(24 * 60 * 60)
    }

    fn resolve_secret<F>(
        environment: &Environment,
        lookup: &F,
        key: &str,
        dev_default: &str,
    ) -> Result<String, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(key).filter(|v| !v.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if environment.allows_insecure_defaults() => {
                log::warn!("{} not set, using default (not secure for production!)", key);
                Ok(dev_default.to_string())
            }
            None => Err(AppError::ConfigError(format!(
                "{} must be set in {:?} environment",
                key, environment
            ))),
        }
    }

    /// 양수가 아니거나 숫자가 아니면 기본값, 상한을 넘으면 설정 오류입니다.
    fn bounded_or_default<F>(lookup: &F, key: &str, default: i64, max: i64) -> Result<i64, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(key) else {
            return Ok(default);
        };

        match raw.trim().parse::<i64>() {
            Ok(value) if value > max => Err(AppError::ConfigError(format!(
                "{} must be at most {} (got {})",
                key, max, value
            ))),
            Ok(value) if value > 0 => Ok(value),
            _ => {
                log::warn!("{} 값이 올바르지 않습니다 ({}). 기본값 {} 사용", key, raw, default);
                Ok(default)
            }
        }
    }
}
