//! 실행 환경 및 서버 설정 관리 모듈
//!
//! 실행 환경(프로파일), HTTP 서버 바인딩, 백그라운드 작업 주기 설정을 관리합니다.

use std::env;

/// 실행 환경
///
/// `ENVIRONMENT` 환경 변수로 결정되며, 설정되지 않은 경우 `Production`으로 간주합니다.
/// 서명 키 누락 시 기본값 허용 여부가 이 값에 따라 달라집니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 실행 환경을 파싱합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 안전하지 않은 기본 비밀키 사용이 허용되는 환경인지 확인합니다.
    pub fn allows_insecure_defaults(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 바인딩 주소 (`host:port`)
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }

    /// 만료된 리프레시 토큰 정리 주기 (초, 기본값: 300)
    pub fn refresh_sweep_interval_secs() -> u64 {
        env::var("REFRESH_SWEEP_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(300)
    }
}
