//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 토큰 게이트 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층의 결과를
//! 그대로 HTTP 상태 코드로 변환합니다.
//!
//! | 에러 | 상태 코드 | 발생 상황 |
//! |------|-----------|-----------|
//! | `BadRequest` | 400 | 필수 필드 누락, 중복 사용자 |
//! | `Unauthenticated` | 401 | 토큰 미제출, 로그인 실패 |
//! | `InvalidToken` | 403 | 액세스 토큰 서명/만료 검증 실패 |
//! | `Forbidden` | 403 | 리프레시 토큰 폐기/미등록/검증 실패 |
//! | `ConfigError` | 500 | 서명 키 설정 오류 (기동 시 치명적) |
//! | `InternalError` | 500 | 서명 실패 등 내부 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn revoke(&self, token: &str) -> Result<(), AppError> {
//!     if token.is_empty() {
//!         return Err(AppError::BadRequest("refresh_token이 필요합니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::domain::dto::tokens::ApiResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 토큰 미제출 또는 자격 증명 불일치 (401 Unauthorized)
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// 서명 또는 만료 검증에 실패한 액세스 토큰 (403 Forbidden)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 활성 목록에 없거나 검증에 실패한 리프레시 토큰 (403 Forbidden)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 설정 오류. 기동 시점에만 발생하며 프로세스를 종료시킵니다.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken(_) | AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 오류의 상세 내용은 로그로만 남기고 클라이언트에는 일반 메시지를 보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                log::error!("요청 처리 중 내부 오류: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::error(message))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_bad_request_response() {
        let error = AppError::BadRequest("username is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthenticated_response() {
        let error = AppError::Unauthenticated("missing token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_token_and_forbidden_share_status() {
        assert_eq!(
            AppError::InvalidToken("bad signature".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Forbidden("revoked".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_internal_errors_response() {
        let error = AppError::InternalError("signing failed".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = AppError::ConfigError("JWT_ACCESS_SECRET must be set".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
