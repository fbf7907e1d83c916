//! # 사용자 관리 서비스 구현
//!
//! 회원가입 입력 검증, 중복 확인, 로그인 자격 증명 확인을 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │          UserService         │
//! │  • register  (검증 → append) │
//! │  • authenticate (자격 증명)  │
//! │  • 조회 (id / 전체)          │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  dyn UserRepository          │
//! └──────────────────────────────┘
//! ```

use std::sync::Arc;
use validator::Validate;
use crate::domain::dto::users::{LoginRequest, RegisterRequest};
use crate::domain::entities::users::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 등록
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 필수 필드 누락 또는 사용자 이름 중복
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let user = self
            .user_repo
            .append(NewUser::new(request.username, request.password, request.phone))
            .await?;

        log::info!("회원가입 완료 - id: {}, username: {}", user.id, user.username);
        Ok(user)
    }

    /// 로그인 자격 증명 확인
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 사용자 이름 또는 비밀번호 누락
    /// * `AppError::Unauthenticated` - 자격 증명 불일치
    pub async fn authenticate(&self, request: &LoginRequest) -> AppResult<User> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let phone = request.phone.as_deref().filter(|p| !p.is_empty());
        match self
            .user_repo
            .find_by_credentials(&request.username, &request.password, phone)
            .await?
        {
            Some(user) => Ok(user),
            None => {
                log::warn!("로그인 실패 - username: {}", request.username);
                Err(AppError::Unauthenticated("invalid username or password".to_string()))
            }
        }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(id).await
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::with_seed_data()))
    }

    fn register_request(username: &str, password: &str, phone: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            phone: phone.to_string(),
        }
    }

    fn login_request(username: &str, password: &str, phone: Option<&str>) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            phone: phone.map(str::to_string),
        }
    }

    #[actix_web::test]
    async fn test_register_and_authenticate() {
        let service = service();

        let user = service.register(register_request("dave", "secret", "+1777")).await.unwrap();
        assert_eq!(user.id, 3);

        let authed = service.authenticate(&login_request("dave", "secret", Some("+1777"))).await.unwrap();
        assert_eq!(authed, user);
    }

    #[actix_web::test]
    async fn test_register_missing_field_is_bad_request() {
        let result = service().register(register_request("dave", "", "+1777")).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("password")));
    }

    #[actix_web::test]
    async fn test_register_duplicate_is_bad_request() {
        let result = service().register(register_request("admin", "x", "+1")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[actix_web::test]
    async fn test_authenticate_failures() {
        let service = service();

        assert!(matches!(
            service.authenticate(&login_request("admin", "nope", None)).await,
            Err(AppError::Unauthenticated(_))
        ));
        assert!(matches!(
            service.authenticate(&login_request("", "1234", None)).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_empty_phone_is_ignored_on_login() {
        let user = service()
            .authenticate(&login_request("user", "pass", Some("")))
            .await
            .unwrap();

        assert_eq!(user.id, 2);
    }
}
