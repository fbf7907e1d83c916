//! # 사용자 리포지토리 구현
//!
//! 식별 정보 저장소(Identity Store)입니다. 토큰 발급 전 자격 증명을 확인하고,
//! 회원가입 시 새 사용자를 추가합니다.
//!
//! 저장소는 추가 전용이며 읽기가 대부분이므로 `RwLock`으로 보호합니다.
//! 인터페이스는 비동기로 정의하여 영속 저장소 구현으로 교체할 수 있습니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::domain::entities::users::{NewUser, User};
use crate::errors::{AppError, AppResult};

/// 사용자 데이터 액세스 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 자격 증명으로 사용자를 조회합니다. `phone`이 `None`이면 전화번호는 비교하지 않습니다.
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
        phone: Option<&str>,
    ) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 사용자를 추가하고 ID가 부여된 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 같은 사용자 이름이 이미 존재
    async fn append(&self, user: NewUser) -> AppResult<User>;
}

/// 메모리 기반 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 개발용 기본 계정 두 개가 들어있는 저장소를 생성합니다.
    pub fn with_seed_data() -> Self {
        let users = vec![
            NewUser::new("admin", "1234", "+10000000001").into_user(1),
            NewUser::new("user", "pass", "+10000000002").into_user(2),
        ];
        Self {
            users: RwLock::new(users),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
        phone: Option<&str>,
    ) -> AppResult<Option<User>> {
        Ok(self
            .read()
            .iter()
            .find(|u| u.matches_credentials(username, password, phone))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.read().iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.read().iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read().clone())
    }

    async fn append(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.write();

        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::BadRequest(format!(
                "user '{}' already exists",
                user.username
            )));
        }

        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let created = user.into_user(next_id);
        users.push(created.clone());

        log::info!("사용자 추가 - id: {}, username: {}", created.id, created.username);
        Ok(created)
    }
}
