//! User Entity Implementation
//!
//! 토큰 발급 대상이 되는 사용자(식별 정보) 엔티티입니다.
//! 등록 시 생성된 뒤에는 수정/삭제 경로가 없습니다.

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `TokenService`는 이 중 `id`와 `username`만 클레임으로 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 부여하는 순번 ID (1부터 시작)
    pub id: i64,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 비밀번호 원문. 해싱은 이 서비스의 범위 밖입니다.
    #[serde(skip_serializing)]
    pub password: String,
    /// 전화번호
    pub phone: String,
}

/// 아직 ID가 부여되지 않은 신규 사용자
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub phone: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            phone: phone.into(),
        }
    }

    /// 저장소가 부여한 ID로 엔티티를 완성합니다.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            phone: self.phone,
        }
    }
}

impl User {
    /// 자격 증명이 일치하는지 확인합니다.
    ///
    /// `phone`이 주어진 경우에만 전화번호까지 비교합니다.
    pub fn matches_credentials(&self, username: &str, password: &str, phone: Option<&str>) -> bool {
        self.username == username
            && self.password == password
            && phone.is_none_or(|p| self.phone == p)
    }
}
