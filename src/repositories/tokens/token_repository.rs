use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use sha2::{Digest, Sha256};

/// 활성 리프레시 토큰 저장소 인터페이스
///
/// 리프레시 토큰은 서명이 유효하고 이 저장소에 존재할 때만 사용 가능합니다.
/// 구현체는 [`take`](RefreshTokenStore::take)를 원자적으로 수행해야 합니다.
/// 같은 토큰에 대한 동시 `take` 호출 중 정확히 하나만 `true`를 받습니다.
pub trait RefreshTokenStore: Send + Sync {
    /// 토큰을 활성 목록에 추가합니다. 이미 있으면 만료 시간만 갱신합니다.
    fn insert(&self, token: &str, expires_at: i64);

    /// 토큰이 활성 목록에 있는지 확인합니다.
    fn contains(&self, token: &str) -> bool;

    /// 토큰이 있으면 제거하고 `true`를 반환합니다.
    fn take(&self, token: &str) -> bool;

    /// 토큰을 제거합니다. 없으면 아무 일도 하지 않습니다.
    fn remove(&self, token: &str) {
        self.take(token);
    }

    /// `now` 시점에 만료된 항목을 모두 제거하고 제거한 개수를 반환합니다.
    fn purge_expired(&self, now: i64) -> usize;

    /// 현재 활성 항목 수
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 토큰을 SHA256 해시로 변환
///
/// 저장소 키와 로그에는 토큰 원문 대신 이 값을 사용합니다.
pub fn fingerprint(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[derive(Default)]
struct ActiveSet {
    /// 토큰 해시 → 만료 시각
    entries: HashMap<String, i64>,
    /// (만료 시각, 토큰 해시) 순으로 정렬된 색인
    by_expiry: BTreeSet<(i64, String)>,
}

impl ActiveSet {
    fn remove(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(expires_at) => {
                self.by_expiry.remove(&(expires_at, key.to_string()));
                true
            }
            None => false,
        }
    }

    fn purge_expired(&mut self, now: i64) -> usize {
        let mut purged = 0;
        while let Some((expires_at, _)) = self.by_expiry.first() {
            if *expires_at >= now {
                break;
            }
            if let Some((_, key)) = self.by_expiry.pop_first() {
                self.entries.remove(&key);
                purged += 1;
            }
        }
        purged
    }
}

/// 메모리 기반 활성 리프레시 토큰 저장소
///
/// 하나의 `Mutex`로 맵과 만료 색인을 함께 보호합니다.
/// 새 토큰을 추가할 때마다 만료된 항목을 정리하므로 목록이 무한히 커지지 않습니다.
#[derive(Default)]
pub struct InMemoryRefreshTokenStore {
    inner: Mutex<ActiveSet>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ActiveSet> {
        // 잠금을 쥔 채로 패닉하는 경로가 없으므로 오염된 잠금도 그대로 사용합니다.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RefreshTokenStore for InMemoryRefreshTokenStore {
    fn insert(&self, token: &str, expires_at: i64) {
        let key = fingerprint(token);
        let mut set = self.lock();

        let purged = set.purge_expired(chrono::Utc::now().timestamp());
        if purged > 0 {
            log::debug!("만료된 리프레시 토큰 {}개 정리", purged);
        }

        set.remove(&key);
        set.by_expiry.insert((expires_at, key.clone()));
        set.entries.insert(key, expires_at);
    }

    fn contains(&self, token: &str) -> bool {
        self.lock().entries.contains_key(&fingerprint(token))
    }

    fn take(&self, token: &str) -> bool {
        let key = fingerprint(token);
        self.lock().remove(&key)
    }

    fn purge_expired(&self, now: i64) -> usize {
        self.lock().purge_expired(now)
    }

    fn len(&self) -> usize {
        self.lock().entries.len()
    }
}
