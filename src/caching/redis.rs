//! # Redis 템플릿
//!
//! Spring `RedisTemplate`과 같은 역할을 하는 타입 안전한 캐시 접근 계층입니다.
//! 모든 키(해시 필드 키 포함)는 [`StringKeySerializer`]를 거쳐 UTF-8 평문으로,
//! 모든 값은 [`JsonValueCodec`]을 거쳐 JSON으로 저장됩니다.
//!
//! ## 연결 관리
//!
//! 명령마다 [`ClientHandle`]의 풀에서 멀티플렉싱 연결을 하나 꺼내 사용합니다.
//! 단일 노드와 클러스터 모드 모두 같은 API로 동작합니다.

use redis::AsyncCommands;
use serde::{Serialize, de::DeserializeOwned};
use crate::caching::handle::ClientHandle;
use crate::caching::serializer::{JsonValueCodec, StringKeySerializer};
use crate::errors::AppResult;

/// Redis 캐시 템플릿
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::caching::redis::RedisTemplate;
///
/// let template = RedisTemplate::new(handle.clone());
///
/// // 사용자 정보 캐싱 (1시간 TTL)
/// template.set_with_expiry("user:123", &user, 3600).await?;
///
/// // 캐시된 데이터 조회
/// let cached: Option<UserCache> = template.get("user:123").await?;
/// ```
#[derive(Clone)]
pub struct RedisTemplate {
    handle: ClientHandle,
    keys: StringKeySerializer,
    values: JsonValueCodec,
}

impl RedisTemplate {
    pub fn new(handle: ClientHandle) -> Self {
        Self {
            handle,
            keys: StringKeySerializer,
            values: JsonValueCodec,
        }
    }

    pub fn handle(&self) -> &ClientHandle {
        &self.handle
    }

    /// 지정된 키에서 값을 조회합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// - `Ok(None)` - 키가 존재하지 않음
    /// - `Err(AppError)` - Redis 오류 또는 역직렬화 실패
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut conn = self.handle.connection().await?;
        let raw: Option<String> = conn.get(self.keys.serialize(key)).await?;

        raw.map(|json| self.values.decode(&json)).transpose()
    }

    /// 지정된 키에 값을 저장합니다. 기존 값은 덮어쓰며 TTL은 설정되지 않습니다.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = self.values.encode(value)?;
        let mut conn = self.handle.connection().await?;
        conn.set::<_, _, ()>(self.keys.serialize(key), json).await?;
        Ok(())
    }

    /// 만료 시간(초)과 함께 값을 저장합니다.
    ///
    /// | 용도 | 권장 TTL | 예제 |
    /// |------|----------|------|
    /// | 세션 | 1-24시간 | `3600 * 8` |
    /// | API 응답 캐시 | 5-60분 | `300` |
    pub async fn set_with_expiry<T: Serialize + ?Sized>(&self, key: &str, value: &T, seconds: u64) -> AppResult<()> {
        let json = self.values.encode(value)?;
        let mut conn = self.handle.connection().await?;
        conn.set_ex::<_, _, ()>(self.keys.serialize(key), json, seconds).await?;
        Ok(())
    }

    /// 지정된 키를 삭제합니다. 삭제된 키 개수를 반환합니다.
    pub async fn del(&self, key: &str) -> AppResult<usize> {
        let mut conn = self.handle.connection().await?;
        Ok(conn.del(self.keys.serialize(key)).await?)
    }

    /// 여러 키를 한 번에 삭제합니다. 빈 목록이면 즉시 0을 반환합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> AppResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let encoded: Vec<Vec<u8>> = keys.iter().map(|k| self.keys.serialize(k)).collect();
        let mut conn = self.handle.connection().await?;
        Ok(conn.del(encoded).await?)
    }

    /// 패턴과 일치하는 키들을 검색합니다.
    ///
    /// ## ⚠️ 프로덕션 주의사항
    ///
    /// KEYS 명령은 블로킹 연산으로 Redis 서버 전체 성능에 영향을 줄 수 있습니다.
    pub async fn keys(&self, pattern: &str) -> AppResult<Vec<String>> {
        let mut conn = self.handle.connection().await?;
        let raw: Vec<Vec<u8>> = conn.keys(self.keys.serialize(pattern)).await?;

        raw.iter().map(|k| self.keys.deserialize(k)).collect()
    }

    /// 해시 필드에 값을 저장합니다. 해시 키와 필드 키 모두 평문입니다.
    pub async fn hset<T: Serialize + ?Sized>(&self, key: &str, field: &str, value: &T) -> AppResult<()> {
        let json = self.values.encode(value)?;
        let mut conn = self.handle.connection().await?;
        conn.hset::<_, _, _, ()>(self.keys.serialize(key), self.keys.serialize(field), json).await?;
        Ok(())
    }

    /// 해시 필드의 값을 조회합니다.
    pub async fn hget<T: DeserializeOwned>(&self, key: &str, field: &str) -> AppResult<Option<T>> {
        let mut conn = self.handle.connection().await?;
        let raw: Option<String> = conn.hget(self.keys.serialize(key), self.keys.serialize(field)).await?;

        raw.map(|json| self.values.decode(&json)).transpose()
    }

    /// 해시의 모든 필드 키를 조회합니다.
    pub async fn hkeys(&self, key: &str) -> AppResult<Vec<String>> {
        let mut conn = self.handle.connection().await?;
        let raw: Vec<Vec<u8>> = conn.hkeys(self.keys.serialize(key)).await?;

        raw.iter().map(|k| self.keys.deserialize(k)).collect()
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.handle.ping().await
    }
}
