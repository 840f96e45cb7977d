//! # 연결 풀
//!
//! Redisson의 `connectionPoolSize` / `connectionMinimumIdleSize` /
//! `idleConnectionTimeout` 설정을 `bb8` 풀 위에 올립니다.
//!
//! | Redisson 설정 | bb8 설정 |
//! |---------------|----------|
//! | `connectionPoolSize` | `max_size` |
//! | `connectionMinimumIdleSize` | `min_idle` |
//! | `idleConnectionTimeout` | `idle_timeout` (0이면 정리하지 않음) |
//! | `connectTimeout` | `connection_timeout` |
//!
//! 연결은 사용 중일 때만 풀에서 빠지고, 가드가 드롭되면 유휴 상태로 돌아옵니다.
//! 따라서 순차적인 요청은 같은 유휴 연결을 재사용하고, 풀은 동시 요청 수만큼만 커집니다.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use bb8::{ManageConnection, Pool, RunError};
use futures_util::future::BoxFuture;
use log::info;
use redis::aio::ConnectionLike;
use redis::{RedisError, RedisResult};
use crate::errors::{AppError, AppResult};

/// 새 연결을 여는 비동기 함수
pub type Connector<C> = Arc<dyn Fn() -> BoxFuture<'static, RedisResult<C>> + Send + Sync>;

/// 풀에서 빌린 연결. 드롭되면 풀로 반납됩니다.
pub type PoolGuard<C> = bb8::PooledConnection<'static, RedisConnectionManager<C>>;

/// 풀 크기 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolSettings {
    pub size: usize,
    pub min_idle: usize,
    /// 0이면 유휴 연결을 정리하지 않습니다
    pub idle_timeout: Duration,
}

/// `Connector`로 연결을 열고 PING으로 검사하는 bb8 연결 관리자
pub struct RedisConnectionManager<C> {
    connector: Connector<C>,
}

impl<C> ManageConnection for RedisConnectionManager<C>
where
    C: ConnectionLike + Send + 'static,
{
    type Connection = C;
    type Error = RedisError;

    async fn connect(&self) -> Result<C, RedisError> {
        (self.connector)().await
    }

    async fn is_valid(&self, conn: &mut C) -> Result<(), RedisError> {
        redis::cmd("PING").query_async::<()>(conn).await
    }

    fn has_broken(&self, _conn: &mut C) -> bool {
        false
    }
}

/// 멀티플렉싱 연결의 크기 제한 풀
pub struct ConnectionPool<C: ConnectionLike + Send + 'static> {
    target: String,
    settings: PoolSettings,
    pool: RwLock<Option<Pool<RedisConnectionManager<C>>>>,
}

impl<C: ConnectionLike + Send + 'static> ConnectionPool<C> {
    /// 풀을 만들고 최소 유휴 개수만큼 연결을 미리 엽니다.
    ///
    /// `size`가 0이면 1로, `min_idle`은 `size` 이하로 맞춥니다.
    /// `connect_timeout` 안에 연결하지 못하면 `ConnectionError`를 반환합니다.
    ///
    /// `target`은 로그와 에러 메시지에만 쓰이므로 자격 증명이 없는 주소여야 합니다.
    pub async fn connect(
        target: impl Into<String>,
        settings: PoolSettings,
        connect_timeout: Duration,
        connector: Connector<C>,
    ) -> AppResult<Self> {
        let target = target.into();
        let size = settings.size.max(1);
        let settings = PoolSettings { size, min_idle: settings.min_idle.min(size), ..settings };
        let idle_timeout = (!settings.idle_timeout.is_zero()).then_some(settings.idle_timeout);

        let mut builder = Pool::builder()
            .max_size(u32::try_from(size).unwrap_or(u32::MAX))
            .min_idle(Some(u32::try_from(settings.min_idle).unwrap_or(u32::MAX)))
            .idle_timeout(idle_timeout)
            .connection_timeout(connect_timeout.max(Duration::from_millis(1)))
            .test_on_check_out(false);
        if let Some(idle) = idle_timeout {
            builder = builder.reaper_rate(idle.min(Duration::from_secs(30)));
        }

        let pool = builder
            .build(RedisConnectionManager { connector })
            .await
            .map_err(|e| AppError::ConnectionError(format!("unable to connect to {}: {}", target, e)))?;

        info!("🔌 {} 연결 풀 준비: {}/{} 연결", target, settings.min_idle, settings.size);
        Ok(Self { target, settings, pool: RwLock::new(Some(pool)) })
    }

    pub fn settings(&self) -> PoolSettings {
        self.settings
    }

    /// 유휴 연결을 빌립니다. 없으면 최대 크기까지 새로 엽니다.
    ///
    /// 풀이 가득 차 `connectTimeout` 동안 반납되지 않으면 `ConnectionError`입니다.
    pub async fn get(&self) -> AppResult<PoolGuard<C>> {
        let pool = self.current()?;

        pool.get_owned().await.map_err(|e| match e {
            RunError::User(e) => AppError::ConnectionError(format!("unable to connect to {}: {}", self.target, e)),
            RunError::TimedOut => AppError::ConnectionError(format!(
                "timed out waiting for a connection to {} (pool size {})",
                self.target, self.settings.size
            )),
        })
    }

    /// 현재 열려 있는 연결 수 (사용 중 + 유휴)
    pub fn open_count(&self) -> usize {
        self.current().map_or(0, |pool| pool.state().connections as usize)
    }

    /// 현재 유휴 연결 수
    pub fn idle_count(&self) -> usize {
        self.current().map_or(0, |pool| pool.state().idle_connections as usize)
    }

    /// 풀을 놓아 유휴 연결을 닫고 이후 요청을 거부합니다.
    ///
    /// 이미 빌려 간 연결은 가드가 드롭될 때 닫힙니다.
    pub fn close(&self) {
        self.pool.write().unwrap_or_else(PoisonError::into_inner).take();
        info!("🔒 {} 연결 풀 종료", self.target);
    }

    fn current(&self) -> AppResult<Pool<RedisConnectionManager<C>>> {
        self.pool
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| AppError::ConnectionError(format!("connection pool for {} is closed", self.target)))
    }
}
