//! # 클라이언트 핸들
//!
//! [`build_client`](crate::caching::client_factory::build_client)가 만드는 핸들입니다.
//! 프로세스 수명 동안 하나만 만들어지고, 복제(clone)하여 여러 호출자가
//! 읽기 전용으로 공유합니다. 종료 시 [`ClientHandle::close`]를 한 번 호출합니다.
//!
//! 단일 노드/클러스터 연결은 [`PooledConnection`]으로 통일되어
//! `redis::AsyncCommands`를 그대로 사용할 수 있습니다.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use futures_util::StreamExt;
use log::{info, warn};
use redis::aio::{ConnectionLike, ConnectionManager, PubSub};
use redis::cluster_async::ClusterConnection;
use redis::{Cmd, Pipeline, RedisFuture, RedisResult, Value};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use crate::caching::client_factory::connection_url;
use crate::caching::pool::{ConnectionPool, PoolGuard, PoolSettings};
use crate::config::{redact_address, Mode, SubscriptionMode};
use crate::errors::{AppError, AppResult};

/// 풀에서 꺼낸 연결 (단일 노드 또는 클러스터)
#[derive(Clone)]
pub enum PooledConnection {
    Single(ConnectionManager),
    Cluster(ClusterConnection),
}

impl ConnectionLike for PooledConnection {
    fn req_packed_command<'a>(&'a mut self, cmd: &'a Cmd) -> RedisFuture<'a, Value> {
        match self {
            PooledConnection::Single(conn) => conn.req_packed_command(cmd),
            PooledConnection::Cluster(conn) => conn.req_packed_command(cmd),
        }
    }

    fn req_packed_commands<'a>(
        &'a mut self,
        cmd: &'a Pipeline,
        offset: usize,
        count: usize,
    ) -> RedisFuture<'a, Vec<Value>> {
        match self {
            PooledConnection::Single(conn) => conn.req_packed_commands(cmd, offset, count),
            PooledConnection::Cluster(conn) => conn.req_packed_commands(cmd, offset, count),
        }
    }

    fn get_db(&self) -> i64 {
        match self {
            PooledConnection::Single(conn) => conn.get_db(),
            PooledConnection::Cluster(conn) => conn.get_db(),
        }
    }
}

/// 모드별 Pub/Sub 연결 정보
pub(crate) enum Backend {
    Single {
        /// Pub/Sub 전용 연결을 여는 클라이언트
        client: redis::Client,
    },
    Cluster {
        /// 자격 증명을 포함할 수 있는 시드 노드 주소
        nodes: Vec<String>,
        password: Option<String>,
        subscription_mode: SubscriptionMode,
        /// 검증만 된 복제본 풀 설정
        replica_settings: PoolSettings,
    },
}

struct Inner {
    configuration_name: &'static str,
    addresses: Vec<String>,
    pool: ConnectionPool<PooledConnection>,
    backend: Backend,
    connect_timeout: Duration,
    subscription_pool_size: usize,
    subscriptions: Arc<Semaphore>,
}

/// Redis 연결 풀에 대한 공유 핸들
#[derive(Clone)]
pub struct ClientHandle {
    inner: Arc<Inner>,
}

impl ClientHandle {
    /// 주소는 자격 증명을 지운 뒤 보관합니다.
    pub(crate) fn new(
        configuration_name: &'static str,
        addresses: &[String],
        pool: ConnectionPool<PooledConnection>,
        backend: Backend,
        connect_timeout: Duration,
        subscription_pool_size: usize,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                configuration_name,
                addresses: addresses.iter().map(|a| redact_address(a)).collect(),
                pool,
                backend,
                connect_timeout,
                subscription_pool_size,
                subscriptions: Arc::new(Semaphore::new(subscription_pool_size)),
            }),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.inner.backend {
            Backend::Single { .. } => Mode::Single,
            Backend::Cluster { .. } => Mode::Cluster,
        }
    }

    /// 정규화된 서버 주소 (자격 증명 제외)
    pub fn addresses(&self) -> &[String] {
        &self.inner.addresses
    }

    /// 시작 시 한 번 출력하는 요약 로그 한 줄
    pub fn summary(&self) -> String {
        let label = match self.mode() {
            Mode::Single => "서버 주소",
            Mode::Cluster => "서버 클러스터 주소",
        };
        format!(
            "############ {} Configuration DI. {}: {}",
            self.inner.configuration_name,
            label,
            self.inner.addresses.join(", ")
        )
    }

    pub fn pool(&self) -> &ConnectionPool<PooledConnection> {
        &self.inner.pool
    }

    /// 풀에서 연결 하나를 빌립니다. 가드가 드롭되면 반납됩니다.
    pub async fn connection(&self) -> AppResult<PoolGuard<PooledConnection>> {
        self.inner.pool.get().await
    }

    /// PING으로 서버 도달 가능 여부를 확인합니다.
    pub(crate) async fn warm_up(&self) -> AppResult<()> {
        if let Backend::Cluster { replica_settings, .. } = &self.inner.backend {
            info!("   ├─ {}", slave_settings_note(replica_settings));
        }

        self.ping().await.map_err(|e| match e {
            AppError::ConnectionError(msg) => AppError::ConnectionError(msg),
            other => AppError::ConnectionError(format!(
                "PING to {} failed: {}",
                self.inner.addresses.join(", "),
                other
            )),
        })
    }

    /// PING 명령으로 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING").query_async::<()>(&mut *conn).await?;
        Ok(())
    }

    /// Pub/Sub 전용 연결을 엽니다.
    ///
    /// 동시에 열 수 있는 구독 연결 수는 `subscriptionConnectionPoolSize`로 제한되며,
    /// 한도에 도달하면 다른 구독이 해제될 때까지 기다립니다.
    /// 클러스터 모드에서는 `SubscriptionMode`에 따라 프라이머리(기본) 또는 복제본에 연결합니다.
    /// 연결은 `connectTimeout` 안에 맺어져야 합니다.
    pub async fn subscriber(&self) -> AppResult<Subscription> {
        if self.inner.subscription_pool_size == 0 {
            return Err(AppError::ConfigError("subscriptionConnectionPoolSize is 0".to_string()));
        }

        let permit = self
            .inner
            .subscriptions
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| AppError::ConnectionError("client handle is closed".to_string()))?;
        let timeout = self.inner.connect_timeout;

        let pubsub = match &self.inner.backend {
            Backend::Single { client } => {
                within(timeout, &self.inner.addresses.join(", "), client.get_async_pubsub()).await?
            }
            Backend::Cluster { nodes, password, subscription_mode, .. } => {
                let node = resolve_subscription_node(nodes, password.as_deref(), *subscription_mode, timeout).await?;
                let target = redact_address(&node);
                info!("📡 구독 연결 대상 노드: {}", target);
                let url = connection_url(&node, password.as_deref(), 0)?;
                let client = redis::Client::open(url.as_str())
                    .map_err(|e| AppError::ConfigError(format!("invalid node address '{}': {}", target, e)))?;
                within(timeout, &target, client.get_async_pubsub()).await?
            }
        };

        Ok(Subscription { pubsub, _permit: permit })
    }

    /// 모든 연결을 닫습니다. 이후 요청은 `ConnectionError`로 실패합니다.
    pub fn close(&self) {
        self.inner.subscriptions.close();
        self.inner.pool.close();
    }
}

/// 복제본 풀 설정은 별도 풀을 만들지 않습니다. 로그에 그 사실을 남깁니다.
fn slave_settings_note(settings: &PoolSettings) -> String {
    format!(
        "slave pool settings (size {}, min idle {}) validated only; replica reads share the cluster client's per-node connections",
        settings.size, settings.min_idle
    )
}

/// 연결 시도를 `timeout`으로 제한합니다.
async fn within<T>(timeout: Duration, target: &str, attempt: impl Future<Output = RedisResult<T>>) -> AppResult<T> {
    match tokio::time::timeout(timeout, attempt).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AppError::ConnectionError(format!(
            "connecting to {} timed out after {:?}",
            target, timeout
        ))),
    }
}

/// 구독 연결. 드롭되면 구독 풀의 자리를 반납합니다.
pub struct Subscription {
    pubsub: PubSub,
    _permit: OwnedSemaphorePermit,
}

impl Subscription {
    pub async fn subscribe(&mut self, channel: &str) -> AppResult<()> {
        self.pubsub.subscribe(channel).await?;
        Ok(())
    }

    pub async fn psubscribe(&mut self, pattern: &str) -> AppResult<()> {
        self.pubsub.psubscribe(pattern).await?;
        Ok(())
    }

    /// 다음 메시지의 (채널, 페이로드)를 기다립니다. 연결이 끊기면 `None`.
    pub async fn next_message(&mut self) -> Option<(String, String)> {
        let mut stream = Box::pin(self.pubsub.on_message());
        let msg = stream.next().await?;
        let payload = msg.get_payload::<String>().ok()?;
        Some((msg.get_channel_name().to_string(), payload))
    }

    pub fn pubsub_mut(&mut self) -> &mut PubSub {
        &mut self.pubsub
    }
}

/// `ROLE` 명령으로 확인한 노드 역할
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeRole {
    /// 프라이머리와 연결된 복제본 주소 목록
    Master { replicas: Vec<String> },
    /// 복제본과 그 프라이머리 주소
    Replica { master: String },
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::BulkString(bytes) => String::from_utf8(bytes.clone()).ok(),
        Value::SimpleString(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        _ => None,
    }
}

/// `ROLE` 응답을 해석합니다. 주소는 `host:port` 형태입니다.
///
/// - 프라이머리: `["master", offset, [[ip, port, offset], ...]]`
/// - 복제본: `["slave", master_ip, master_port, state, offset]`
pub(crate) fn parse_role(reply: &Value) -> Option<NodeRole> {
    let Value::Array(items) = reply else {
        return None;
    };

    match value_to_string(items.first()?)?.as_str() {
        "master" => {
            let replicas = match items.get(2) {
                Some(Value::Array(entries)) => entries
                    .iter()
                    .filter_map(|entry| match entry {
                        Value::Array(fields) => {
                            let host = value_to_string(fields.first()?)?;
                            let port = value_to_string(fields.get(1)?)?;
                            Some(format!("{}:{}", host, port))
                        }
                        _ => None,
                    })
                    .collect(),
                _ => Vec::new(),
            };
            Some(NodeRole::Master { replicas })
        }
        "slave" | "replica" => {
            let host = value_to_string(items.get(1)?)?;
            let port = value_to_string(items.get(2)?)?;
            Some(NodeRole::Replica { master: format!("{}:{}", host, port) })
        }
        _ => None,
    }
}

/// 조회한 노드와 그 역할로부터 구독 대상 `host:port`를 고릅니다.
pub(crate) fn pick_subscription_node(node: &str, role: &NodeRole, mode: SubscriptionMode) -> String {
    match (mode, role) {
        (SubscriptionMode::Master, NodeRole::Master { .. }) => node.to_string(),
        (SubscriptionMode::Master, NodeRole::Replica { master }) => master.clone(),
        (SubscriptionMode::Slave, NodeRole::Master { replicas }) => {
            replicas.first().cloned().unwrap_or_else(|| node.to_string())
        }
        (SubscriptionMode::Slave, NodeRole::Replica { .. }) => node.to_string(),
    }
}

/// 시드 노드를 차례로 조회해 구독 대상 노드 주소를 결정합니다.
async fn resolve_subscription_node(
    nodes: &[String],
    password: Option<&str>,
    mode: SubscriptionMode,
    connect_timeout: Duration,
) -> AppResult<String> {
    let mut last_error = None;

    for node in nodes {
        let url = connection_url(node, password, 0)?;
        let client = redis::Client::open(url.as_str())
            .map_err(|e| AppError::ConfigError(format!("invalid node address '{}': {}", node, e)))?;

        let attempt = async {
            let mut conn = client.get_multiplexed_async_connection().await?;
            redis::cmd("ROLE").query_async::<Value>(&mut conn).await
        };

        match tokio::time::timeout(connect_timeout, attempt).await {
            Ok(Ok(reply)) => {
                let Some(role) = parse_role(&reply) else {
                    warn!("{} ROLE 응답을 해석할 수 없음: {:?}", redact_address(node), reply);
                    return Ok(node.clone());
                };
                let (scheme, host_port) = node.split_once("://").unwrap_or(("redis", node.as_str()));
                let picked = pick_subscription_node(host_port, &role, mode);
                return Ok(format!("{}://{}", scheme, picked));
            }
            Ok(Err(e)) => last_error = Some(e.to_string()),
            Err(_) => last_error = Some(format!("timed out after {:?}", connect_timeout)),
        }
    }

    Err(AppError::ConnectionError(format!(
        "no cluster node reachable for subscriptions ({}): {}",
        nodes.iter().map(|n| redact_address(n)).collect::<Vec<_>>().join(", "),
        last_error.unwrap_or_default()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future;

    #[test]
    fn test_slave_settings_note_does_not_claim_a_pool() {
        let note = slave_settings_note(&PoolSettings { size: 64, min_idle: 24, idle_timeout: Duration::from_secs(10) });

        assert!(note.contains("size 64, min idle 24"));
        assert!(note.contains("validated only"));
        assert!(!note.contains("pool:"));
    }

    #[actix_web::test]
    async fn test_connect_attempt_times_out_with_connection_error() {
        let attempt = future::pending::<RedisResult<()>>();

        match within(Duration::from_millis(20), "redis://10.0.0.9:6379", attempt).await {
            Err(AppError::ConnectionError(msg)) => {
                assert!(msg.contains("redis://10.0.0.9:6379"));
                assert!(msg.contains("timed out"));
            }
            other => panic!("Expected ConnectionError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_connect_attempt_error_is_converted() {
        let attempt = future::ready(Err::<(), _>(redis::RedisError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ))));

        assert!(matches!(
            within(Duration::from_secs(1), "redis://127.0.0.1:1", attempt).await,
            Err(AppError::ConnectionError(_))
        ));
    }

    fn bulk(s: &str) -> Value {
        Value::BulkString(s.as_bytes().to_vec())
    }

    #[test]
    fn test_parse_master_role() {
        let reply = Value::Array(vec![
            bulk("master"),
            Value::Int(3129659),
            Value::Array(vec![
                Value::Array(vec![bulk("10.0.0.2"), bulk("7001"), bulk("3129242")]),
                Value::Array(vec![bulk("10.0.0.3"), bulk("7002"), bulk("3129543")]),
            ]),
        ]);

        assert_eq!(
            parse_role(&reply),
            Some(NodeRole::Master { replicas: vec!["10.0.0.2:7001".to_string(), "10.0.0.3:7002".to_string()] })
        );
    }

    #[test]
    fn test_parse_replica_role() {
        let reply = Value::Array(vec![
            bulk("slave"),
            bulk("10.0.0.1"),
            Value::Int(7000),
            bulk("connected"),
            Value::Int(3167038),
        ]);

        assert_eq!(parse_role(&reply), Some(NodeRole::Replica { master: "10.0.0.1:7000".to_string() }));
    }

    #[test]
    fn test_parse_role_rejects_unknown_reply() {
        assert_eq!(parse_role(&Value::Nil), None);
        assert_eq!(parse_role(&Value::Array(vec![bulk("sentinel")])), None);
    }

    #[test]
    fn test_subscriptions_go_to_primary_by_default() {
        let replica = NodeRole::Replica { master: "10.0.0.1:7000".to_string() };
        let master = NodeRole::Master { replicas: vec!["10.0.0.2:7001".to_string()] };

        assert_eq!(pick_subscription_node("10.0.0.2:7001", &replica, SubscriptionMode::Master), "10.0.0.1:7000");
        assert_eq!(pick_subscription_node("10.0.0.1:7000", &master, SubscriptionMode::Master), "10.0.0.1:7000");
    }

    #[test]
    fn test_subscription_slave_mode_prefers_replica() {
        let master = NodeRole::Master { replicas: vec!["10.0.0.2:7001".to_string()] };
        let lonely = NodeRole::Master { replicas: Vec::new() };

        assert_eq!(pick_subscription_node("10.0.0.1:7000", &master, SubscriptionMode::Slave), "10.0.0.2:7001");
        assert_eq!(pick_subscription_node("10.0.0.1:7000", &lonely, SubscriptionMode::Slave), "10.0.0.1:7000");
    }
}
