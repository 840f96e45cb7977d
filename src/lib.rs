//! Redis 클라이언트 부트스트랩 서비스
//!
//! 프로퍼티(환경 변수 또는 `.env` 파일)로부터 Redis 연결 설정을 읽어
//! 단일 노드 또는 클러스터 모드의 클라이언트를 프로세스 시작 시 한 번 구성하고,
//! 이를 HTTP 핸들러와 공유합니다.
//!
//! # Features
//!
//! - **설정 바인딩**: `redisson.*` 프로퍼티를 타입 안전한 설정으로 변환
//! - **모드 선택**: `enableSingle` / `enableCluster` 플래그로 단일/클러스터 선택
//! - **연결 풀**: 최소 유휴 연결, 최대 크기, 유휴 타임아웃
//! - **Pub/Sub**: 구독 연결 수 제한
//! - **RedisTemplate**: 평문 키 + JSON 값 직렬화
//! - **AOP 데모**: 메서드 호출 전후 로깅 데코레이터
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /api/v1/cache, /api/v1/aop
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← AppState(Option<RedisTemplate>)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  RedisTemplate  │ ← 키/값 직렬화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ClientHandle   │ ← 연결 풀, 구독 제한
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Redis / Cluster │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use redis_bootstrap::caching::client_factory::build_client;
//! use redis_bootstrap::config::{ConnectionConfig, EnvPropertySource};
//!
//! if let Some(config) = ConnectionConfig::load(&EnvPropertySource)? {
//!     let handle = build_client(&config).await?;
//!     handle.ping().await?;
//! }
//! ```

pub mod aop;
pub mod caching;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod utils;
