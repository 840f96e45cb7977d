//! 캐싱 계층 모듈
//!
//! Redis 클라이언트 부트스트랩과 캐시 접근을 제공합니다.
//!
//! # 주요 기능
//!
//! - [`client_factory`] - 설정으로부터 단일 노드/클러스터 클라이언트 생성
//! - [`handle`] - 프로세스 전역에서 공유하는 클라이언트 핸들, Pub/Sub 구독
//! - [`pool`] - `bb8` 기반 연결 풀 (최소 유휴, 최대 크기, 유휴 타임아웃)
//! - [`serializer`] - 키는 평문, 값은 JSON인 직렬화 정책
//! - [`redis`] - `RedisTemplate` 스타일의 타입 안전한 캐시 API
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::client_factory::build_client;
//! use crate::caching::redis::RedisTemplate;
//!
//! let handle = build_client(&config).await?;
//! let cache = RedisTemplate::new(handle.clone());
//! cache.set_with_expiry("session:abc", &session, 3600).await?;
//!
//! let cached: Option<Session> = cache.get("session:abc").await?;
//! ```

pub mod client_factory;
pub mod handle;
pub mod pool;
pub mod redis;
pub mod serializer;
