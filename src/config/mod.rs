//! # Configuration Module
//!
//! Redis 클라이언트 부트스트랩과 HTTP 서버의 설정 관리를 담당하는 모듈입니다.
//! Spring Boot의 `@ConfigurationProperties` + `@ConditionalOnProperty` 조합을
//! 명시적인 구조체와 `match` 분기로 대신합니다.
//!
//! ## 모듈 구성
//!
//! - [`property_source`] - 프로퍼티 조회 추상화 (환경 변수, 메모리 맵, `.properties`)
//! - [`redisson_config`] - 단일 노드/클러스터 연결 설정과 검증
//! - [`server_config`] - HTTP 바인딩 주소와 실행 프로파일
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ConnectionConfig, EnvPropertySource};
//!
//! match ConnectionConfig::load(&EnvPropertySource)? {
//!     Some(config) => println!("mode: {:?}", config.mode()),
//!     None => println!("Redis 비활성화"),
//! }
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 단일 노드
//! export REDISSON_SINGLESERVERCONFIG_ENABLESINGLE=true
//! export REDISSON_SINGLESERVERCONFIG_ADDRESS="redis://127.0.0.1:6379"
//! export REDISSON_SINGLESERVERCONFIG_PASSWORD="secret"
//!
//! # 클러스터
//! export REDISSON_CLUSTERSERVERSCONFIG_ENABLECLUSTER=true
//! export REDISSON_CLUSTERSERVERSCONFIG_NODEADDRESSES="redis://10.0.0.1:7000,redis://10.0.0.2:7001"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@ConfigurationProperties("redisson")` | `ConnectionConfig::load` |
//! | `@ConditionalOnProperty(havingValue = "true")` | `Option<ConnectionConfig>` |
//! | `application.yml` | `.env` 파일 + 환경 변수 |

pub mod property_source;
pub mod redisson_config;
pub mod server_config;

pub use property_source::*;
pub use redisson_config::*;
pub use server_config::*;
