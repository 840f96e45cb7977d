//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 모듈 구성
//!
//! - [`cache`] - `RedisTemplate`을 통한 캐시 조회/저장/삭제
//! - [`aop`] - `TargetService` 로깅 어드바이스 데모
//!
//! ## 의존성 전달
//!
//! `@Autowired` 대신 [`AppState`]를 `web::Data`로 등록하여 핸들러에 주입합니다.
//! Redis가 비활성화된 경우(`enableSingle`/`enableCluster` 모두 false) 템플릿은 `None`이며,
//! 캐시 엔드포인트는 503을 반환합니다.

use crate::caching::redis::RedisTemplate;
use crate::errors::{AppError, AppResult};

pub mod aop;
pub mod cache;

/// 핸들러가 공유하는 애플리케이션 상태
#[derive(Clone, Default)]
pub struct AppState {
    pub template: Option<RedisTemplate>,
}

impl AppState {
    pub fn new(template: Option<RedisTemplate>) -> Self {
        Self { template }
    }

    /// 구성된 템플릿을 반환합니다. 없으면 `Unavailable`.
    pub fn template(&self) -> AppResult<&RedisTemplate> {
        self.template
            .as_ref()
            .ok_or_else(|| AppError::Unavailable("redis client is not configured".to_string()))
    }
}
