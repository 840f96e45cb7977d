//! API 라우트 설정 모듈
//!
//! 캐시 API, AOP 데모, 헬스체크 엔드포인트를 기능별로 그룹화하여 등록합니다.
//!
//! # Available Routes
//!
//! - `GET /health` - 서비스 및 Redis 상태 확인
//! - `GET|PUT|DELETE /api/v1/cache/{key}` - `RedisTemplate` 기반 캐시 접근
//! - `GET /api/v1/aop/demo` - 로깅 어드바이스 데모
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(AppState::new(template)))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::handlers::{self, AppState};

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_cache_routes(cfg);
    configure_aop_routes(cfg);
}

/// 캐시 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// curl -X PUT "http://localhost:8080/api/v1/cache/user:1?ttl=60" \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John"}'
///
/// curl http://localhost:8080/api/v1/cache/user:1
/// ```
fn configure_cache_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/cache")
            .service(handlers::cache::get_value)
            .service(handlers::cache::put_value)
            .service(handlers::cache::delete_value)
    );
}

fn configure_aop_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/aop")
            .service(handlers::aop::run_demo)
    );
}

/// 헬스체크 엔드포인트
///
/// Redis 클라이언트가 구성되어 있으면 PING으로 상태를 확인합니다.
///
/// | 상태 | 응답 코드 | `redis` |
/// |------|-----------|---------|
/// | 클라이언트 없음 | 200 | `"disabled"` |
/// | PING 성공 | 200 | `"up"` |
/// | PING 실패 | 503 | `"down"` |
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (redis, mode, healthy) = match &state.template {
        None => ("disabled", None, true),
        Some(template) => {
            let mode = Some(format!("{:?}", template.handle().mode()));
            match template.ping().await {
                Ok(()) => ("up", mode, true),
                Err(e) => {
                    log::warn!("Redis health check failed: {}", e);
                    ("down", mode, false)
                }
            }
        }
    };

    let body = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "service": "redis_bootstrap",
        "version": env!("CARGO_PKG_VERSION"),
        "redis": redis,
        "mode": mode,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
