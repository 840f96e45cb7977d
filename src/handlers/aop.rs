//! AOP 데모 핸들러

use actix_web::{get, HttpResponse};
use serde_json::json;
use crate::aop::{DemoTargetService, LoggingAspect, TargetService};

/// `TargetService`의 네 메서드를 로깅 어드바이스와 함께 실행하고 조인 포인트를 반환합니다.
#[get("/demo")]
pub async fn run_demo() -> HttpResponse {
    let service = LoggingAspect::new(DemoTargetService { fail_method3: true });

    service.do_method1();
    let returned = service.do_method2();
    let failed = service.do_method3().err().map(|e| e.to_string());
    service.do_method4("demo");

    HttpResponse::Ok().json(json!({
        "method2": returned,
        "method3_error": failed,
        "join_points": service.join_points(),
    }))
}
