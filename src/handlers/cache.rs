//! # Cache HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/cache/{key}` | 값 조회 | 200 / 404 |
//! | `PUT` | `/api/v1/cache/{key}?ttl=초` | 값 저장 (JSON 본문) | 204 |
//! | `DELETE` | `/api/v1/cache/{key}` | 값 삭제 | 200 |

use actix_web::{delete, get, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};
use crate::errors::AppError;
use crate::handlers::AppState;

/// 저장 옵션
#[derive(Debug, Deserialize)]
pub struct PutOptions {
    /// 만료 시간(초). 없으면 영구 저장
    pub ttl: Option<u64>,
}

#[get("/{key}")]
pub async fn get_value(
    state: web::Data<AppState>,
    key: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let template = state.template()?;
    let key = key.into_inner();

    match template.get::<Value>(&key).await? {
        Some(value) => Ok(HttpResponse::Ok().json(json!({ "key": key, "value": value }))),
        None => Err(AppError::NotFound(key)),
    }
}

#[put("/{key}")]
pub async fn put_value(
    state: web::Data<AppState>,
    key: web::Path<String>,
    options: web::Query<PutOptions>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let template = state.template()?;
    let key = key.into_inner();

    match options.ttl {
        Some(seconds) if seconds > 0 => template.set_with_expiry(&key, &body.into_inner(), seconds).await?,
        _ => template.set(&key, &body.into_inner()).await?,
    }

    log::debug!("cache put: {}", key);
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{key}")]
pub async fn delete_value(
    state: web::Data<AppState>,
    key: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let template = state.template()?;
    let deleted = template.del(&key).await?;

    Ok(HttpResponse::Ok().json(json!({ "deleted": deleted })))
}
