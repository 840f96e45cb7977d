//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 부트스트랩 단계(설정 로딩, 클라이언트 생성)와 런타임 캐시 작업에서 발생하는
//! 에러를 하나의 타입으로 묶습니다. `thiserror`와 `actix_web::ResponseError`를
//! 사용하여 HTTP 응답으로도 일관되게 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require_nodes(nodes: &[String]) -> Result<(), AppError> {
//!     if nodes.is_empty() {
//!         return Err(AppError::ConfigError("missing node addresses".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 시작 시점의 에러(`ConfigError`, `ConnectionError`)는 프로세스를 종료시키고,
/// 요청 처리 중의 에러는 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 설정 누락, 잘못된 값, 모순된 모드 플래그 (500)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 설정된 주소 중 어디에도 연결할 수 없음 (503 Service Unavailable)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// 키/값 인코딩 실패 (400 Bad Request)
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Redis 명령 실행 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Redis 클라이언트가 구성되지 않음 (503 Service Unavailable)
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout() || e.is_io_error() {
            AppError::ConnectionError(e.to_string())
        } else {
            AppError::RedisError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::SerializationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConnectionError(_) | AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
