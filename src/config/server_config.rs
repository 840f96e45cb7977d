//! 서버 및 프로파일 설정 관리 모듈

use std::env;

/// 실행 프로파일 (`.env.{profile}` 파일 선택에 사용)
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Dev,
    Prod,
    /// 그 외 값 - 기본 `.env` 파일만 로드
    Default,
}

impl Profile {
    /// `PROFILE` 환경 변수에서 현재 프로파일을 읽습니다. 기본값: `dev`
    pub fn current() -> Self {
        Self::from_name(&env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dev" | "development" => Profile::Dev,
            "prod" | "production" => Profile::Prod,
            _ => Profile::Default,
        }
    }

    /// 프로파일에 대응하는 env 파일 이름
    pub fn env_file(&self) -> Option<&'static str> {
        match self {
            Profile::Dev => Some(".env.dev"),
            Profile::Prod => Some(".env.prod"),
            Profile::Default => None,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}
