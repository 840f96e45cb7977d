//! 프로퍼티 소스 추상화
//!
//! Spring의 `Environment`/`PropertySource`처럼 점(.)으로 구분된 프로퍼티 이름으로
//! 설정 값을 조회합니다. 운영에서는 환경 변수를, 테스트에서는 메모리 맵을 사용하므로
//! 설정 로더가 프로세스 환경을 건드리지 않고도 검증될 수 있습니다.
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `application.properties` | [`MapPropertySource::from_properties`] |
//! | OS 환경 변수 바인딩 | [`EnvPropertySource`] |

use std::collections::HashMap;
use std::env;

/// 프로퍼티 이름으로 원본 문자열 값을 조회하는 소스
pub trait PropertySource {
    /// 프로퍼티 값을 반환합니다. 없으면 `None`.
    fn get(&self, key: &str) -> Option<String>;
}

/// 환경 변수 기반 프로퍼티 소스
///
/// `redisson.singleServerConfig.address` → `REDISSON_SINGLESERVERCONFIG_ADDRESS`
/// 규칙(Spring Boot의 relaxed binding)으로 이름을 변환해 조회합니다.
///
/// ```bash
/// export REDISSON_SINGLESERVERCONFIG_ENABLESINGLE=true
/// export REDISSON_SINGLESERVERCONFIG_ADDRESS=redis://127.0.0.1:6379
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvPropertySource;

impl EnvPropertySource {
    /// 프로퍼티 이름을 환경 변수 이름으로 변환합니다.
    pub fn env_name(key: &str) -> String {
        key.chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect()
    }
}

impl PropertySource for EnvPropertySource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(Self::env_name(key)).ok()
    }
}

/// 메모리 맵 기반 프로퍼티 소스
#[derive(Debug, Default, Clone)]
pub struct MapPropertySource {
    values: HashMap<String, String>,
}

impl MapPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 프로퍼티를 추가하고 자신을 반환합니다 (빌더 스타일).
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// `key=value` 형식의 `.properties` 텍스트를 파싱합니다.
    ///
    /// `#`/`!`로 시작하는 줄은 주석, `=` 또는 `:`가 구분자입니다.
    /// 구분자가 없는 줄은 무시합니다.
    pub fn from_properties(text: &str) -> Self {
        let values = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .filter_map(|line| {
                let pos = line.find(['=', ':'])?;
                let (key, value) = line.split_at(pos);
                Some((key.trim().to_string(), value[1..].trim().to_string()))
            })
            .collect();

        Self { values }
    }
}

impl PropertySource for MapPropertySource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
