//! # 키/값 직렬화 정책
//!
//! Spring `RedisTemplate`에 `StringRedisSerializer`를 키/해시 키 직렬화기로
//! 지정하는 것과 같은 규칙입니다.
//!
//! - **키, 해시 필드 키**: 항상 UTF-8 평문. 외부 도구(`redis-cli`)로 봐도 읽을 수 있습니다.
//! - **값**: JSON (`serde_json`)

use serde::{Serialize, de::DeserializeOwned};
use crate::errors::{AppError, AppResult};

/// 키를 UTF-8 평문 바이트로 인코딩합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringKeySerializer;

impl StringKeySerializer {
    pub fn serialize(&self, key: &str) -> Vec<u8> {
        key.as_bytes().to_vec()
    }

    /// 저장된 키 바이트를 문자열로 되돌립니다.
    ///
    /// UTF-8이 아니면 `SerializationError`입니다.
    pub fn deserialize(&self, bytes: &[u8]) -> AppResult<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::SerializationError(format!("key is not valid UTF-8: {}", e)))
    }
}

/// 값을 JSON 텍스트로 인코딩합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonValueCodec;

impl JsonValueCodec {
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> AppResult<String> {
        Ok(serde_json::to_string(value)?)
    }

    pub fn decode<T: DeserializeOwned>(&self, raw: &str) -> AppResult<T> {
        Ok(serde_json::from_str(raw)?)
    }
}
