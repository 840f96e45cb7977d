//! # 문자열 유틸리티
//!
//! 설정 값(프로퍼티 문자열) 처리와 관련된 공통 유틸리티 함수들입니다.

use std::time::Duration;
use crate::errors::AppError;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
/// 빈 `password=` 프로퍼티를 "비밀번호 없음"으로 취급할 때 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  secret  ".to_string())), Some("secret".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 쉼표로 구분된 목록을 분리합니다.
///
/// 각 항목의 앞뒤 공백을 제거하고 빈 항목은 버립니다.
///
/// # 예제
/// ```rust,ignore
/// let nodes = split_list("redis://a:7000, redis://b:7001,,");
/// assert_eq!(nodes, vec!["redis://a:7000", "redis://b:7001"]);
/// ```
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|s| is_valid_string(s))
        .map(|s| s.trim().to_string())
        .collect()
}

/// Spring 스타일 불리언 프로퍼티를 파싱합니다.
///
/// `true`/`false` 외에 `yes`/`no`, `on`/`off`, `1`/`0`을 대소문자 무관하게 허용합니다.
///
/// # 인자
/// * `value` - 원본 프로퍼티 값
/// * `key` - 프로퍼티 이름 (에러 메시지용)
pub fn parse_bool(value: &str, key: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(AppError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

/// 밀리초 단위 정수 프로퍼티를 `Duration`으로 변환합니다.
///
/// Redisson 설정과 동일하게 단위 없는 숫자는 밀리초로 해석합니다.
pub fn parse_millis(value: &str, key: &str) -> Result<Duration, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| AppError::ConfigError(format!(
            "{} must be milliseconds, got '{}': {}",
            key, value.trim(), e
        )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("redis://a:7000, redis://b:7001,,"),
            vec!["redis://a:7000".to_string(), "redis://b:7001".to_string()]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true", "flag").unwrap());
        assert!(parse_bool(" TRUE ", "flag").unwrap());
        assert!(parse_bool("on", "flag").unwrap());
        assert!(!parse_bool("false", "flag").unwrap());
        assert!(!parse_bool("0", "flag").unwrap());

        let err = parse_bool("maybe", "redisson.singleServerConfig.enableSingle").unwrap_err();
        assert!(err.to_string().contains("enableSingle"));
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("3000", "timeout").unwrap(), Duration::from_millis(3000));
        assert_eq!(parse_millis(" 0 ", "timeout").unwrap(), Duration::ZERO);
        assert!(matches!(parse_millis("3s", "timeout"), Err(AppError::ConfigError(_))));
        assert!(parse_millis("-1", "timeout").is_err());
    }
}
