//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 설정 값 파싱, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 목록/불리언/밀리초 파싱
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::split_list;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let nodes = split_list("redis://a:7000, redis://b:7001");
//!
//! print_boxed_title("Redis Bootstrap");
//! ```

pub mod string_utils;
pub mod display_terminal;
