//! # AOP 데모 모듈
//!
//! 실행(execution) 포인트컷 학습용 예제입니다. Spring AOP의 프록시 대신
//! 같은 트레이트를 구현하는 데코레이터로 어드바이스를 적용합니다.
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `TargetService` 인터페이스 | [`TargetService`] 트레이트 |
//! | `@Before` / `@AfterReturning` / `@AfterThrowing` / `@After` | [`Advice`] |
//! | 프록시 빈 | [`LoggingAspect`] |
//!
//! ```rust,ignore
//! let service = LoggingAspect::new(DemoTargetService::default());
//! service.do_method4("demo");
//! for jp in service.join_points() {
//!     println!("{:?}", jp);
//! }
//! ```

pub mod logging_aspect;
pub mod target_service;

pub use logging_aspect::*;
pub use target_service::*;
