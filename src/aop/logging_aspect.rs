//! 로깅 어드바이스 데코레이터

use std::sync::{Mutex, PoisonError};
use log::{error, info};
use serde::Serialize;
use crate::aop::target_service::TargetService;
use crate::errors::AppResult;

/// 어드바이스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advice {
    Before,
    AfterReturning,
    AfterThrowing,
    After,
}

/// 어드바이스가 실행된 지점
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinPoint {
    pub method: &'static str,
    pub advice: Advice,
    /// 인자, 반환값 또는 에러 메시지
    pub detail: Option<String>,
}

/// 대상 서비스를 감싸 메서드 호출 전후에 로그를 남기는 데코레이터
///
/// 각 호출은 `Before` → (`AfterReturning` | `AfterThrowing`) → `After` 순으로 기록됩니다.
pub struct LoggingAspect<S> {
    target: S,
    join_points: Mutex<Vec<JoinPoint>>,
}

impl<S: TargetService> LoggingAspect<S> {
    pub fn new(target: S) -> Self {
        Self {
            target,
            join_points: Mutex::new(Vec::new()),
        }
    }

    /// 지금까지 기록된 조인 포인트
    pub fn join_points(&self) -> Vec<JoinPoint> {
        self.join_points
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, method: &'static str, advice: Advice, detail: Option<String>) {
        match advice {
            Advice::AfterThrowing => error!("[{:?}] {} {}", advice, method, detail.as_deref().unwrap_or("")),
            _ => info!("[{:?}] {} {}", advice, method, detail.as_deref().unwrap_or("")),
        }
        self.join_points
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(JoinPoint { method, advice, detail });
    }

    fn around<R>(&self, method: &'static str, args: Option<String>, call: impl FnOnce(&S) -> R) -> R {
        self.record(method, Advice::Before, args);
        let result = call(&self.target);
        self.record(method, Advice::AfterReturning, None);
        self.record(method, Advice::After, None);
        result
    }
}

impl<S: TargetService> TargetService for LoggingAspect<S> {
    fn do_method1(&self) {
        self.around("doMethod1", None, |target| target.do_method1())
    }

    fn do_method2(&self) -> String {
        self.record("doMethod2", Advice::Before, None);
        let result = self.target.do_method2();
        self.record("doMethod2", Advice::AfterReturning, Some(result.clone()));
        self.record("doMethod2", Advice::After, None);
        result
    }

    fn do_method3(&self) -> AppResult<()> {
        self.record("doMethod3", Advice::Before, None);
        let result = self.target.do_method3();
        match &result {
            Ok(()) => self.record("doMethod3", Advice::AfterReturning, None),
            Err(e) => self.record("doMethod3", Advice::AfterThrowing, Some(e.to_string())),
        }
        self.record("doMethod3", Advice::After, None);
        result
    }

    fn do_method4(&self, demo: &str) {
        self.around("doMethod4", Some(demo.to_string()), |target| target.do_method4(demo))
    }
}
