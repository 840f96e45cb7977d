//! 어드바이스 적용 대상 서비스

use log::info;
use crate::errors::{AppError, AppResult};

/// 실행 포인트컷의 대상이 되는 서비스
pub trait TargetService: Send + Sync {
    /// 인자와 반환값이 없는 메서드
    fn do_method1(&self);

    /// 반환값이 있는 메서드
    fn do_method2(&self) -> String;

    /// 실패할 수 있는 메서드
    fn do_method3(&self) -> AppResult<()>;

    /// 인자가 있는 메서드
    fn do_method4(&self, demo: &str);
}

/// 데모 구현
///
/// `fail_method3`가 참이면 `do_method3`는 항상 에러를 반환합니다.
#[derive(Debug, Clone, Default)]
pub struct DemoTargetService {
    pub fail_method3: bool,
}

impl TargetService for DemoTargetService {
    fn do_method1(&self) {
        info!("doMethod1 실행");
    }

    fn do_method2(&self) -> String {
        info!("doMethod2 실행");
        "method2 result".to_string()
    }

    fn do_method3(&self) -> AppResult<()> {
        info!("doMethod3 실행");
        if self.fail_method3 {
            return Err(AppError::InternalError("doMethod3 failed".to_string()));
        }
        Ok(())
    }

    fn do_method4(&self, demo: &str) {
        info!("doMethod4 실행, demo = {}", demo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_target_service() {
        let service = DemoTargetService::default();

        service.do_method1();
        service.do_method4("demo");
        assert_eq!(service.do_method2(), "method2 result");
        assert!(service.do_method3().is_ok());

        let failing = DemoTargetService { fail_method3: true };
        assert!(matches!(failing.do_method3(), Err(AppError::InternalError(_))));
    }
}
