//! 터미널 출력 포맷팅 유틸리티
//!
//! 부트스트랩 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 연결 요약 등을 시각적으로 표현합니다.

use crate::config::ConnectionConfig;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하며 텍스트는 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Redis Bootstrap                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let border = "═".repeat(50);
    format!("╔{border}╗\n║{title:^50}║\n╚{border}╝")
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Loading redisson properties
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 2: Connection pool ready (24 connections)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} connections)", step, description, count);
}

/// 하위 작업 상태를 표시합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 연결 설정 요약을 출력합니다
///
/// 설정이 없으면(두 모드 모두 비활성화) Redis가 비활성화되었음을 표시합니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🎉 REDIS CLIENT INITIALIZED           ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Configuration: SingleServerConfig
///    🔗 Addresses: redis://localhost:6379
///    🔧 Threads: 16 / Netty threads: 32
/// ```
pub fn print_final_summary(config: Option<&ConnectionConfig>) {
    println!();
    match config {
        Some(config) => {
            print_boxed_title("🎉 REDIS CLIENT INITIALIZED");
            println!("   📦 Configuration: {}", config.configuration_name());
            println!("   🔗 Addresses: {}", config.addresses().join(", "));
            println!("   🔧 Threads: {} / Netty threads: {}", config.threads, config.netty_threads);
        }
        None => {
            print_boxed_title("REDIS CLIENT DISABLED");
            println!("   enableSingle / enableCluster are both false");
        }
    }
    println!();
}
