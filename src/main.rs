//! Redis 부트스트랩 서비스 메인 애플리케이션
//!
//! 프로퍼티를 읽어 Redis 클라이언트를 한 번 구성하고,
//! Actix-web 기반의 HTTP 서버로 캐시 API와 헬스체크를 제공합니다.
//!
//! 설정 오류나 연결 실패는 시작 시점에 치명적이며, 프로세스는 종료 코드 1로 끝납니다.

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use redis_bootstrap::caching::client_factory::build_client;
use redis_bootstrap::caching::handle::ClientHandle;
use redis_bootstrap::caching::redis::RedisTemplate;
use redis_bootstrap::config::{ConnectionConfig, EnvPropertySource, Profile, ServerConfig, DEFAULT_NETTY_THREADS, DEFAULT_THREADS};
use redis_bootstrap::handlers::AppState;
use redis_bootstrap::routes::configure_all_routes;
use redis_bootstrap::utils::display_terminal::{print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task};

fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Redis Bootstrap");
    print_step_start(1, "Loading redisson properties");

    let config = match ConnectionConfig::load(&EnvPropertySource) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    let (threads, netty_threads) = config
        .as_ref()
        .map(|c| (c.threads, c.netty_threads))
        .unwrap_or((DEFAULT_THREADS, DEFAULT_NETTY_THREADS));

    // I/O 런타임 워커 수는 nettyThreads를 따릅니다
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(netty_threads.max(1))
        .enable_all()
        .build()?;

    runtime.block_on(run(config, threads))
}

async fn run(config: Option<ConnectionConfig>, threads: usize) -> std::io::Result<()> {
    info!("🚀 Redis 부트스트랩 서비스 시작중...");

    let handle = initialize_redis_client(config.as_ref()).await;
    print_final_summary(config.as_ref());

    let state = AppState::new(handle.clone().map(RedisTemplate::new));
    let result = start_http_server(state, threads).await;

    if let Some(handle) = handle {
        handle.close();
        info!("Redis 클라이언트 종료");
    }

    result
}

/// 설정이 있으면 클라이언트를 만들고, 실패하면 프로세스를 종료합니다
///
/// # Returns
///
/// * `Some(ClientHandle)` - 단일/클러스터 모드 중 하나가 활성화됨
/// * `None` - 두 모드 모두 비활성화됨
async fn initialize_redis_client(config: Option<&ConnectionConfig>) -> Option<ClientHandle> {
    let Some(config) = config else {
        info!("enableSingle / enableCluster 모두 비활성화되어 Redis 클라이언트를 만들지 않습니다");
        return None;
    };

    print_step_start(2, &format!("Connecting ({})", config.configuration_name()));
    for address in config.addresses() {
        print_sub_task("Address", &address);
    }

    match build_client(config).await {
        Ok(handle) => {
            print_step_complete(2, "Redis client ready", config.addresses().len());
            info!("✅ Redis 연결 성공");
            Some(handle)
        }
        Err(e) => {
            error!("❌ Redis 클라이언트 생성 실패: {}", e);
            std::process::exit(1);
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState, threads: usize) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(threads.max(1)) // redisson.threads
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = Profile::current();

    info!("Current profile: {:?}", profile);

    match profile.env_file() {
        Some(file) => match dotenv::from_filename(file) {
            Ok(_) => info!("{} 파일 로드 됨", file),
            Err(e) => error!("{} 파일 로드 실패: {}", file, e),
        },
        None => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
