//! 토큰 게이트 메인 애플리케이션
//!
//! 설정을 읽고 서비스를 조립한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 서명 키 설정 오류는 기동 단계에서 치명적 오류로 처리됩니다.

use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use token_gate_backend::config::{JwtConfig, ServerConfig};
use token_gate_backend::repositories::tokens::InMemoryRefreshTokenStore;
use token_gate_backend::repositories::users::InMemoryUserRepository;
use token_gate_backend::routes::configure_all_routes;
use token_gate_backend::services::auth::TokenService;
use token_gate_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 토큰 게이트 서비스 시작중...");

    let jwt_config = JwtConfig::from_env().map_err(|e| {
        error!("❌ JWT 설정 오류: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("JWT 설정 로드됨: {:?}", jwt_config);

    let token_service = web::Data::new(TokenService::new(
        jwt_config,
        Arc::new(InMemoryRefreshTokenStore::new()),
    ));
    let user_service = web::Data::new(UserService::new(Arc::new(
        InMemoryUserRepository::with_seed_data(),
    )));

    spawn_refresh_token_sweeper(token_service.clone());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(token_service, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    token_service: web::Data<TokenService>,
    user_service: web::Data<UserService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(token_service.clone())
            .app_data(user_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 만료된 리프레시 토큰을 주기적으로 정리하는 백그라운드 작업을 시작합니다
///
/// 삽입 시의 지연 정리와 별개로, 새 토큰 발급이 없는 동안에도 목록이 줄어들도록 합니다.
fn spawn_refresh_token_sweeper(token_service: web::Data<TokenService>) {
    let period = Duration::from_secs(ServerConfig::refresh_sweep_interval_secs());
    info!("🧹 리프레시 토큰 정리 주기: {}초", period.as_secs());

    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(period);
        loop {
            interval.tick().await;
            let purged = token_service.purge_expired();
            if purged > 0 {
                info!(
                    "만료된 리프레시 토큰 {}개 정리됨 (남은 활성 토큰: {})",
                    purged,
                    token_service.active_refresh_tokens()
                );
            }
        }
    });
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와 자체 서버 오리진을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:5173")
        .allowed_origin("http://127.0.0.1:5173")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
