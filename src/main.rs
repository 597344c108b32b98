//! IFSTA OAuth 전략 데모 서버
//!
//! IFSTA 전략을 레지스트리에 등록하고 Actix-web HTTP 서버로 노출합니다.

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use ifsta_oauth_strategy::config::{Environment, IfstaStrategyOptions, ServerConfig};
use ifsta_oauth_strategy::core::strategy::VerifyFn;
use ifsta_oauth_strategy::domain::models::auth::AuthenticatedUser;
use ifsta_oauth_strategy::domain::models::oauth::ifsta_oauth_model::Profile;
use ifsta_oauth_strategy::errors::{AppError, AppResult};
use ifsta_oauth_strategy::handlers::auth::AppRegistry;
use ifsta_oauth_strategy::routes::configure_all_routes;
use ifsta_oauth_strategy::services::auth::IfstaStrategy;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 IFSTA OAuth 데모 서버 시작중...");

    let registry = match build_registry() {
        Ok(registry) => web::Data::new(registry),
        Err(e) => {
            error!("인증 전략 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 등록된 인증 전략: {:?}", registry.names());

    start_http_server(registry).await
}

/// 환경변수에서 IFSTA 옵션을 읽어 전략을 등록합니다
///
/// 검증 콜백은 프로필 식별자가 있는 사용자만 통과시킵니다.
fn build_registry() -> AppResult<AppRegistry> {
    let options = IfstaStrategyOptions::from_env()?;

    let verify = VerifyFn(|_access: String, _refresh: Option<String>, profile: Profile| async move {
        Ok::<_, AppError>(AuthenticatedUser::from_profile(&profile))
    });

    let registry = AppRegistry::new();
    registry.use_strategy(Arc::new(IfstaStrategy::with_defaults(options, verify)?));

    Ok(registry)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: web::Data<AppRegistry>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: http://{}/api/v1/auth/ifsta/login", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 결과는 stderr로 남김
    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=ifsta_oauth_strategy=debug cargo run
/// ```
fn init_logging() {
    let default_filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}
