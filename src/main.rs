//! 헌혈자 찾기 메인 애플리케이션
//!
//! MySQL 연결과 메일러를 초기화하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use blood_donor_finder::config::{DatabaseConfig, MailConfig, ServerConfig};
use blood_donor_finder::db::Database;
use blood_donor_finder::repositories::donors::{DonorRepository, MySqlDonorRepository};
use blood_donor_finder::routes::configure_all_routes;
use blood_donor_finder::services::contact::ContactService;
use blood_donor_finder::services::donors::DonorService;
use blood_donor_finder::services::mail::{initialize_mailer, verify_transport, MailTransport};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 헌혈자 찾기 서비스 시작중...");

    let database = initialize_database().await;

    // 메일러 초기화 (테스트 계정 발급 실패는 치명적)
    let mail_config = MailConfig::from_env();
    let mailer: Arc<dyn MailTransport> = Arc::new(
        initialize_mailer(&mail_config)
            .await
            .map_err(|e| std::io::Error::other(format!("메일러 초기화 실패: {}", e)))?,
    );

    // 연결 검증은 로그만 남기고 계속 진행
    verify_transport(mailer.as_ref()).await;

    let donor_repo: Arc<dyn DonorRepository> = Arc::new(MySqlDonorRepository::new(database));
    let donor_service = web::Data::new(DonorService::new(donor_repo.clone()));
    let contact_service = web::Data::new(ContactService::new(donor_repo, mailer));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(donor_service, contact_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    donor_service: web::Data<DonorService>,
    contact_service: web::Data<ContactService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(donor_service.clone())
            .app_data(contact_service.clone())
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

/// MySQL 연결을 엽니다
///
/// 연결에 실패하면 에러를 로그로 남기고 프로세스를 종료합니다.
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    match Database::connect(&DatabaseConfig::url()).await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            error!("DB connection error: {}", e);
            std::process::exit(1);
        }
    }
}
