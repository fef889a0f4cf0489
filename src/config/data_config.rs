//! 데이터 및 서버 설정 관리 모듈
//!
//! HTTP 서버 바인딩 주소와 MySQL 연결 정보를 관리합니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 기본 포트
    pub const DEFAULT_PORT: u16 = 3000;

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 3000)
    pub fn port() -> u16 {
        parse_port(env::var("PORT").ok().as_deref())
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::error!("PORT 파싱 실패: {}. 기본값 {} 사용", e, ServerConfig::DEFAULT_PORT);
            ServerConfig::DEFAULT_PORT
        }),
        None => ServerConfig::DEFAULT_PORT,
    }
}

/// 관계형 저장소 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MySQL 연결 URL을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: 기본값 `mysql://root@localhost:3306/blood_donor_db`
    pub fn url() -> String {
        env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mysql://root@localhost:3306/blood_donor_db".to_string())
    }
}
