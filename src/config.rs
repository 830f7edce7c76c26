//! # 데이터베이스 설정(Configuration) 모듈
//!
//! 환경변수에서 연결 풀 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (예: "sqlite:data/lightbnb.db")
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀의 최대 연결 수 (기본값: 5)

use crate::error::AppError;
use std::env;

/// 연결 풀의 기본 최대 연결 수
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 데이터 접근 계층의 설정을 담는 구조체
///
/// 시작 시 한 번 읽어온 후 `db::connect`에 넘깁니다.
/// 테스트에서는 필드를 직접 채워 인메모리 DB를 가리키게 할 수 있습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 연결 URL
    pub database_url: String,
    /// 연결 풀의 최대 연결 수
    pub max_connections: u32,
}

impl Config {
    /// `.env` 파일을 먼저 읽은 뒤 환경변수에서 설정을 만듭니다.
    ///
    /// .env 파일이 없어도 에러 없이 넘어갑니다 (`.ok()`).
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`이 없으면 `AppError::Config`를 반환합니다.
    /// `DATABASE_MAX_CONNECTIONS`는 없거나 숫자가 아니면 기본값을 씁니다.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL must be set".to_string()))?;

        Ok(Self {
            database_url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }
}
