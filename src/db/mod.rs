//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! HTTP 핸들러는 `connect`로 만든 연결 풀을 보관해 두었다가
//! 이 모듈의 함수에 `&SqlitePool`로 넘겨 DB 작업을 수행합니다.
//! 전역 풀은 없습니다. 풀은 항상 호출하는 쪽이 만들어서 주입합니다.
//!
//! 각 하위 모듈:
//! - `properties`: 숙소 조회/등록 쿼리
//! - `reservations`: 게스트의 지난 예약 조회 쿼리
//! - `search`: 다중 필터 숙소 검색 (동적 WHERE 절 구성)
//! - `users`: 사용자 조회/가입 쿼리

pub mod properties;
pub mod reservations;
pub mod search;
pub mod users;

pub use search::{build_property_search, search_properties, PropertySearchQuery, QueryParam};

use crate::config::Config;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// 목록 조회 함수에 limit을 지정하지 않았을 때 사용하는 기본값
pub const DEFAULT_LIMIT: i64 = 10;

/// 설정에 따라 SQLite 연결 풀을 만들고 스키마를 적용합니다.
///
/// ## 연결 옵션
/// - `create_if_missing(true)`: DB 파일이 없으면 새로 생성
/// - `foreign_keys(true)`: 외래 키 제약조건 활성화 (예약/리뷰 → 숙소/사용자 무결성)
/// - `PRAGMA case_sensitive_like = ON`: 도시 이름 LIKE 검색을 대소문자 구분으로
///
/// SQLite의 LIKE는 기본적으로 ASCII 대소문자를 구분하지 않기 때문에,
/// 연결이 만들어질 때마다 `after_connect`로 PRAGMA를 설정합니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA case_sensitive_like = ON")
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect_with(options)
        .await?;

    tracing::info!(
        "Connected to {} (max {} connections)",
        config.database_url,
        config.max_connections
    );

    // sqlx::migrate!는 컴파일 타임에 ./migrations 폴더의 SQL 파일을 포함시킵니다.
    // 이미 적용된 파일은 건너뜁니다.
    tracing::info!("Applying LightBnB schema...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// limit 인자를 검증하고 기본값을 채웁니다.
///
/// SQLite는 음수 LIMIT을 "제한 없음"으로 해석하므로 0 이하는 거부합니다.
pub(crate) fn resolve_limit(limit: Option<i64>) -> Result<i64, AppError> {
    match limit {
        None => Ok(DEFAULT_LIMIT),
        Some(n) if n > 0 => Ok(n),
        Some(n) => Err(AppError::BadRequest(format!(
            "limit must be positive, got {}",
            n
        ))),
    }
}
