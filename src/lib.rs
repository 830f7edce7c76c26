//! # LightBnB 데이터 접근 계층
//!
//! 숙소 대여 웹 애플리케이션이 사용하는 사용자/예약/숙소 조회와
//! 다중 필터 숙소 검색을 제공하는 라이브러리입니다.
//!
//! 사용 순서:
//! 1. `Config::load()`로 환경변수(.env) 읽기
//! 2. `db::connect(&config)`로 SQLite 연결 풀 생성 + 스키마 적용
//! 3. `db::users`, `db::properties`, `db::reservations`, `db::search`의 함수에
//!    `&pool`을 넘겨 호출
//!
//! HTTP 라우팅, 세션/인증 미들웨어는 이 크레이트 밖에서 처리합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 로깅(tracing) 구독자를 초기화합니다.
///
/// `RUST_LOG` 환경변수로 로그 레벨을 제어하며, 없으면
/// `lightbnb=debug,sqlx=warn`을 사용합니다. 검색 SQL과 바인딩 값은
/// `lightbnb=debug`에서 출력됩니다.
///
/// 이미 전역 구독자가 등록되어 있으면 아무것도 하지 않으므로
/// 테스트마다 호출해도 안전합니다.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lightbnb=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
