//! # 에러 처리 모듈
//!
//! 데이터 접근 계층에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 에러 분류:
//! - **찾을 수 없음**: 에러가 아닙니다. 조회 함수는 `Ok(None)`을 반환합니다.
//! - **저장소 실패**: `AppError::Database`가 원본 `sqlx::Error`를 그대로 담아 전파합니다.
//! - **제약조건 위반**: `AppError::Conflict`(UNIQUE) / `AppError::Constraint`(FK, NOT NULL, CHECK)
//!
//! 어떤 실패도 빈 결과나 `None` 같은 "성공"으로 바뀌어 반환되지 않습니다.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// 데이터 접근 계층에서 발생할 수 있는 모든 에러 종류
///
/// HTTP 계층은 variant를 보고 상태 코드를 고릅니다.
/// (예: `Conflict` → 409, `BadRequest` → 400, 나머지 → 500)
#[derive(Debug, Error)]
pub enum AppError {
    /// 잘못된 호출 인자 (예: 0 이하의 limit)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// UNIQUE 제약조건 위반 (예: 이미 가입된 이메일)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 그 밖의 무결성 제약조건 위반 (외래 키, NOT NULL, CHECK)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// 설정 오류 (필수 환경변수 누락 등)
    #[error("Configuration error: {0}")]
    Config(String),

    /// 서버 내부 오류 (삽입 직후 행이 사라진 경우 등)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류
    /// #[from]: sqlx 함수에서 반환된 에러에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 스키마 적용 실패
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// 쓰기(INSERT) 쿼리에서 나온 sqlx 에러를 제약조건 종류에 따라 분류합니다.
///
/// `?`의 기본 변환(`AppError::Database`)은 제약조건 위반과 연결 실패를
/// 구분하지 못하므로, 쓰기 경로에서는 `.map_err(classify_write_error)`를 먼저 거칩니다.
/// 제약조건 위반이 아닌 에러는 원본 그대로 `Database`에 담깁니다.
pub fn classify_write_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        // ErrorKind는 #[non_exhaustive]이므로 `_` 분기가 필요합니다.
        let classified = match db_err.kind() {
            ErrorKind::UniqueViolation => Some(AppError::Conflict(db_err.message().to_string())),
            ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => Some(AppError::Constraint(db_err.message().to_string())),
            _ => None,
        };

        if let Some(app_err) = classified {
            tracing::warn!("Rejected write: {}", app_err);
            return app_err;
        }
    }

    AppError::Database(err)
}
