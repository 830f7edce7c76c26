//! # 데이터 모델 모듈
//!
//! 데이터베이스 행과 1:1로 대응하는 구조체들을 정의합니다.
//! - `property`: 숙소(Property), 검색 필터와 검색 결과
//! - `reservation`: 예약(Reservation)과 게스트 예약 목록 행
//! - `user`: 사용자(User)
//!
//! `#[derive(sqlx::FromRow)]`가 붙은 구조체는 `query_as`로 바로 매핑됩니다.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::*;
pub use reservation::*;
pub use user::*;
