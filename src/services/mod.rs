//! # 서비스 모듈
//!
//! 데이터베이스 쿼리와 무관한 보조 로직을 모아둔 모듈입니다.
//! - `password`: 사용자 비밀번호 해싱 및 검증 (Argon2id)

pub mod password;
