//! # 비밀번호 해싱 서비스
//!
//! `users.password` 컬럼에는 평문이 아니라 Argon2id 해시(PHC 문자열)가 저장됩니다.
//! 로그인 처리 쪽(HTTP 계층)은 `verify_password`로 입력값을 검증합니다.

use crate::error::AppError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// 평문 비밀번호를 Argon2id로 해싱합니다.
///
/// 매 호출마다 `OsRng`로 새 솔트를 만들므로 같은 비밀번호라도 결과가 다릅니다.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
        .to_string();

    Ok(hash)
}

/// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
///
/// 해시 문자열 자체를 파싱할 수 없으면 `false`를 반환합니다.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok()
}
