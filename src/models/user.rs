use crate::error::AppError;
use crate::services::password;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// 저장된 비밀번호 해시. JSON으로 내보내지 않습니다.
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// 이미 해싱된 비밀번호. 평문은 `NewUser::with_password`로 넘깁니다.
    pub password: String,
}

impl NewUser {
    /// 평문 비밀번호를 Argon2id로 해싱하여 삽입용 레코드를 만듭니다.
    pub fn with_password(
        name: impl Into<String>,
        email: impl Into<String>,
        plain_password: &str,
    ) -> Result<Self, AppError> {
        Ok(Self {
            name: name.into(),
            email: email.into(),
            password: password::hash_password(plain_password)?,
        })
    }
}
