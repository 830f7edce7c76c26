//! # 숙소(Property) 쿼리 모듈
//!
//! 숙소 등록과 단건 조회를 담당합니다. 목록 검색은 `search` 모듈에 있습니다.
//!
//! 등록된 숙소는 검색이 읽는 것과 같은 `properties` 테이블에 저장되므로,
//! 등록 직후의 검색 결과에 바로 나타납니다.

use crate::error::{classify_write_error, AppError};
use crate::models::property::{NewProperty, Property};
use sqlx::SqlitePool;

/// ID로 단일 숙소를 조회합니다.
///
/// # 반환값
/// - `Ok(Some(Property))`: 숙소를 찾은 경우
/// - `Ok(None)`: 해당 ID의 숙소가 없는 경우
/// - `Err(AppError)`: DB 에러 발생 시
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Property>, AppError> {
    let property = sqlx::query_as::<_, Property>(
        r#"
        SELECT id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
               cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
               country, street, city, province, post_code, active
        FROM properties
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(property)
}

/// 새 숙소를 등록합니다.
///
/// 숙소 레코드를 DB에 삽입하고, 생성된 숙소를 다시 조회하여 반환합니다.
/// `id`는 SQLite가 생성하고(`last_insert_rowid`), `active`는 기본값(1)이 사용됩니다.
///
/// # 에러
/// - `AppError::Constraint`: `owner_id`에 해당하는 사용자가 없음 (외래 키 위반)
/// - `AppError::Database`: 그 밖의 DB 에러
pub async fn create_property(
    pool: &SqlitePool,
    property: &NewProperty,
) -> Result<Property, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO properties (
            owner_id, title, description, thumbnail_photo_url, cover_photo_url,
            cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
            country, street, city, province, post_code
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.thumbnail_photo_url)
    .bind(&property.cover_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.city)
    .bind(&property.province)
    .bind(&property.post_code)
    .execute(pool)
    .await
    .map_err(classify_write_error)?;

    let id = result.last_insert_rowid();
    tracing::debug!("Created property {} for owner {}", id, property.owner_id);

    find_by_id(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created property".to_string()))
}
