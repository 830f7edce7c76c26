use crate::db::resolve_limit;
use crate::error::AppError;
use crate::models::GuestReservation;
use chrono::Utc;
use sqlx::SqlitePool;

/// 게스트의 지난 예약 목록을 시작일 오름차순으로 반환합니다.
///
/// 종료일(`end_date`)이 오늘(UTC)보다 이전인 예약만 포함합니다.
/// 각 행에는 숙소 요약 정보와 숙소의 리뷰 평균 평점이 붙습니다.
/// `limit`이 `None`이면 10건까지 반환합니다.
pub async fn list_guest_reservations(
    pool: &SqlitePool,
    guest_id: i64,
    limit: Option<i64>,
) -> Result<Vec<GuestReservation>, AppError> {
    let limit = resolve_limit(limit)?;
    // 날짜는 "YYYY-MM-DD" 텍스트로 저장되므로 문자열 비교가 곧 날짜 비교입니다.
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    let reservations = sqlx::query_as::<_, GuestReservation>(
        r#"
        SELECT reservations.id, reservations.guest_id, reservations.property_id,
               reservations.start_date, reservations.end_date,
               properties.title, properties.city, properties.cost_per_night,
               properties.thumbnail_photo_url,
               avg(property_reviews.rating) AS average_rating
        FROM reservations
        JOIN properties ON reservations.property_id = properties.id
        LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
        WHERE reservations.guest_id = ?
          AND reservations.end_date < ?
        GROUP BY properties.id, reservations.id
        ORDER BY reservations.start_date
        LIMIT ?
        "#,
    )
    .bind(guest_id)
    .bind(&today)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(reservations)
}
