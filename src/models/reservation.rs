use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub guest_id: i64,
    pub property_id: i64,
    /// "YYYY-MM-DD"
    pub start_date: String,
    /// "YYYY-MM-DD"
    pub end_date: String,
}

/// 게스트의 지난 예약 한 건과 해당 숙소 요약 정보
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GuestReservation {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub reservation: Reservation,
    pub title: String,
    pub city: String,
    pub cost_per_night: i64,
    pub thumbnail_photo_url: String,
    pub average_rating: Option<f64>,
}
