//! 통합 테스트 공용 픽스처: 인메모리 SQLite 풀과 샘플 데이터
#![allow(dead_code)]

use lightbnb::db::{self, properties, users};
use lightbnb::models::{NewProperty, NewUser, Property, User};
use lightbnb::Config;
use sqlx::SqlitePool;

/// 스키마가 적용된 인메모리 DB 풀
///
/// `sqlite::memory:`는 연결마다 별도의 DB가 되므로 연결을 하나로 제한합니다.
pub async fn test_pool() -> SqlitePool {
    lightbnb::init_tracing();
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    db::connect(&config).await.unwrap()
}

pub async fn add_user(pool: &SqlitePool, name: &str, email: &str) -> User {
    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    };
    users::create_user(pool, &new_user).await.unwrap()
}

pub fn new_property(owner_id: i64, title: &str, city: &str, cost_per_night: i64) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: format!("https://images.example.com/{}-thumb.jpg", title),
        cover_photo_url: format!("https://images.example.com/{}.jpg", title),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        country: "Canada".to_string(),
        street: "123 Main St".to_string(),
        city: city.to_string(),
        province: "BC".to_string(),
        post_code: "V5K 0A1".to_string(),
    }
}

pub async fn add_property(
    pool: &SqlitePool,
    owner_id: i64,
    title: &str,
    city: &str,
    cost_per_night: i64,
) -> Property {
    properties::create_property(pool, &new_property(owner_id, title, city, cost_per_night))
        .await
        .unwrap()
}

/// 예약을 직접 삽입합니다 (예약 생성은 이 크레이트의 기능이 아닙니다).
pub async fn add_reservation(
    pool: &SqlitePool,
    guest_id: i64,
    property_id: i64,
    start_date: &str,
    end_date: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO reservations (guest_id, property_id, start_date, end_date) VALUES (?, ?, ?, ?)",
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(start_date)
    .bind(end_date)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

/// 리뷰와 그 리뷰가 참조할 예약을 함께 삽입합니다.
pub async fn add_review(pool: &SqlitePool, guest_id: i64, property_id: i64, rating: i64) {
    let reservation_id =
        add_reservation(pool, guest_id, property_id, "2016-03-01", "2016-03-04").await;

    sqlx::query(
        "INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(reservation_id)
    .bind(rating)
    .bind("review")
    .execute(pool)
    .await
    .unwrap();
}

/// 검색/예약 테스트에서 공유하는 샘플 데이터
///
/// | 숙소 | 도시 | 1박 요금 | 리뷰 평점 |
/// |------|------|----------|-----------|
/// | island | vancouver island | 5000 | 4 |
/// | north_vancouver | North Vancouver | 8000 | 3 |
/// | toronto | Toronto | 12000 | 5 |
/// | vancouver | Vancouver | 15000 | 5, 4 |
/// | calgary | Calgary | 20000 | (없음) |
pub struct Fixture {
    pub pool: SqlitePool,
    pub owner: User,
    pub guest: User,
    pub reviewer: User,
    pub island: Property,
    pub north_vancouver: Property,
    pub toronto: Property,
    pub vancouver: Property,
    pub calgary: Property,
}

impl Fixture {
    pub async fn new() -> Self {
        let pool = test_pool().await;

        let owner = add_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = add_user(&pool, "Gus Guest", "gus@example.com").await;
        let reviewer = add_user(&pool, "Rita Reviewer", "rita@example.com").await;

        let vancouver = add_property(&pool, owner.id, "Gastown Loft", "Vancouver", 15_000).await;
        let north_vancouver =
            add_property(&pool, owner.id, "Lonsdale Suite", "North Vancouver", 8_000).await;
        let toronto = add_property(&pool, owner.id, "Queen West Flat", "Toronto", 12_000).await;
        let island =
            add_property(&pool, owner.id, "Tofino Cabin", "vancouver island", 5_000).await;
        let calgary = add_property(&pool, owner.id, "Beltline Condo", "Calgary", 20_000).await;

        add_review(&pool, reviewer.id, vancouver.id, 5).await;
        add_review(&pool, reviewer.id, vancouver.id, 4).await;
        add_review(&pool, reviewer.id, north_vancouver.id, 3).await;
        add_review(&pool, reviewer.id, toronto.id, 5).await;
        add_review(&pool, reviewer.id, island.id, 4).await;

        Self {
            pool,
            owner,
            guest,
            reviewer,
            island,
            north_vancouver,
            toronto,
            vancouver,
            calgary,
        }
    }
}
