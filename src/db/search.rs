//! # 숙소 다중 필터 검색 모듈
//!
//! 선택적인 필터(`PropertySearch`)들을 하나의 파라미터 바인딩 SQL 문으로 변환하고,
//! 연결 풀에서 실행한 뒤 결과 행을 `PropertyListing`으로 매핑합니다.
//!
//! ## 동적 WHERE 절 구성 방식
//! 1. 필터를 선언 순서대로 확인하면서 `(SQL 조각, 바인딩 값)` 쌍을 목록에 모읍니다
//!    (city → owner_id → minimum_price_per_night → maximum_price_per_night → minimum_rating)
//! 2. 목록이 비어 있지 않으면 `WHERE ` 뒤에 조각들을 `" AND "`로 이어 붙입니다
//! 3. 바인딩 값 목록 맨 끝에 limit을 추가합니다
//!
//! "이미 조건이 있는가"를 기억하는 플래그 없이, 필터가 몇 개로 늘어나도
//! WHERE는 정확히 한 번만 붙습니다.
//!
//! ## SQL 인젝션 방지
//! 사용자 입력은 SQL 문자열에 절대 직접 끼워 넣지 않습니다.
//! 모든 값은 `?` 자리표시자로 남겨두고 `.bind()`로 순서대로 대입합니다.

use crate::db::resolve_limit;
use crate::error::AppError;
use crate::models::{PropertyListing, PropertySearch};
use sqlx::SqlitePool;

/// 모든 검색에 공통인 SELECT ... FROM ... 부분
///
/// LEFT JOIN이므로 리뷰가 없는 숙소도 결과에 포함되며, 이때 평균 평점은 NULL입니다.
const BASE_QUERY: &str = r#"
SELECT properties.*, avg(property_reviews.rating) AS average_rating
FROM properties
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
"#;

/// WHERE 절 뒤에 붙는 그룹화/정렬/개수 제한 부분
///
/// 같은 요금의 숙소끼리는 id 순으로 정렬해 결과 순서를 고정합니다.
const TAIL_QUERY: &str = r#"
GROUP BY properties.id
ORDER BY properties.cost_per_night, properties.id
LIMIT ?
"#;

/// SQL `?` 자리에 바인딩될 값 하나
///
/// 필터마다 타입이 다르므로(문자열/정수/실수) enum으로 묶어 한 목록에 담습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Integer(i64),
    Real(f64),
}

/// 실행 직전의 검색 쿼리: SQL 문자열과 순서대로 바인딩할 값 목록
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearchQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

/// 검색 필터로부터 SQL 문과 바인딩 값 목록을 만듭니다.
///
/// DB 없이 호출할 수 있는 순수 함수이므로, 생성된 SQL과 파라미터를 그대로 검사할 수 있습니다.
///
/// # 필터 규칙
/// | 필터 | SQL 조각 | 바인딩 값 |
/// |------|----------|-----------|
/// | city | `properties.city LIKE ?` | `%city%` |
/// | owner_id | `properties.owner_id = ?` | 정수 |
/// | minimum_price_per_night | `properties.cost_per_night >= ?` | 정수 |
/// | maximum_price_per_night | `properties.cost_per_night <= ?` | 정수 |
/// | minimum_rating | `property_reviews.rating >= ?` | 실수 |
///
/// 빈 문자열과 0은 지정하지 않은 것으로 봅니다.
pub fn build_property_search(options: &PropertySearch, limit: i64) -> PropertySearchQuery {
    // (SQL 조각, 바인딩 값) 쌍을 필터 선언 순서대로 모읍니다.
    let mut predicates: Vec<(&'static str, QueryParam)> = Vec::new();

    // .filter(): Some이어도 조건을 만족하지 않으면 None으로 바꿉니다.
    if let Some(city) = options.city.as_deref().filter(|c| !c.is_empty()) {
        predicates.push((
            "properties.city LIKE ?",
            QueryParam::Text(format!("%{}%", city)),
        ));
    }

    if let Some(owner_id) = options.owner_id.filter(|id| *id != 0) {
        predicates.push(("properties.owner_id = ?", QueryParam::Integer(owner_id)));
    }

    if let Some(min_price) = options.minimum_price_per_night.filter(|p| *p != 0) {
        predicates.push((
            "properties.cost_per_night >= ?",
            QueryParam::Integer(min_price),
        ));
    }

    if let Some(max_price) = options.maximum_price_per_night.filter(|p| *p != 0) {
        predicates.push((
            "properties.cost_per_night <= ?",
            QueryParam::Integer(max_price),
        ));
    }

    if let Some(min_rating) = options.minimum_rating.filter(|r| *r != 0.0) {
        predicates.push(("property_reviews.rating >= ?", QueryParam::Real(min_rating)));
    }

    let mut sql = String::from(BASE_QUERY);

    // 조건이 하나라도 있을 때만 WHERE를 붙이고, 나머지는 AND로 잇습니다.
    if !predicates.is_empty() {
        let clause = predicates
            .iter()
            .map(|(fragment, _)| *fragment)
            .collect::<Vec<_>>()
            .join(" AND ");
        sql.push_str("WHERE ");
        sql.push_str(&clause);
    }

    sql.push_str(TAIL_QUERY);

    // 바인딩 값은 조각과 같은 순서이고, limit은 항상 마지막입니다.
    let mut params: Vec<QueryParam> = predicates.into_iter().map(|(_, value)| value).collect();
    params.push(QueryParam::Integer(limit));

    PropertySearchQuery { sql, params }
}

/// 필터에 맞는 숙소 목록을 1박 요금 오름차순으로 반환합니다.
///
/// # 매개변수
/// - `pool`: DB 연결 풀
/// - `options`: 검색 필터 (모든 필드 선택)
/// - `limit`: 최대 결과 수. `None`이면 10
///
/// # 반환값
/// - `Ok(Vec<PropertyListing>)`: 매칭되는 숙소가 없으면 빈 목록
/// - `Err(AppError::BadRequest)`: limit이 0 이하
/// - `Err(AppError::Database)`: 쿼리 실행 실패 (원본 sqlx 에러 포함)
pub async fn search_properties(
    pool: &SqlitePool,
    options: &PropertySearch,
    limit: Option<i64>,
) -> Result<Vec<PropertyListing>, AppError> {
    let limit = resolve_limit(limit)?;
    let query = build_property_search(options, limit);

    tracing::debug!(sql = %query.sql.trim(), params = ?query.params, "Searching properties");

    // 동적으로 구성한 SQL 문자열로 쿼리를 만들고, 값을 순서대로 바인딩합니다.
    let mut query_builder = sqlx::query_as::<_, PropertyListing>(&query.sql);
    for param in &query.params {
        query_builder = match param {
            QueryParam::Text(value) => query_builder.bind(value.as_str()),
            QueryParam::Integer(value) => query_builder.bind(*value),
            QueryParam::Real(value) => query_builder.bind(*value),
        };
    }

    let listings = query_builder.fetch_all(pool).await?;

    Ok(listings)
}
