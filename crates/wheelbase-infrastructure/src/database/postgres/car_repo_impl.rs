//! PostgreSQL car repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use wheelbase_core::domain::{Car, CarUpdate, CarWithOwner, NewCar};
use wheelbase_core::error::DomainError;
use wheelbase_core::repositories::CarRepository;

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CarRow {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
    pub owner_id: i32,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car {
            id: row.id,
            brand: row.brand,
            model: row.model,
            fuel_type: row.fuel_type,
            price: row.price,
            owner_id: row.owner_id,
        }
    }
}

#[derive(Debug, FromRow)]
struct CarWithOwnerRow {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
    pub owner_id: i32,
    pub owner_name: String,
}

impl From<CarWithOwnerRow> for CarWithOwner {
    fn from(row: CarWithOwnerRow) -> Self {
        CarWithOwner {
            id: row.id,
            brand: row.brand,
            model: row.model,
            fuel_type: row.fuel_type,
            price: row.price,
            owner_id: row.owner_id,
            owner_name: row.owner_name,
        }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn list_with_owner(&self, limit: i64) -> Result<Vec<CarWithOwner>, DomainError> {
        let rows: Vec<CarWithOwnerRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.brand, c.model, c.fuel_type, c.price, c.owner_id,
                   u.name AS owner_name
            FROM cars c
            JOIN users u ON u.id = c.owner_id
            ORDER BY c.id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("listing cars", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CarWithOwner>, DomainError> {
        let pattern = format!("%{}%", query);
        let rows: Vec<CarWithOwnerRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.brand, c.model, c.fuel_type, c.price, c.owner_id,
                   u.name AS owner_name
            FROM cars c
            JOIN users u ON u.id = c.owner_id
            WHERE c.brand ILIKE $1 OR c.model ILIKE $1
            ORDER BY c.id ASC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(&pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("searching cars", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count_matching(&self, query: &str) -> Result<i64, DomainError> {
        let pattern = format!("%{}%", query);
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM cars c
            WHERE c.brand ILIKE $1 OR c.model ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_err("counting cars", e))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DomainError> {
        let row: Option<CarRow> = sqlx::query_as(
            r#"
            SELECT id, brand, model, fuel_type, price, owner_id
            FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("finding car by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, car: &NewCar) -> Result<Car, DomainError> {
        let row: CarRow = sqlx::query_as(
            r#"
            INSERT INTO cars (brand, model, fuel_type, price, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, brand, model, fuel_type, price, owner_id
            "#,
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(&car.fuel_type)
        .bind(car.price)
        .bind(car.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_err("creating car", e))?;

        Ok(row.into())
    }

    async fn update(&self, id: i32, update: &CarUpdate) -> Result<Option<Car>, DomainError> {
        let row: Option<CarRow> = sqlx::query_as(
            r#"
            UPDATE cars
            SET brand = COALESCE($2, brand),
                model = COALESCE($3, model),
                fuel_type = COALESCE($4, fuel_type),
                price = COALESCE($5, price),
                owner_id = COALESCE($6, owner_id)
            WHERE id = $1
            RETURNING id, brand, model, fuel_type, price, owner_id
            "#,
        )
        .bind(id)
        .bind(&update.brand)
        .bind(&update.model)
        .bind(&update.fuel_type)
        .bind(update.price)
        .bind(update.owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("updating car", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query(r#"DELETE FROM cars WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("deleting car", e))?;

        Ok(result.rows_affected() > 0)
    }
}
