use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::rider::errors::RiderError;
use crate::rider::models::EmailAddress;
use crate::rider::models::NewRider;
use crate::rider::models::PhoneNumber;
use crate::rider::models::Rider;
use crate::rider::models::RiderCredentials;
use crate::rider::models::RiderId;
use crate::rider::models::UniqueField;
use crate::rider::ports::RiderRepository;

const PHONE_UNIQUE_CONSTRAINT: &str = "riders_phone_key";
const EMAIL_UNIQUE_CONSTRAINT: &str = "riders_email_key";

pub struct PostgresRiderRepository {
    pool: PgPool,
}

impl PostgresRiderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RiderRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<RiderRow> for Rider {
    type Error = RiderError;

    fn try_from(row: RiderRow) -> Result<Self, Self::Error> {
        Ok(Rider {
            id: RiderId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: EmailAddress::new(row.email)
                .map_err(|e| RiderError::DatabaseError(e.to_string()))?,
            phone: PhoneNumber::new(row.phone)
                .map_err(|e| RiderError::DatabaseError(e.to_string()))?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct CredentialsRow {
    id: Uuid,
    password_hash: String,
}

#[async_trait]
impl RiderRepository for PostgresRiderRepository {
    async fn exists(&self, field: UniqueField, value: &str) -> Result<bool, RiderError> {
        let query = match field {
            UniqueField::Phone => "SELECT EXISTS(SELECT 1 FROM riders WHERE phone = $1)",
            UniqueField::Email => {
                "SELECT EXISTS(SELECT 1 FROM riders WHERE LOWER(email) = LOWER($1))"
            }
        };

        let exists: bool = sqlx::query_scalar(query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RiderError::DatabaseError(e.to_string()))?;

        tracing::debug!(field = %field, exists, "Uniqueness checked");

        Ok(exists)
    }

    async fn create(&self, rider: NewRider) -> Result<Rider, RiderError> {
        let rider = Rider {
            id: RiderId::new(),
            first_name: rider.first_name,
            last_name: rider.last_name,
            email: rider.email,
            phone: rider.phone,
            password_hash: rider.password_hash,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO riders (id, first_name, last_name, email, phone, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(rider.id.0)
        .bind(&rider.first_name)
        .bind(&rider.last_name)
        .bind(rider.email.as_str())
        .bind(rider.phone.as_str())
        .bind(&rider.password_hash)
        .bind(rider.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some(PHONE_UNIQUE_CONSTRAINT) {
                        return RiderError::PhoneNumberAlreadyTaken(rider.phone.to_string());
                    }
                    if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
                        return RiderError::EmailAddressAlreadyTaken(rider.email.to_string());
                    }
                }
            }
            RiderError::DatabaseError(e.to_string())
        })?;

        Ok(rider)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RiderCredentials>, RiderError> {
        let row: Option<CredentialsRow> = sqlx::query_as(
            r#"
            SELECT id, password_hash
            FROM riders
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RiderError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| RiderCredentials {
            id: RiderId(r.id),
            password_hash: r.password_hash,
        }))
    }

    async fn list_all(&self) -> Result<Vec<Rider>, RiderError> {
        let rows: Vec<RiderRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email, phone, password_hash, created_at
            FROM riders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RiderError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Rider::try_from).collect()
    }
}
