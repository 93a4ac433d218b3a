use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::CartEntry;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartEntryEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<CartEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartEntryEntity>(
            "SELECT id, product_id, created_at FROM cart_entries ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CartEntry, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntryEntity>(
            "SELECT id, product_id, created_at FROM cart_entries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_entries")
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(count.max(0) as u64)
    }

    async fn save(&self, entry: &CartEntry) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO cart_entries (id, product_id, created_at) VALUES ($1, $2, $3)")
            .bind(entry.id)
            .bind(entry.product_id.as_str())
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        // A single statement: either every row goes or none does.
        let result = sqlx::query("DELETE FROM cart_entries")
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
