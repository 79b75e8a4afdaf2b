//! Bootcamp repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Bootcamp};

/// Read access to bootcamps
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BootcampRepository: Send + Sync {
    /// Find bootcamp by ID
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Bootcamp>>;
}

/// PostgreSQL implementation of [`BootcampRepository`]
pub struct PgBootcampRepository {
    pool: PgPool,
}

impl PgBootcampRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BootcampRepository for PgBootcampRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Bootcamp>> {
        let bootcamp = sqlx::query_as::<_, Bootcamp>(
            r#"SELECT id, user_id, name, description, created_at FROM bootcamps WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bootcamp)
    }
}
