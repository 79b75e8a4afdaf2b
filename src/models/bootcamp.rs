//! Bootcamp model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Bootcamp database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Bootcamp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// The bootcamp fields embedded in a populated course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootcampSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}
