//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::BootcampSummary;

/// Course database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i32,
    pub minimum_skill: String,
    pub scholarship_available: bool,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course joined with the name and description of its bootcamp
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CourseWithBootcamp {
    #[sqlx(flatten)]
    pub course: Course,
    pub bootcamp_name: String,
    pub bootcamp_description: String,
}

impl CourseWithBootcamp {
    /// The populated bootcamp reference
    pub fn bootcamp(&self) -> BootcampSummary {
        BootcampSummary {
            id: self.course.bootcamp_id,
            name: self.bootcamp_name.clone(),
            description: self.bootcamp_description.clone(),
        }
    }
}

/// A validated course ready to be inserted.
///
/// `bootcamp_id` and `user_id` always come from the route and the caller,
/// never from the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i32,
    pub minimum_skill: String,
    pub scholarship_available: bool,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
}

/// Partial update of a course; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<String>,
    pub scholarship_available: Option<bool>,
}
