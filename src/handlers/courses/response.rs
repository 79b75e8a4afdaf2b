//! Course response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{BootcampSummary, Course, CourseWithBootcamp},
    query::Pagination,
};

/// Bootcamp reference: the bare id, or the populated summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BootcampRef {
    Id(Uuid),
    Populated(BootcampSummary),
}

/// Course response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i32,
    pub minimum_skill: String,
    pub scholarship_available: bool,
    pub bootcamp: BootcampRef,
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseResponse {
    fn with_bootcamp(course: Course, bootcamp: BootcampRef) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            weeks: course.weeks,
            tuition: course.tuition,
            minimum_skill: course.minimum_skill,
            scholarship_available: course.scholarship_available,
            bootcamp,
            user: course.user_id,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let bootcamp = BootcampRef::Id(course.bootcamp_id);
        Self::with_bootcamp(course, bootcamp)
    }
}

impl From<CourseWithBootcamp> for CourseResponse {
    fn from(joined: CourseWithBootcamp) -> Self {
        let bootcamp = BootcampRef::Populated(joined.bootcamp());
        Self::with_bootcamp(joined.course, bootcamp)
    }
}

/// Single-resource envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Unpaged list envelope
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Paged list envelope; `count` is the size of this page
#[derive(Debug, Serialize)]
pub struct PagedResponse {
    pub success: bool,
    pub count: usize,
    pub pagination: Pagination,
    pub data: Vec<serde_json::Value>,
}
