//! Course service
//!
//! Each mutating operation follows the same sequence: look up the owning
//! resource, check owner-or-admin, parse and validate the body, then write. The
//! sequence is not transactional; a row removed between the lookup and the
//! write surfaces as NotFound.

use tracing::info;
use uuid::Uuid;

use crate::{
    authorization::ensure_owner_or_admin,
    db::repositories::{BootcampRepository, CourseRepository},
    error::{AppError, AppResult},
    extract::JsonBody,
    handlers::courses::request::{CreateCourseRequest, UpdateCourseRequest},
    models::{Course, CourseWithBootcamp},
    query::CourseQuery,
};

/// Route ids that are not UUIDs cannot match any stored resource
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

fn course_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No course with the id of {}", id))
}

fn bootcamp_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No bootcamp with the id of {}", id))
}

/// Course service for business logic
pub struct CourseService;

impl CourseService {
    /// All courses of a bootcamp; an unknown bootcamp simply has none
    pub async fn list_for_bootcamp(
        courses: &dyn CourseRepository,
        bootcamp_id: &str,
    ) -> AppResult<Vec<Course>> {
        match parse_id(bootcamp_id) {
            Some(id) => courses.find_by_bootcamp(&id).await,
            None => Ok(Vec::new()),
        }
    }

    /// One page of courses with their bootcamps populated
    pub async fn list_courses(
        courses: &dyn CourseRepository,
        query: &CourseQuery,
    ) -> AppResult<(Vec<CourseWithBootcamp>, i64)> {
        courses.list(query).await
    }

    /// Get course by ID with its bootcamp populated
    pub async fn get_course(
        courses: &dyn CourseRepository,
        id: &str,
    ) -> AppResult<CourseWithBootcamp> {
        let course_id = parse_id(id).ok_or_else(|| course_not_found(id))?;

        courses
            .find_with_bootcamp(&course_id)
            .await?
            .ok_or_else(|| course_not_found(id))
    }

    /// Create a course in a bootcamp owned by the requester (or as admin)
    pub async fn create_course(
        courses: &dyn CourseRepository,
        bootcamps: &dyn BootcampRepository,
        requester_id: &Uuid,
        requester_role: &str,
        bootcamp_id: &str,
        body: &JsonBody,
    ) -> AppResult<Course> {
        let id = parse_id(bootcamp_id).ok_or_else(|| bootcamp_not_found(bootcamp_id))?;
        let bootcamp = bootcamps
            .find_by_id(&id)
            .await?
            .ok_or_else(|| bootcamp_not_found(bootcamp_id))?;

        ensure_owner_or_admin(requester_id, &bootcamp.user_id, requester_role, || {
            format!(
                "User {} is not authorized to add a course to bootcamp {}",
                requester_id, bootcamp.id
            )
        })?;

        let new_course = body
            .parse::<CreateCourseRequest>()?
            .into_new_course(bootcamp.id, *requester_id)?;
        let course = courses.create(new_course).await.map_err(|e| match e {
            AppError::NotFound(_) => bootcamp_not_found(bootcamp_id),
            other => other,
        })?;

        info!(course_id = %course.id, bootcamp_id = %bootcamp.id, user_id = %requester_id, "Course created");
        Ok(course)
    }

    /// Update course
    pub async fn update_course(
        courses: &dyn CourseRepository,
        id: &str,
        requester_id: &Uuid,
        requester_role: &str,
        body: &JsonBody,
    ) -> AppResult<Course> {
        let course = Self::find_course(courses, id).await?;

        ensure_owner_or_admin(requester_id, &course.user_id, requester_role, || {
            format!("User {} is not authorized to update course {}", requester_id, course.id)
        })?;

        let changes = body.parse::<UpdateCourseRequest>()?.into_changes()?;
        let updated = courses
            .update(&course.id, changes)
            .await?
            .ok_or_else(|| course_not_found(id))?;

        info!(course_id = %updated.id, user_id = %requester_id, "Course updated");
        Ok(updated)
    }

    /// Delete course, returning its last representation
    pub async fn delete_course(
        courses: &dyn CourseRepository,
        id: &str,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<Course> {
        let course = Self::find_course(courses, id).await?;

        ensure_owner_or_admin(requester_id, &course.user_id, requester_role, || {
            format!("User {} is not authorized to delete course {}", requester_id, course.id)
        })?;

        let deleted = courses
            .delete(&course.id)
            .await?
            .ok_or_else(|| course_not_found(id))?;

        info!(course_id = %deleted.id, user_id = %requester_id, "Course deleted");
        Ok(deleted)
    }

    async fn find_course(courses: &dyn CourseRepository, id: &str) -> AppResult<Course> {
        let course_id = parse_id(id).ok_or_else(|| course_not_found(id))?;

        courses
            .find_by_id(&course_id)
            .await?
            .ok_or_else(|| course_not_found(id))
    }
}
