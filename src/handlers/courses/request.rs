//! Course request DTOs
//!
//! Bodies may carry `bootcamp` and `user` keys; they are not part of these
//! types and are dropped during deserialization. Ownership always comes from
//! the route and the authenticated caller.

use std::borrow::Cow;

use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    constants::{skill_levels, MAX_COURSE_DESCRIPTION_LENGTH, MAX_COURSE_TITLE_LENGTH},
    error::{AppError, AppResult},
    models::{CourseChanges, NewCourse},
};

/// Create course request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(
        required(message = "Please add a course title"),
        length(min = 1, max = MAX_COURSE_TITLE_LENGTH, message = "Course title must be 1-100 characters")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Please add a description"),
        length(min = 1, max = MAX_COURSE_DESCRIPTION_LENGTH, message = "Description must be 1-2000 characters")
    )]
    pub description: Option<String>,

    /// Duration in weeks
    #[validate(
        required(message = "Please add number of weeks"),
        range(min = 1, message = "Weeks must be at least 1")
    )]
    pub weeks: Option<i32>,

    #[validate(
        required(message = "Please add a tuition cost"),
        range(min = 0, message = "Tuition cannot be negative")
    )]
    pub tuition: Option<i32>,

    #[validate(required(message = "Please add a minimum skill"))]
    pub minimum_skill: Option<String>,

    pub scholarship_available: Option<bool>,
}

impl CreateCourseRequest {
    /// Validate the body and bind it to its bootcamp and owner
    pub fn into_new_course(mut self, bootcamp_id: Uuid, user_id: Uuid) -> AppResult<NewCourse> {
        self.title = self.title.map(|t| t.trim().to_string());
        self.description = self.description.map(|d| d.trim().to_string());
        check(&self, self.minimum_skill.as_deref())?;

        let missing = |field: &str| AppError::Validation(format!("Please add a {}", field));
        Ok(NewCourse {
            title: self.title.ok_or_else(|| missing("course title"))?,
            description: self.description.ok_or_else(|| missing("description"))?,
            weeks: self.weeks.ok_or_else(|| missing("number of weeks"))?,
            tuition: self.tuition.ok_or_else(|| missing("tuition cost"))?,
            minimum_skill: self.minimum_skill.ok_or_else(|| missing("minimum skill"))?,
            scholarship_available: self.scholarship_available.unwrap_or(false),
            bootcamp_id,
            user_id,
        })
    }
}

/// Update course request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = MAX_COURSE_TITLE_LENGTH, message = "Course title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_COURSE_DESCRIPTION_LENGTH, message = "Description must be 1-2000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Weeks must be at least 1"))]
    pub weeks: Option<i32>,

    #[validate(range(min = 0, message = "Tuition cannot be negative"))]
    pub tuition: Option<i32>,

    pub minimum_skill: Option<String>,

    pub scholarship_available: Option<bool>,
}

impl UpdateCourseRequest {
    /// Validate the provided fields and turn them into column changes
    pub fn into_changes(mut self) -> AppResult<CourseChanges> {
        self.title = self.title.map(|t| t.trim().to_string());
        self.description = self.description.map(|d| d.trim().to_string());
        check(&self, self.minimum_skill.as_deref())?;

        Ok(CourseChanges {
            title: self.title,
            description: self.description,
            weeks: self.weeks,
            tuition: self.tuition,
            minimum_skill: self.minimum_skill,
            scholarship_available: self.scholarship_available,
        })
    }
}

/// Run derived validation plus the skill level check, reporting all failures together
fn check(payload: &impl Validate, minimum_skill: Option<&str>) -> AppResult<()> {
    let mut errors = match payload.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    if let Some(skill) = minimum_skill {
        if !skill_levels::ALL.contains(&skill) {
            let mut error = ValidationError::new("minimum_skill");
            error.message = Some(Cow::from(
                "Minimum skill must be one of beginner, intermediate, advanced",
            ));
            errors.add("minimumSkill", error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateCourseRequest {
        CreateCourseRequest {
            title: Some("  Front End Web Development ".to_string()),
            description: Some("HTML, CSS and JavaScript".to_string()),
            weeks: Some(8),
            tuition: Some(8000),
            minimum_skill: Some("beginner".to_string()),
            scholarship_available: None,
        }
    }

    #[test]
    fn create_binds_owner_and_trims_title() {
        let bootcamp_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let course = valid_create().into_new_course(bootcamp_id, user_id).unwrap();

        assert_eq!(course.title, "Front End Web Development");
        assert_eq!(course.bootcamp_id, bootcamp_id);
        assert_eq!(course.user_id, user_id);
        assert!(!course.scholarship_available);
    }

    #[test]
    fn body_ownership_keys_are_ignored() {
        let body = serde_json::json!({
            "title": "Intro",
            "bootcamp": "X",
            "user": "Y"
        });
        let request: CreateCourseRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.title.as_deref(), Some("Intro"));
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let err = CreateCourseRequest::default()
            .into_new_course(Uuid::new_v4(), Uuid::new_v4())
            .unwrap_err();

        let message = match err {
            AppError::Validation(message) => message,
            other => panic!("expected validation error, got {other:?}"),
        };
        for expected in [
            "Please add a course title",
            "Please add a description",
            "Please add number of weeks",
            "Please add a tuition cost",
            "Please add a minimum skill",
        ] {
            assert!(message.contains(expected), "{message} lacks {expected}");
        }
    }

    #[test]
    fn unknown_skill_level_is_rejected() {
        let request = CreateCourseRequest {
            minimum_skill: Some("expert".to_string()),
            ..valid_create()
        };
        let err = request
            .into_new_course(Uuid::new_v4(), Uuid::new_v4())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("Minimum skill")));
    }

    #[test]
    fn blank_title_fails_update() {
        let request = UpdateCourseRequest {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(request.into_changes(), Err(AppError::Validation(_))));
    }

    #[test]
    fn blank_description_fails_create_and_update() {
        let create = CreateCourseRequest {
            description: Some(" \t ".to_string()),
            ..valid_create()
        };
        assert!(matches!(
            create.into_new_course(Uuid::new_v4(), Uuid::new_v4()),
            Err(AppError::Validation(ref m)) if m == "Description must be 1-2000 characters"
        ));

        let update = UpdateCourseRequest {
            description: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(request_error(update), Some(ref m) if m.contains("Description")));
    }

    fn request_error(request: UpdateCourseRequest) -> Option<String> {
        match request.into_changes() {
            Err(AppError::Validation(message)) => Some(message),
            _ => None,
        }
    }

    #[test]
    fn empty_update_is_allowed() {
        let changes = UpdateCourseRequest::default().into_changes().unwrap();
        assert_eq!(changes, CourseChanges::default());
    }
}
