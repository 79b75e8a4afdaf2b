//! Shared fixtures for route tests: an in-memory store standing in for
//! PostgreSQL and helpers to drive the router.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use bootcamp_courses::{
    config::{Config, DatabaseConfig, JwtConfig, ServerConfig},
    db::repositories::{BootcampRepository, CourseRepository},
    error::AppResult,
    models::{Bootcamp, Course, CourseChanges, CourseWithBootcamp, NewCourse},
    query::{CourseField, CourseQuery, FieldFilter, FilterOp, FilterValue},
    services::AuthService,
    AppState,
};

/// Bootcamps and courses kept in memory
#[derive(Default)]
pub struct InMemoryStore {
    bootcamps: Mutex<HashMap<Uuid, Bootcamp>>,
    courses: Mutex<HashMap<Uuid, Course>>,
}

impl InMemoryStore {
    pub fn add_bootcamp(&self, owner: Uuid, name: &str) -> Bootcamp {
        let bootcamp = Bootcamp {
            id: Uuid::new_v4(),
            user_id: owner,
            name: name.to_string(),
            description: format!("{} teaches web development", name),
            created_at: Utc::now(),
        };
        self.bootcamps
            .lock()
            .unwrap()
            .insert(bootcamp.id, bootcamp.clone());
        bootcamp
    }

    pub fn add_course(&self, bootcamp: &Bootcamp, title: &str, tuition: i32) -> Course {
        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("All about {}", title),
            weeks: 8,
            tuition,
            minimum_skill: "beginner".to_string(),
            scholarship_available: false,
            bootcamp_id: bootcamp.id,
            user_id: bootcamp.user_id,
            created_at: now,
            updated_at: now,
        };
        self.courses.lock().unwrap().insert(course.id, course.clone());
        course
    }

    pub fn course(&self, id: &Uuid) -> Option<Course> {
        self.courses.lock().unwrap().get(id).cloned()
    }

    pub fn course_count(&self) -> usize {
        self.courses.lock().unwrap().len()
    }

    fn join(&self, course: Course) -> Option<CourseWithBootcamp> {
        let bootcamps = self.bootcamps.lock().unwrap();
        let bootcamp = bootcamps.get(&course.bootcamp_id)?;
        Some(CourseWithBootcamp {
            bootcamp_name: bootcamp.name.clone(),
            bootcamp_description: bootcamp.description.clone(),
            course,
        })
    }
}

fn int_field(field: CourseField, course: &Course) -> Option<i32> {
    match field {
        CourseField::Weeks => Some(course.weeks),
        CourseField::Tuition => Some(course.tuition),
        _ => None,
    }
}

fn text_field(field: CourseField, course: &Course) -> Option<&str> {
    match field {
        CourseField::Title => Some(&course.title),
        CourseField::MinimumSkill => Some(&course.minimum_skill),
        _ => None,
    }
}

fn op_holds(op: FilterOp, ordering: Ordering) -> bool {
    match op {
        FilterOp::Eq | FilterOp::In => ordering == Ordering::Equal,
        FilterOp::Gt => ordering == Ordering::Greater,
        FilterOp::Gte => ordering != Ordering::Less,
        FilterOp::Lt => ordering == Ordering::Less,
        FilterOp::Lte => ordering != Ordering::Greater,
    }
}

/// Evaluate one filter the way the SQL `WHERE` clause does
fn filter_matches(filter: &FieldFilter, course: &Course) -> bool {
    match &filter.value {
        FilterValue::Int(v) => int_field(filter.field, course)
            .is_some_and(|actual| op_holds(filter.op, actual.cmp(v))),
        FilterValue::IntList(values) => {
            int_field(filter.field, course).is_some_and(|actual| values.contains(&actual))
        }
        FilterValue::Text(v) => text_field(filter.field, course)
            .is_some_and(|actual| op_holds(filter.op, actual.cmp(v.as_str()))),
        FilterValue::TextList(values) => text_field(filter.field, course)
            .is_some_and(|actual| values.iter().any(|v| v == actual)),
        FilterValue::Bool(v) => {
            filter.field == CourseField::ScholarshipAvailable && course.scholarship_available == *v
        }
    }
}

/// Order by the sort keys, ties broken by id, like `ORDER BY ..., c.id`
fn compare_courses(query: &CourseQuery, a: &Course, b: &Course) -> Ordering {
    query
        .sort
        .iter()
        .map(|key| {
            let ordering = match key.field {
                CourseField::Title => a.title.cmp(&b.title),
                CourseField::Weeks => a.weeks.cmp(&b.weeks),
                CourseField::Tuition => a.tuition.cmp(&b.tuition),
                CourseField::MinimumSkill => a.minimum_skill.cmp(&b.minimum_skill),
                CourseField::ScholarshipAvailable => {
                    a.scholarship_available.cmp(&b.scholarship_available)
                }
                CourseField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            if key.descending {
                ordering.reverse()
            } else {
                ordering
            }
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or_else(|| a.id.cmp(&b.id))
}

/// Mirror of the `COALESCE` update
fn apply_changes(changes: &CourseChanges, course: &mut Course) {
    if let Some(title) = &changes.title {
        course.title = title.clone();
    }
    if let Some(description) = &changes.description {
        course.description = description.clone();
    }
    if let Some(weeks) = changes.weeks {
        course.weeks = weeks;
    }
    if let Some(tuition) = changes.tuition {
        course.tuition = tuition;
    }
    if let Some(skill) = &changes.minimum_skill {
        course.minimum_skill = skill.clone();
    }
    if let Some(available) = changes.scholarship_available {
        course.scholarship_available = available;
    }
    course.updated_at = Utc::now();
}

#[async_trait]
impl BootcampRepository for InMemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Bootcamp>> {
        Ok(self.bootcamps.lock().unwrap().get(id).cloned())
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Course>> {
        Ok(self.course(id))
    }

    async fn find_with_bootcamp(&self, id: &Uuid) -> AppResult<Option<CourseWithBootcamp>> {
        Ok(self.course(id).and_then(|c| self.join(c)))
    }

    async fn find_by_bootcamp(&self, bootcamp_id: &Uuid) -> AppResult<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.bootcamp_id == *bootcamp_id)
            .cloned()
            .collect();
        courses.sort_by_key(|c| c.created_at);
        Ok(courses)
    }

    async fn list(&self, query: &CourseQuery) -> AppResult<(Vec<CourseWithBootcamp>, i64)> {
        let mut matching: Vec<Course> = self
            .courses
            .lock()
            .unwrap()
            .values()
            .filter(|c| query.filters.iter().all(|f| filter_matches(f, c)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| compare_courses(query, a, b));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .filter_map(|c| self.join(c))
            .collect();

        Ok((page, total))
    }

    async fn create(&self, new: NewCourse) -> AppResult<Course> {
        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            weeks: new.weeks,
            tuition: new.tuition,
            minimum_skill: new.minimum_skill,
            scholarship_available: new.scholarship_available,
            bootcamp_id: new.bootcamp_id,
            user_id: new.user_id,
            created_at: now,
            updated_at: now,
        };
        self.courses.lock().unwrap().insert(course.id, course.clone());
        Ok(course)
    }

    async fn update(&self, id: &Uuid, changes: CourseChanges) -> AppResult<Option<Course>> {
        let mut courses = self.courses.lock().unwrap();
        Ok(courses.get_mut(id).map(|course| {
            apply_changes(&changes, course);
            course.clone()
        }))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<Option<Course>> {
        Ok(self.courses.lock().unwrap().remove(id))
    }
}

/// Router wired to an in-memory store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub config: Config,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: "test_secret_key_for_testing_only".to_string(),
                expiry_hours: 1,
            },
        };

        let state = AppState::new(store.clone(), store.clone(), config.clone());
        let router = bootcamp_courses::app(state);

        Self {
            router,
            store,
            config,
        }
    }

    pub fn token(&self, user_id: &Uuid, role: &str) -> String {
        AuthService::generate_access_token(user_id, role, &self.config.jwt)
            .unwrap()
            .0
    }

    /// Send a request and decode the JSON response body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        self.send_request(builder.body(body).unwrap()).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
