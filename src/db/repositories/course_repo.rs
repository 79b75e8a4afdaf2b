//! Course repository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Course, CourseChanges, CourseWithBootcamp, NewCourse},
    query::{CourseQuery, FieldFilter, FilterOp, FilterValue},
};

const COURSE_COLUMNS: &str = "c.id, c.title, c.description, c.weeks, c.tuition, c.minimum_skill, \
     c.scholarship_available, c.bootcamp_id, c.user_id, c.created_at, c.updated_at";

/// Storage operations for courses
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find course by ID
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Course>>;

    /// Find course by ID with its bootcamp name and description
    async fn find_with_bootcamp(&self, id: &Uuid) -> AppResult<Option<CourseWithBootcamp>>;

    /// All courses of a bootcamp
    async fn find_by_bootcamp(&self, bootcamp_id: &Uuid) -> AppResult<Vec<Course>>;

    /// One page of courses matching the query, plus the total number of matches
    async fn list(&self, query: &CourseQuery) -> AppResult<(Vec<CourseWithBootcamp>, i64)>;

    /// Insert a new course
    async fn create(&self, course: NewCourse) -> AppResult<Course>;

    /// Apply changes; `None` when the course no longer exists
    async fn update(&self, id: &Uuid, changes: CourseChanges) -> AppResult<Option<Course>>;

    /// Remove a course, returning the removed row
    async fn delete(&self, id: &Uuid) -> AppResult<Option<Course>>;
}

/// PostgreSQL implementation of [`CourseRepository`]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append `AND <condition>` for every filter
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &[FieldFilter]) {
    for filter in filters {
        builder
            .push(" AND ")
            .push(filter.field.column())
            .push(filter.op.sql());

        match (&filter.value, filter.op) {
            (FilterValue::IntList(values), _) => {
                builder.push("ANY(").push_bind(values.clone()).push(")");
            }
            (FilterValue::TextList(values), _) => {
                builder.push("ANY(").push_bind(values.clone()).push(")");
            }
            (FilterValue::Int(value), _) => {
                builder.push_bind(*value);
            }
            (FilterValue::Bool(value), _) => {
                builder.push_bind(*value);
            }
            (FilterValue::Text(value), FilterOp::In) => {
                builder.push("ANY(").push_bind(vec![value.clone()]).push(")");
            }
            (FilterValue::Text(value), _) => {
                builder.push_bind(value.clone());
            }
        }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses c WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn find_with_bootcamp(&self, id: &Uuid) -> AppResult<Option<CourseWithBootcamp>> {
        let course = sqlx::query_as::<_, CourseWithBootcamp>(&format!(
            r#"
            SELECT {COURSE_COLUMNS},
                   b.name AS bootcamp_name,
                   b.description AS bootcamp_description
            FROM courses c
            JOIN bootcamps b ON b.id = c.bootcamp_id
            WHERE c.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn find_by_bootcamp(&self, bootcamp_id: &Uuid) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses c WHERE c.bootcamp_id = $1 ORDER BY c.created_at"
        ))
        .bind(bootcamp_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn list(&self, query: &CourseQuery) -> AppResult<(Vec<CourseWithBootcamp>, i64)> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM courses c WHERE TRUE");
        push_filters(&mut count, &query.filters);
        let total = count.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(format!(
            r#"
            SELECT {COURSE_COLUMNS},
                   b.name AS bootcamp_name,
                   b.description AS bootcamp_description
            FROM courses c
            JOIN bootcamps b ON b.id = c.bootcamp_id
            WHERE TRUE"#
        ));
        push_filters(&mut select, &query.filters);

        select.push(" ORDER BY ");
        for key in &query.sort {
            select
                .push(key.field.column())
                .push(if key.descending { " DESC, " } else { " ASC, " });
        }
        select
            .push("c.id ASC LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(query.offset());

        let courses = select
            .build_query_as::<CourseWithBootcamp>()
            .fetch_all(&self.pool)
            .await?;

        Ok((courses, total))
    }

    async fn create(&self, course: NewCourse) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (
                title, description, weeks, tuition, minimum_skill,
                scholarship_available, bootcamp_id, user_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(course.weeks)
        .bind(course.tuition)
        .bind(&course.minimum_skill)
        .bind(course.scholarship_available)
        .bind(course.bootcamp_id)
        .bind(course.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    async fn update(&self, id: &Uuid, changes: CourseChanges) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                weeks = COALESCE($4, weeks),
                tuition = COALESCE($5, tuition),
                minimum_skill = COALESCE($6, minimum_skill),
                scholarship_available = COALESCE($7, scholarship_available),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.weeks)
        .bind(changes.tuition)
        .bind(changes.minimum_skill)
        .bind(changes.scholarship_available)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(r#"DELETE FROM courses WHERE id = $1 RETURNING *"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(course)
    }
}
