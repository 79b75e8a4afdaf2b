//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    db::repositories::{
        BootcampRepository, CourseRepository, PgBootcampRepository, PgCourseRepository,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    courses: Arc<dyn CourseRepository>,
    bootcamps: Arc<dyn BootcampRepository>,
    config: Config,
}

impl AppState {
    /// Create a new application state from repository implementations
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        bootcamps: Arc<dyn BootcampRepository>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                courses,
                bootcamps,
                config,
            }),
        }
    }

    /// Create application state backed by PostgreSQL
    pub fn with_pool(pool: PgPool, config: Config) -> Self {
        Self::new(
            Arc::new(PgCourseRepository::new(pool.clone())),
            Arc::new(PgBootcampRepository::new(pool)),
            config,
        )
    }

    /// Course storage
    pub fn courses(&self) -> &dyn CourseRepository {
        self.inner.courses.as_ref()
    }

    /// Bootcamp storage
    pub fn bootcamps(&self) -> &dyn BootcampRepository {
        self.inner.bootcamps.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
