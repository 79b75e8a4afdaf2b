//! Database repositories
//!
//! Repositories handle all direct database interactions. Each collection is
//! exposed as a trait so services can run against any backing store.

pub mod bootcamp_repo;
pub mod course_repo;

pub use bootcamp_repo::{BootcampRepository, PgBootcampRepository};
pub use course_repo::{CourseRepository, PgCourseRepository};

#[cfg(test)]
pub use bootcamp_repo::MockBootcampRepository;
#[cfg(test)]
pub use course_repo::MockCourseRepository;
