//! Business logic services

pub mod auth_service;
pub mod course_service;

pub use auth_service::AuthService;
pub use course_service::CourseService;
