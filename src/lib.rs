//! Bootcamp Courses - REST API for bootcamp courses
//!
//! Courses belong to exactly one bootcamp and one user. Anyone may read
//! them; only the owner (or an admin) may add, change or remove them.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and authorization
//! - **Repositories**: Database access behind traits
//! - **Models**: Domain models

pub mod authorization;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod query;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::app;
pub use state::AppState;
