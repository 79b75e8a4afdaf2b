//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const PUBLISHER: &str = "publisher";
    pub const USER: &str = "user";
}

// =============================================================================
// COURSE SETTINGS
// =============================================================================

/// Minimum skill levels a course can require
pub mod skill_levels {
    pub const BEGINNER: &str = "beginner";
    pub const INTERMEDIATE: &str = "intermediate";
    pub const ADVANCED: &str = "advanced";

    /// All skill levels
    pub const ALL: &[&str] = &[BEGINNER, INTERMEDIATE, ADVANCED];
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default sort applied to course listings
pub const DEFAULT_COURSE_SORT: &str = "-createdAt";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum course title length
pub const MAX_COURSE_TITLE_LENGTH: u64 = 100;

/// Maximum course description length
pub const MAX_COURSE_DESCRIPTION_LENGTH: u64 = 2000;
