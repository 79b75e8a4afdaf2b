//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod bootcamp;
pub mod course;

pub use bootcamp::*;
pub use course::*;
