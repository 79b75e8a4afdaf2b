//! Course handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Course routes, including those nested under a bootcamp
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(handler::list_courses))
        .route(
            "/courses/{id}",
            get(handler::get_course)
                .put(handler::update_course)
                .delete(handler::delete_course),
        )
        .route(
            "/bootcamps/{bootcamp_id}/courses",
            get(handler::list_bootcamp_courses).post(handler::create_course),
        )
}
