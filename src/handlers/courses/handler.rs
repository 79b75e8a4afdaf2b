//! Course handler implementations

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    extract::JsonBody,
    middleware::AuthenticatedUser,
    query::CourseQuery,
    services::CourseService,
    state::AppState,
};

use super::response::{CourseResponse, DataResponse, ListResponse, PagedResponse};

/// List courses across all bootcamps (filtered, sorted, paginated)
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<PagedResponse>> {
    let query = CourseQuery::from_params(&params)?;
    let (courses, total) = CourseService::list_courses(state.courses(), &query).await?;

    let data = courses
        .into_iter()
        .map(|course| serde_json::to_value(CourseResponse::from(course)).map(|v| query.project(v)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(anyhow::Error::from)?;

    Ok(Json(PagedResponse {
        success: true,
        count: data.len(),
        pagination: query.pagination(total),
        data,
    }))
}

/// List every course of one bootcamp
pub async fn list_bootcamp_courses(
    State(state): State<AppState>,
    Path(bootcamp_id): Path<String>,
) -> AppResult<Json<ListResponse<CourseResponse>>> {
    let courses = CourseService::list_for_bootcamp(state.courses(), &bootcamp_id).await?;

    Ok(Json(ListResponse::new(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}

/// Get a specific course
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<CourseResponse>>> {
    let course = CourseService::get_course(state.courses(), &id).await?;
    Ok(Json(DataResponse::new(course.into())))
}

/// Add a course to a bootcamp
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(bootcamp_id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<DataResponse<CourseResponse>>> {
    let course = CourseService::create_course(
        state.courses(),
        state.bootcamps(),
        &auth_user.id,
        &auth_user.role,
        &bootcamp_id,
        &body,
    )
    .await?;

    Ok(Json(DataResponse::new(course.into())))
}

/// Update a course
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<DataResponse<CourseResponse>>> {
    let course = CourseService::update_course(
        state.courses(),
        &id,
        &auth_user.id,
        &auth_user.role,
        &body,
    )
    .await?;

    Ok(Json(DataResponse::new(course.into())))
}

/// Delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<CourseResponse>>> {
    let course =
        CourseService::delete_course(state.courses(), &id, &auth_user.id, &auth_user.role).await?;

    Ok(Json(DataResponse::new(course.into())))
}
