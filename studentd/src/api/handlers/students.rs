//! Route handlers for the five student CRUD endpoints.

use crate::AppState;
use crate::api::extract::{Json, Query};
use crate::api::models::students::{
    DeletedResponse, ListStudentsQuery, StudentCreate, StudentCreated, StudentListResponse, StudentResponse, StudentUpdate,
};
use crate::db::handlers::StudentFilter;
use crate::db::models::students::{StudentRecord, StudentUpdateDBRequest};
use crate::errors::{Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use mongodb::bson::oid::ObjectId;

/// Parse a path parameter into an `ObjectId`, rejecting anything that is not
/// a well-formed 24-hex identifier before the database is touched.
fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| Error::InvalidId { id: id.to_string() })
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    summary = "Create student",
    request_body = StudentCreate,
    responses(
        (status = 201, description = "Student created successfully", body = StudentCreated),
        (status = 422, description = "Request body failed validation"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_student(State(state): State<AppState>, Json(student): Json<StudentCreate>) -> Result<(StatusCode, axum::Json<StudentCreated>)> {
    // Unconditional insert: duplicates across name/age/address are permitted.
    let record = StudentRecord::from(student);
    let id = state.store.insert(&record).await?;
    Ok((StatusCode::CREATED, axum::Json(StudentCreated { id: id.to_hex() })))
}

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    summary = "List students",
    params(ListStudentsQuery),
    responses(
        (status = 200, description = "Matching students, at most 100", body = StudentListResponse),
        (status = 422, description = "Query parameter failed validation"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_students(State(state): State<AppState>, Query(query): Query<ListStudentsQuery>) -> Result<axum::Json<StudentListResponse>> {
    let filter = StudentFilter {
        country: query.country,
        min_age: query.age,
    };
    let records = state.store.list(&filter).await?;
    Ok(axum::Json(StudentListResponse::from_records(records)?))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    summary = "Fetch student by ID",
    params(("id" = String, Path, description = "Student ID (24 hex characters)")),
    responses(
        (status = 200, description = "Student details", body = StudentResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn fetch_student(State(state): State<AppState>, Path(id): Path<String>) -> Result<axum::Json<StudentResponse>> {
    let object_id = parse_id(&id)?;

    match state.store.get(object_id).await? {
        Some(record) => Ok(axum::Json(StudentResponse::try_from(record)?)),
        None => Err(Error::NotFound { resource: "Student", id }),
    }
}

#[utoipa::path(
    patch,
    path = "/students/{id}",
    tag = "students",
    summary = "Update student",
    request_body = StudentUpdate,
    params(("id" = String, Path, description = "Student ID (24 hex characters)")),
    responses(
        (status = 204, description = "Student updated successfully"),
        (status = 400, description = "Malformed ID or no fields to update"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_student(State(state): State<AppState>, Path(id): Path<String>, Json(update): Json<StudentUpdate>) -> Result<StatusCode> {
    let object_id = parse_id(&id)?;

    let request = StudentUpdateDBRequest::from(update);
    if request.is_empty() {
        return Err(Error::NoUpdateData);
    }

    // A modified count of zero is reported as not-found. This conflates "no
    // such id" with "id exists but the new values equal the old ones"; the
    // latter also yields a 404.
    if state.store.update(object_id, &request).await? == 0 {
        return Err(Error::NotFound { resource: "Student", id });
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    summary = "Delete student",
    params(("id" = String, Path, description = "Student ID (24 hex characters)")),
    responses(
        (status = 200, description = "Student deleted successfully", body = DeletedResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_student(State(state): State<AppState>, Path(id): Path<String>) -> Result<axum::Json<DeletedResponse>> {
    let object_id = parse_id(&id)?;

    if state.store.delete(object_id).await? {
        Ok(axum::Json(DeletedResponse {
            message: "Student deleted successfully".to_string(),
        }))
    } else {
        Err(Error::NotFound { resource: "Student", id })
    }
}
