//! OpenAPI documentation configuration.
//!
//! The rendered docs are served at `/docs` via `utoipa-scalar`, with the raw
//! document at `/api-docs/openapi.json`.

use crate::api::handlers::students;
use crate::api::models::students::{AddressModel, DeletedResponse, StudentCreate, StudentCreated, StudentListResponse, StudentResponse, StudentUpdate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        students::create_student,
        students::list_students,
        students::fetch_student,
        students::update_student,
        students::delete_student,
    ),
    components(schemas(
        AddressModel,
        StudentCreate,
        StudentUpdate,
        StudentCreated,
        StudentResponse,
        StudentListResponse,
        DeletedResponse,
    )),
    tags(
        (name = "students", description = "Student record management")
    ),
    info(
        title = "studentd",
        description = "CRUD API for student records"
    )
)]
pub struct ApiDoc;
