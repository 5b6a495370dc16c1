//! Request and response models for student records.

use crate::db::errors::DbError;
use crate::db::models::students::{AddressRecord, StudentRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Embedded address. Always a complete sub-record: both fields are required
/// on creation, and an update that supplies an address replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressModel {
    #[schema(example = "Paris")]
    pub city: String,
    #[schema(example = "France")]
    pub country: String,
}

/// Request body for creating a student. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentCreate {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = 20)]
    pub age: i32,
    pub address: AddressModel,
}

/// Request body for partially updating a student. All fields are optional;
/// only provided fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StudentUpdate {
    /// New name (null to keep unchanged)
    pub name: Option<String>,
    /// New age (null to keep unchanged)
    pub age: Option<i32>,
    /// New address; replaces the stored address entirely when present
    pub address: Option<AddressModel>,
}

/// Query parameters for listing students
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListStudentsQuery {
    /// Exact-match filter on `address.country`
    pub country: Option<String>,
    /// Minimum-age filter: matches students with `age >=` this value
    pub age: Option<i32>,
}

/// Full student details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    /// Storage-assigned identifier (24 hex characters)
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub name: String,
    pub age: i32,
    pub address: AddressModel,
}

/// Response body for a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentCreated {
    /// Identifier assigned to the new student
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
}

/// Response envelope for list operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentListResponse {
    pub data: Vec<StudentResponse>,
}

/// Response body for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "Student deleted successfully")]
    pub message: String,
}

impl From<AddressRecord> for AddressModel {
    fn from(address: AddressRecord) -> Self {
        Self {
            city: address.city,
            country: address.country,
        }
    }
}

/// Convert a stored record into its wire shape. Fails only when the record
/// has no identifier, which cannot happen for a document read back from the
/// collection; it is surfaced as a storage contract violation rather than a
/// client error.
impl TryFrom<StudentRecord> for StudentResponse {
    type Error = DbError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        let id = record.id.ok_or_else(|| DbError::Malformed {
            reason: "stored student document has no _id".to_string(),
        })?;
        Ok(Self {
            id: id.to_hex(),
            name: record.name,
            age: record.age,
            address: AddressModel::from(record.address),
        })
    }
}

impl StudentListResponse {
    /// Element-wise [`StudentResponse`] conversion, preserving input order.
    pub fn from_records(records: Vec<StudentRecord>) -> Result<Self, DbError> {
        let data = records.into_iter().map(StudentResponse::try_from).collect::<Result<_, _>>()?;
        Ok(Self { data })
    }
}
