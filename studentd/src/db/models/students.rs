//! Persisted student documents and the update document builder.

use crate::api::models::students::{AddressModel, StudentCreate, StudentUpdate};
use crate::db::errors::Result;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Embedded address sub-document. Always complete: partial address updates
/// replace the whole sub-document, never merge into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub city: String,
    pub country: String,
}

/// A student document as stored in the collection.
///
/// Deserializing through this type is what validates stored documents on the
/// read path: a document missing a required field fails to decode instead of
/// being trusted implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Storage-assigned identifier. `None` only before the first insert;
    /// clients never choose it.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i32,
    pub address: AddressRecord,
}

impl From<StudentCreate> for StudentRecord {
    fn from(create: StudentCreate) -> Self {
        Self {
            id: None,
            name: create.name,
            age: create.age,
            address: AddressRecord::from(create.address),
        }
    }
}

impl From<AddressModel> for AddressRecord {
    fn from(address: AddressModel) -> Self {
        Self {
            city: address.city,
            country: address.country,
        }
    }
}

/// Partial update request at the storage layer. Only the supplied top-level
/// fields are written; a supplied address replaces the stored one wholesale.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdateDBRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub address: Option<AddressRecord>,
}

impl StudentUpdateDBRequest {
    /// True when no fields were supplied, i.e. the update would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.address.is_none()
    }

    /// Build the `$set` payload containing exactly the supplied fields.
    pub fn to_set_document(&self) -> Result<Document> {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name);
        }
        if let Some(age) = self.age {
            set.insert("age", age);
        }
        if let Some(address) = &self.address {
            set.insert("address", bson::to_bson(address)?);
        }
        Ok(doc! { "$set": set })
    }

    /// Apply the update to a record in place, returning whether any field
    /// actually changed. Mirrors the server's modified-count semantics for
    /// substitute storage backends.
    pub fn apply_to(&self, record: &mut StudentRecord) -> bool {
        let mut changed = false;
        if let Some(name) = &self.name
            && record.name != *name
        {
            record.name = name.clone();
            changed = true;
        }
        if let Some(age) = self.age
            && record.age != age
        {
            record.age = age;
            changed = true;
        }
        if let Some(address) = &self.address
            && record.address != *address
        {
            record.address = address.clone();
            changed = true;
        }
        changed
    }
}

impl From<StudentUpdate> for StudentUpdateDBRequest {
    fn from(update: StudentUpdate) -> Self {
        Self {
            name: update.name,
            age: update.age,
            address: update.address.map(AddressRecord::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StudentRecord {
        StudentRecord {
            id: Some(ObjectId::new()),
            name: "Alice".into(),
            age: 20,
            address: AddressRecord {
                city: "Paris".into(),
                country: "France".into(),
            },
        }
    }

    #[test]
    fn set_document_contains_only_supplied_fields() {
        let update = StudentUpdateDBRequest {
            age: Some(99),
            ..Default::default()
        };
        let set = update.to_set_document().unwrap();
        let set = set.get_document("$set").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_i32("age").unwrap(), 99);
    }

    #[test]
    fn set_document_replaces_address_wholesale() {
        let update = StudentUpdateDBRequest {
            address: Some(AddressRecord {
                city: "Lyon".into(),
                country: "France".into(),
            }),
            ..Default::default()
        };
        let set = update.to_set_document().unwrap();
        let address = set.get_document("$set").unwrap().get_document("address").unwrap();
        assert_eq!(address.get_str("city").unwrap(), "Lyon");
        assert_eq!(address.get_str("country").unwrap(), "France");
    }

    #[test]
    fn apply_reports_whether_values_changed() {
        let mut rec = record();
        let update = StudentUpdateDBRequest {
            age: Some(20),
            ..Default::default()
        };
        assert!(!update.apply_to(&mut rec), "setting the same value is not a modification");

        let update = StudentUpdateDBRequest {
            age: Some(21),
            ..Default::default()
        };
        assert!(update.apply_to(&mut rec));
        assert_eq!(rec.age, 21);
        assert_eq!(rec.name, "Alice");
    }

    #[test]
    fn record_round_trips_through_bson() {
        let rec = record();
        let doc = mongodb::bson::to_document(&rec).unwrap();
        assert!(doc.get_object_id("_id").is_ok());
        let back: StudentRecord = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn document_missing_required_field_fails_to_decode() {
        let doc = doc! { "_id": ObjectId::new(), "name": "Bob" };
        assert!(mongodb::bson::from_document::<StudentRecord>(doc).is_err());
    }
}
