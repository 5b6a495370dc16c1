//! Student store trait and the MongoDB-backed implementation.

use crate::db::errors::Result;
use crate::db::models::students::{StudentRecord, StudentUpdateDBRequest};
use futures::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::time::Duration;

/// Database and collection names are fixed; there is exactly one collection.
const DATABASE_NAME: &str = "student_management";
const COLLECTION_NAME: &str = "students";

/// Hard cap on list results. Larger result sets are silently truncated;
/// there is no pagination cursor.
pub const MAX_LIST_RESULTS: i64 = 100;

/// Timeout applied to server selection and connection establishment. The
/// driver default (30s) is far too long for a single-round-trip CRUD service.
const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Filter for list operations. Both criteria are optional and AND-combined.
/// An empty country value counts as absent, so `?country=` lists everything
/// rather than exact-matching the empty string.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    /// Exact match on `address.country`
    pub country: Option<String>,
    /// Minimum age: matches `age >= min_age`
    pub min_age: Option<i32>,
}

impl StudentFilter {
    fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|country| !country.is_empty())
    }

    /// Build the query document. An empty filter matches all documents.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(country) = self.country() {
            filter.insert("address.country", country);
        }
        if let Some(min_age) = self.min_age {
            filter.insert("age", doc! { "$gte": min_age });
        }
        filter
    }

    /// Predicate form of the same filter, for substitute storage backends.
    pub fn matches(&self, record: &StudentRecord) -> bool {
        if let Some(country) = self.country()
            && record.address.country != country
        {
            return false;
        }
        if let Some(min_age) = self.min_age
            && record.age < min_age
        {
            return false;
        }
        true
    }
}

/// Data access for the student collection.
///
/// One implementor wraps the real MongoDB collection; tests substitute an
/// in-memory store. Every operation touches exactly one document (or one
/// bounded query), so there are no transactions and no partial-failure
/// states.
#[async_trait::async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a new document; the store assigns a fresh identifier.
    async fn insert(&self, record: &StudentRecord) -> Result<ObjectId>;

    /// Query with the given filter, returning at most [`MAX_LIST_RESULTS`]
    /// documents in storage-default order.
    async fn list(&self, filter: &StudentFilter) -> Result<Vec<StudentRecord>>;

    /// Point lookup by identifier.
    async fn get(&self, id: ObjectId) -> Result<Option<StudentRecord>>;

    /// Apply a partial field replacement, returning the number of documents
    /// actually modified. Zero means either no document matched or the
    /// supplied values equalled the stored ones; the two are not
    /// distinguished here.
    async fn update(&self, id: ObjectId, update: &StudentUpdateDBRequest) -> Result<u64>;

    /// Remove the document with the given identifier, returning whether one
    /// was removed. Deletion is immediate and permanent.
    async fn delete(&self, id: ObjectId) -> Result<bool>;
}

/// MongoDB-backed student store. Cheap to clone; the driver's `Client` pools
/// connections internally and is safe for concurrent use across handlers.
#[derive(Debug, Clone)]
pub struct MongoStudents {
    collection: Collection<StudentRecord>,
}

impl MongoStudents {
    /// Connect to the database identified by `url`, once, at startup.
    ///
    /// A malformed connection string is a fatal error; there is no lazy
    /// connection and no retry policy.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(url).await?;
        options.server_selection_timeout = Some(OPERATION_TIMEOUT);
        options.connect_timeout = Some(OPERATION_TIMEOUT);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let collection = client.database(DATABASE_NAME).collection(COLLECTION_NAME);

        tracing::info!(database = DATABASE_NAME, collection = COLLECTION_NAME, "Connected to document store");

        Ok(Self { collection })
    }
}

#[async_trait::async_trait]
impl StudentStore for MongoStudents {
    async fn insert(&self, record: &StudentRecord) -> Result<ObjectId> {
        let result = self.collection.insert_one(record).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| crate::db::errors::DbError::Malformed {
                reason: format!("inserted id is not an ObjectId: {}", result.inserted_id),
            })
    }

    async fn list(&self, filter: &StudentFilter) -> Result<Vec<StudentRecord>> {
        let cursor = self.collection.find(filter.to_document()).limit(MAX_LIST_RESULTS).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<StudentRecord>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update(&self, id: ObjectId, update: &StudentUpdateDBRequest) -> Result<u64> {
        let result = self.collection.update_one(doc! { "_id": id }, update.to_set_document()?).await?;
        Ok(result.modified_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::students::AddressRecord;

    fn record(name: &str, age: i32, country: &str) -> StudentRecord {
        StudentRecord {
            id: Some(ObjectId::new()),
            name: name.into(),
            age,
            address: AddressRecord {
                city: "X".into(),
                country: country.into(),
            },
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = StudentFilter::default();
        assert!(filter.to_document().is_empty());
        assert!(filter.matches(&record("Alice", 20, "France")));
    }

    #[test]
    fn country_filter_is_exact_match() {
        let filter = StudentFilter {
            country: Some("France".into()),
            min_age: None,
        };
        assert_eq!(filter.to_document(), doc! { "address.country": "France" });
        assert!(filter.matches(&record("Alice", 20, "France")));
        assert!(!filter.matches(&record("Bob", 20, "Germany")));
    }

    #[test]
    fn empty_country_value_counts_as_absent() {
        let filter = StudentFilter {
            country: Some(String::new()),
            min_age: None,
        };
        assert!(filter.to_document().is_empty());
        assert!(filter.matches(&record("Alice", 20, "France")));
    }

    #[test]
    fn age_filter_is_minimum_inclusive() {
        let filter = StudentFilter {
            country: None,
            min_age: Some(18),
        };
        assert_eq!(filter.to_document(), doc! { "age": { "$gte": 18 } });
        assert!(filter.matches(&record("Alice", 18, "France")));
        assert!(!filter.matches(&record("Bob", 17, "France")));
    }

    #[test]
    fn combined_filters_are_and_combined() {
        let filter = StudentFilter {
            country: Some("France".into()),
            min_age: Some(18),
        };
        let doc = filter.to_document();
        assert_eq!(doc.len(), 2);
        assert!(filter.matches(&record("Alice", 20, "France")));
        assert!(!filter.matches(&record("Bob", 20, "Germany")));
        assert!(!filter.matches(&record("Carol", 17, "France")));
    }
}
