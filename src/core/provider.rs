use crate::core::record::Record;
use crate::error::Error;
use async_trait::async_trait;

/// CRUD surface for DNS records in a zone.
///
/// Zones are passed conventionally fully qualified (trailing dot); the
/// provider normalizes as its backend requires. Batch operations process
/// records in input order and stop at the first failure; records handled
/// before the failure are not rolled back.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Returns all records in the zone.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>, Error>;

    /// Creates the given records. Ids on the input records are ignored, so
    /// every record takes the create path. Returns the records as the
    /// provider stored them, ids populated.
    async fn append_records(&self, zone: &str, records: Vec<Record>)
    -> Result<Vec<Record>, Error>;

    /// Creates or updates the given records, keyed on id presence: records
    /// without an id are created, records with one are updated in place.
    async fn set_records(&self, zone: &str, records: Vec<Record>) -> Result<Vec<Record>, Error>;

    /// Deletes the given records by id. Returns the records as the provider
    /// reported them removed.
    async fn delete_records(&self, zone: &str, records: Vec<Record>)
    -> Result<Vec<Record>, Error>;
}
