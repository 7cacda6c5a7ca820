//! name.com provider implementation.
//!
//! <https://www.name.com/api-docs>

pub mod client;
pub mod error;
pub mod types;


pub use client::NameComClient;
pub use error::NameComError;
pub use types::{ApiErrorResponse, ListRecordsResponse, NameComRecord, RecordId};

use async_trait::async_trait;

use crate::core::provider::RecordProvider;
use crate::core::record::Record;
use crate::error::Error;
use error::map_error;

/// Official API endpoint.
pub const DEFAULT_SERVER: &str = "https://api.name.com";

/// name.com DNS provider configuration.
///
/// Holds credentials only; each call builds a [`NameComClient`] from them,
/// so URL validation runs before any request and no state is shared across
/// calls.
#[derive(Clone)]
pub struct NameComProvider {
    /// name.com account username.
    pub user: String,
    /// API token for the account.
    pub token: String,
    /// API server, `https://…` on a `.com` host.
    pub server: String,
}

impl NameComProvider {
    pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            token: token.into(),
            server: DEFAULT_SERVER.to_string(),
        }
    }

    fn client(&self) -> Result<NameComClient, Error> {
        NameComClient::new(&self.user, &self.token, &self.server).map_err(map_error)
    }
}

#[async_trait]
impl RecordProvider for NameComProvider {
    fn name(&self) -> &str {
        "namedotcom"
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>, Error> {
        self.client()?.list_records(zone).await.map_err(map_error)
    }

    async fn append_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> Result<Vec<Record>, Error> {
        let client = self.client()?;
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            // Append is create-only: drop any caller-supplied id so the
            // record takes the create path.
            let candidate = Record {
                id: String::new(),
                ..record
            };
            created.push(
                client
                    .upsert_record(zone, &candidate)
                    .await
                    .map_err(map_error)?,
            );
        }
        Ok(created)
    }

    async fn set_records(&self, zone: &str, records: Vec<Record>) -> Result<Vec<Record>, Error> {
        let client = self.client()?;
        let mut upserted = Vec::with_capacity(records.len());
        for record in &records {
            upserted.push(client.upsert_record(zone, record).await.map_err(map_error)?);
        }
        Ok(upserted)
    }

    async fn delete_records(
        &self,
        zone: &str,
        records: Vec<Record>,
    ) -> Result<Vec<Record>, Error> {
        let client = self.client()?;
        let mut deleted = Vec::with_capacity(records.len());
        for record in &records {
            deleted.push(client.delete_record(zone, record).await.map_err(map_error)?);
        }
        Ok(deleted)
    }
}
