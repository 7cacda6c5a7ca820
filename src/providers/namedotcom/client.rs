use std::time::Duration;

use log::debug;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::record::Record;
use crate::providers::namedotcom::error::NameComError;
use crate::providers::namedotcom::types::{ApiErrorResponse, ListRecordsResponse, NameComRecord};

/// Per-request timeout, seconds.
const HTTP_TIMEOUT: u64 = 30;

/// Upper bound on the pagination loop. Paging is driven by the server's
/// `nextPage` value, so a misbehaving response could otherwise never
/// terminate.
const MAX_PAGES: u32 = 1000;

/// Authenticated access to the name.com v4 API for one set of credentials.
///
/// The client is immutable; the wrapped `reqwest::Client` pools connections
/// internally, so one value can serve any number of concurrent calls.
#[derive(Debug)]
pub struct NameComClient {
    server: String,
    user: String,
    token: String,
    http: Client,
}

impl NameComClient {
    /// Validates the server URL and builds the client. Fails before any
    /// network activity when `server` is not an `https://` URL on a `.com`
    /// host.
    pub fn new(user: &str, token: &str, server: &str) -> Result<Self, NameComError> {
        if !valid_server_url(server) {
            return Err(NameComError::InvalidServerUrl(server.to_string()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT))
            .build()?;

        Ok(Self {
            server: server.to_string(),
            user: user.to_string(),
            token: token.to_string(),
            http,
        })
    }

    /// Test seam: points the client at an arbitrary (plain-HTTP) server.
    #[cfg(test)]
    pub(crate) fn for_server(user: &str, token: &str, server: &str) -> Self {
        Self {
            server: server.to_string(),
            user: user.to_string(),
            token: token.to_string(),
            http: Client::builder()
                .timeout(Duration::from_secs(HTTP_TIMEOUT))
                .build()
                .unwrap(),
        }
    }

    /// Fetches every record in the zone, following the server's pagination
    /// until it reports no next page. A failed page discards the whole
    /// listing.
    pub async fn list_records(&self, zone: &str) -> Result<Vec<Record>, NameComError> {
        let domain = unfqdn(zone);
        let mut records = Vec::new();
        let mut page: i32 = 1;
        let mut pages_seen: u32 = 0;

        while page > 0 {
            pages_seen += 1;
            if pages_seen > MAX_PAGES {
                return Err(NameComError::PaginationOverflow(MAX_PAGES));
            }

            let path = format!("/v4/domains/{domain}/records?page={page}");
            let resp: ListRecordsResponse = self.request(Method::GET, &path, None::<&()>).await?;

            records.extend(resp.records.into_iter().map(NameComRecord::into_record));
            page = resp.next_page;
        }

        Ok(records)
    }

    /// Deletes a record by id, sending the wire record as the request body.
    /// The registrar echoes the removed record; that echo, not the input,
    /// is what the caller gets back.
    pub async fn delete_record(&self, zone: &str, record: &Record) -> Result<Record, NameComError> {
        let domain = unfqdn(zone);
        let wire = NameComRecord::from_record(record, zone)?;
        if wire.id.is_unset() {
            return Err(NameComError::MissingRecordId);
        }

        let path = format!("/v4/domains/{domain}/records/{}", wire.id);
        let deleted: NameComRecord = self.request(Method::DELETE, &path, Some(&wire)).await?;
        Ok(deleted.into_record())
    }

    /// Creates the record when it carries no id, updates it in place
    /// otherwise. The registrar's response is authoritative for the result.
    pub async fn upsert_record(&self, zone: &str, record: &Record) -> Result<Record, NameComError> {
        let domain = unfqdn(zone);
        let wire = NameComRecord::from_record(record, zone)?;

        let (method, path) = if record.id.is_empty() {
            (Method::POST, format!("/v4/domains/{domain}/records"))
        } else {
            (Method::PUT, format!("/v4/domains/{domain}/records/{}", wire.id))
        };
        let updating = method == Method::PUT;

        match self.request::<NameComRecord, _>(method, &path, Some(&wire)).await {
            Ok(upserted) => Ok(upserted.into_record()),
            // The registrar rejects an update whose value matches an
            // existing record; the raw message is cryptic, so reword it.
            Err(NameComError::Api(resp)) if updating && is_duplicate(&resp) => {
                Err(NameComError::DuplicateRecord {
                    host: wire.host,
                    message: resp.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Single-attempt request handler: basic auth on every call, structured
    /// error bodies decoded on non-200 statuses.
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, NameComError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.server, path);
        debug!("{method} {url}");

        let mut req = self
            .http
            .request(method, &url)
            .basic_auth(&self.user, Some(&self.token));
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("response status {status}");

        if status != StatusCode::OK {
            let err: ApiErrorResponse =
                serde_json::from_str(&text).map_err(NameComError::UnexpectedResponse)?;
            return Err(NameComError::Api(err));
        }

        serde_json::from_str(&text).map_err(NameComError::Decode)
    }
}

fn is_duplicate(resp: &ApiErrorResponse) -> bool {
    resp.message.to_ascii_lowercase().contains("duplicate")
        || resp.details.to_ascii_lowercase().contains("duplicate")
}

/// name.com endpoints reject the trailing-dot FQDN convention on domains.
pub(crate) fn unfqdn(zone: &str) -> &str {
    zone.trim_end_matches('.')
}

/// The API server must be reachable over TLS at a `.com` address, e.g.
/// "https://api.name.com" or "https://api.dev.name.com".
fn valid_server_url(server: &str) -> bool {
    server
        .strip_prefix("https://")
        .is_some_and(|host| host.len() > ".com".len() && host.ends_with(".com"))
}
