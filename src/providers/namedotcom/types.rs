use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::record::Record;
use crate::providers::namedotcom::error::NameComError;

/// Numeric record identifier on the wire.
///
/// name.com omits the field for records that do not exist yet, and the
/// generic model carries ids as strings, so parsing is explicit: an empty
/// string is `Unset`, anything else must be a decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordId {
    #[default]
    Unset,
    Numeric(i32),
}

impl RecordId {
    pub fn parse(id: &str) -> Result<Self, NameComError> {
        if id.is_empty() {
            return Ok(RecordId::Unset);
        }
        id.parse::<i32>()
            .map(RecordId::Numeric)
            .map_err(|_| NameComError::InvalidRecordId(id.to_string()))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, RecordId::Unset)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Unset => Ok(()),
            RecordId::Numeric(id) => write!(f, "{id}"),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordId::Unset => serializer.serialize_i32(0),
            RecordId::Numeric(id) => serializer.serialize_i32(*id),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Zero and absent both mean "no identifier" on this API.
        match i32::deserialize(deserializer)? {
            0 => Ok(RecordId::Unset),
            id => Ok(RecordId::Numeric(id)),
        }
    }
}

/// A DNS resource record in name.com's wire shape.
///
/// Unset fields are omitted when serializing, matching the API's own
/// omitempty behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameComRecord {
    #[serde(default, skip_serializing_if = "RecordId::is_unset")]
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fqdn: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub answer: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl NameComRecord {
    /// Maps a generic record into wire form, relative to `zone`.
    pub fn from_record(record: &Record, zone: &str) -> Result<Self, NameComError> {
        Ok(NameComRecord {
            id: RecordId::parse(&record.id)?,
            host: relative_host(&record.name, zone),
            record_type: record.record_type.clone(),
            answer: record.value.clone(),
            ttl: record.ttl.as_secs() as u32,
            ..NameComRecord::default()
        })
    }

    /// Maps a wire record back into the generic shape. The name comes back
    /// zone-relative; an unset id becomes the empty string.
    pub fn into_record(self) -> Record {
        Record {
            id: self.id.to_string(),
            record_type: self.record_type,
            name: self.host,
            value: self.answer,
            ttl: Duration::from_secs(u64::from(self.ttl)),
        }
    }
}

/// The API expects host names relative to the zone with no trailing dot,
/// e.g. "sub.zone.example.com." against zone "example.com." is "sub.zone".
pub(crate) fn relative_host(name: &str, zone: &str) -> String {
    let zone = zone.trim_end_matches('.');
    name.replace(zone, "").trim_end_matches('.').to_string()
}

/// One page of a record listing. `next_page <= 0` means this is the last
/// page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<NameComRecord>,
    #[serde(default)]
    pub next_page: i32,
    #[serde(default)]
    pub last_page: i32,
}

/// Body returned on any non-200 status.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: String,
}

impl fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_record_and_back() {
        let record = Record {
            id: "12345".into(),
            record_type: "TXT".into(),
            name: "foo.example.com".into(),
            value: "bar".into(),
            ttl: Duration::from_secs(300),
        };
        let wire = NameComRecord::from_record(&record, "example.com.").unwrap();
        assert_eq!(wire.id, RecordId::Numeric(12345));
        assert_eq!(wire.host, "foo");
        assert_eq!(wire.record_type, "TXT");
        assert_eq!(wire.answer, "bar");
        assert_eq!(wire.ttl, 300);

        let back = wire.into_record();
        assert_eq!(back.id, "12345");
        assert_eq!(back.record_type, record.record_type);
        assert_eq!(back.value, record.value);
        assert_eq!(back.ttl, record.ttl);
        // Name is normalized to its zone-relative form.
        assert_eq!(back.name, "foo");
    }

    #[test]
    fn test_relative_host_normalization() {
        assert_eq!(relative_host("foo.example.com", "example.com."), "foo");
        assert_eq!(relative_host("foo.example.com.", "example.com."), "foo");
        assert_eq!(relative_host("foo.example.com", "example.com"), "foo");
        // Already relative names pass through.
        assert_eq!(relative_host("test2", "example.com."), "test2");
        // The zone apex maps to the empty host.
        assert_eq!(relative_host("example.com.", "example.com."), "");
    }

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse("").unwrap(), RecordId::Unset);
        assert_eq!(RecordId::parse("42").unwrap(), RecordId::Numeric(42));
        assert_matches!(
            RecordId::parse("abc"),
            Err(NameComError::InvalidRecordId(id)) if id == "abc"
        );
    }

    #[test]
    fn test_unparseable_id_fails_mapping() {
        let record = Record {
            id: "not-a-number".into(),
            record_type: "A".into(),
            name: "test2".into(),
            value: "10.10.0.2".into(),
            ttl: Duration::from_secs(300),
        };
        assert_matches!(
            NameComRecord::from_record(&record, "example.com."),
            Err(NameComError::InvalidRecordId(_))
        );
    }

    #[test]
    fn test_unset_id_is_omitted_on_the_wire() {
        let record = Record {
            record_type: "A".into(),
            name: "test2.example.com".into(),
            value: "10.10.0.2".into(),
            ttl: Duration::from_secs(300),
            ..Record::default()
        };
        let wire = NameComRecord::from_record(&record, "example.com.").unwrap();
        let value = serde_json::to_value(&wire).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["host"], "test2");
        assert_eq!(value["ttl"], 300);
    }

    #[test]
    fn test_zero_and_absent_wire_ids_map_to_empty_string() {
        let absent: NameComRecord =
            serde_json::from_str(r#"{"host":"foo","type":"A","answer":"1.1.1.1"}"#).unwrap();
        assert!(absent.id.is_unset());
        assert_eq!(absent.into_record().id, "");

        let zero: NameComRecord =
            serde_json::from_str(r#"{"id":0,"host":"foo","type":"A","answer":"1.1.1.1"}"#).unwrap();
        assert!(zero.id.is_unset());
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiErrorResponse {
            message: "Invalid Argument".into(),
            details: "Parameter Value: Duplicate record".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid Argument: Parameter Value: Duplicate record"
        );
    }
}
