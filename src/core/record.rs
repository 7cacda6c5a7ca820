use std::time::Duration;

/// A provider-agnostic DNS resource record.
///
/// Record types pass through to the provider untouched, so `record_type`
/// stays a plain string rather than an enum of supported types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Record {
    /// Provider-assigned identifier. Empty means the record has not been
    /// created yet.
    pub id: String,
    /// Record type, e.g. "A" or "TXT".
    pub record_type: String,
    /// Hostname, either zone-relative or fully qualified.
    pub name: String,
    /// Record payload.
    pub value: String,
    /// Time to live; whole seconds at the wire boundary.
    pub ttl: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_has_no_id() {
        let record = Record::default();
        assert!(record.id.is_empty());
        assert_eq!(record.ttl, Duration::ZERO);
    }

    #[test]
    fn test_records_hash_by_value() {
        use std::collections::HashSet;

        let a = Record {
            record_type: "A".into(),
            name: "a.example.com".into(),
            value: "1.1.1.1".into(),
            ttl: Duration::from_secs(300),
            ..Record::default()
        };
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(Record {
            value: "2.2.2.2".into(),
            ..a
        });
        assert_eq!(set.len(), 2);
    }
}
