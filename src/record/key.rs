/// Trait for types that can be used as point-read arguments.
///
/// A bare id supplies no partition key; an `(id, partition_key)` pair
/// addresses a record in a specific partition.
pub trait RecordKey {
    fn id(&self) -> &str;
    fn partition_key(&self) -> Option<&str>;
}

// Single ID (&str)
impl RecordKey for &str {
    fn id(&self) -> &str {
        self
    }

    fn partition_key(&self) -> Option<&str> {
        None
    }
}

// Single ID (String)
impl RecordKey for String {
    fn id(&self) -> &str {
        self.as_str()
    }

    fn partition_key(&self) -> Option<&str> {
        None
    }
}

// Single ID (&String)
impl RecordKey for &String {
    fn id(&self) -> &str {
        self.as_str()
    }

    fn partition_key(&self) -> Option<&str> {
        None
    }
}

// ID plus partition key (&str, &str)
impl RecordKey for (&str, &str) {
    fn id(&self) -> &str {
        self.0
    }

    fn partition_key(&self) -> Option<&str> {
        Some(self.1)
    }
}

// ID plus partition key (String, String)
impl RecordKey for (String, String) {
    fn id(&self) -> &str {
        self.0.as_str()
    }

    fn partition_key(&self) -> Option<&str> {
        Some(self.1.as_str())
    }
}

// ID plus partition key (&String, &String)
impl RecordKey for (&String, &String) {
    fn id(&self) -> &str {
        self.0.as_str()
    }

    fn partition_key(&self) -> Option<&str> {
        Some(self.1.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_str_has_no_partition_key() {
        let key = "record-1";
        assert_eq!(RecordKey::id(&key), "record-1");
        assert_eq!(RecordKey::partition_key(&key), None);
    }

    #[test]
    fn bare_string_has_no_partition_key() {
        let key = String::from("record-1");
        assert_eq!(RecordKey::id(&key), "record-1");
        assert_eq!(RecordKey::partition_key(&key), None);
    }

    #[test]
    fn str_pair_carries_partition_key() {
        let key = ("record-1", "tenant-1");
        assert_eq!(RecordKey::id(&key), "record-1");
        assert_eq!(RecordKey::partition_key(&key), Some("tenant-1"));
    }

    #[test]
    fn string_pair_carries_partition_key() {
        let key = (String::from("record-1"), String::from("tenant-1"));
        assert_eq!(RecordKey::id(&key), "record-1");
        assert_eq!(RecordKey::partition_key(&key), Some("tenant-1"));
    }
}
