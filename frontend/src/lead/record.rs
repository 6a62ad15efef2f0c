use crate::lead::schema::LeadField;

/// Values captured from a lead form, keyed by input name.
///
/// Keeps insertion order. Inserting a key that already exists replaces
/// the value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadRecord {
    entries: Vec<(String, String)>,
}

impl LeadRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The field's value, or `None` when it is absent or empty.
    pub fn value(&self, field: LeadField) -> Option<&str> {
        self.get(field.input_name()).filter(|v| !v.is_empty())
    }

    pub fn is_present(&self, field: LeadField) -> bool {
        self.value(field).is_some()
    }
}

impl<K, V> FromIterator<(K, V)> for LeadRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = LeadRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let record: LeadRecord = [("name", "Asha"), ("mobile", "999"), ("budget", "")]
            .into_iter()
            .collect();
        let reordered: LeadRecord = [("mobile", "999"), ("name", "Asha"), ("budget", "")]
            .into_iter()
            .collect();
        assert_eq!(record.get("budget"), Some(""));
        assert_ne!(record, reordered);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record = LeadRecord::new();
        record.insert("name", "Asha");
        record.insert("mobile", "999");
        record.insert("name", "Rahul");
        assert_eq!(record.get("name"), Some("Rahul"));

        let expected: LeadRecord = [("name", "Rahul"), ("mobile", "999")].into_iter().collect();
        assert_eq!(record, expected);
    }

    #[test]
    fn test_empty_value_is_not_present() {
        let record: LeadRecord = [("name", ""), ("email", "r@x.com")].into_iter().collect();
        assert_eq!(record.get("name"), Some(""));
        assert_eq!(record.value(LeadField::Name), None);
        assert!(!record.is_present(LeadField::Name));
        assert!(record.is_present(LeadField::Email));
        assert!(!record.is_present(LeadField::Phone));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let record: LeadRecord = [("name", " ")].into_iter().collect();
        assert!(record.is_present(LeadField::Name));
    }
}
