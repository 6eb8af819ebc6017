use serde::{Deserialize, Serialize};

/// Fields extracted from one identity card.
///
/// Every field is optional; an all-empty record means nothing was found,
/// not that the record is malformed. Absent fields are left out when
/// serialized so the output stays a flat name -> string map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name_translated_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name_translated_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}

impl DocumentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    fn fields(&self) -> [&Option<String>; 11] {
        [
            &self.first_name,
            &self.last_name,
            &self.first_name_ar,
            &self.last_name_ar,
            &self.first_name_translated_ar,
            &self.last_name_translated_ar,
            &self.date_of_birth,
            &self.place_of_birth,
            &self.id_code,
            &self.expiration_date,
            &self.director,
        ]
    }

    /// Number of fields that were found.
    pub fn populated_fields(&self) -> usize {
        self.fields().iter().filter(|field| field.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_fields() == 0
    }
}

/// Writes `value` into `slot` unless the slot already holds something.
/// Returns true when the write happened.
pub fn set_once(slot: &mut Option<String>, value: impl Into<String>) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value.into());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_valid() {
        let record = DocumentRecord::new();
        assert!(record.is_empty());
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let record = DocumentRecord {
            last_name: Some("BENALI".to_string()),
            id_code: Some("AB123456".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["last_name"], "BENALI");
        assert_eq!(map["id_code"], "AB123456");
        assert_eq!(record.populated_fields(), 2);
    }

    #[test]
    fn test_set_once_keeps_first_value() {
        let mut slot = None;
        assert!(set_once(&mut slot, "BENALI"));
        assert!(!set_once(&mut slot, "YOUSSEF"));
        assert_eq!(slot.as_deref(), Some("BENALI"));
    }
}
