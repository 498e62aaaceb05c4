//! The launch record returned by the upstream API.
//!
//! Records are transported and sliced, never interpreted: the upstream
//! payload is kept as-is and the accessors below exist only so the CLI can
//! print something readable. Missing fields are normal, not errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One upstream launch entry, kept as the raw JSON object it arrived as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Launch(Value);

impl Launch {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw access to any field of the underlying object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("id")?.as_str()
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name")?.as_str()
    }

    /// Launch timestamp as the upstream ISO 8601 string.
    pub fn date_utc(&self) -> Option<&str> {
        self.field("date_utc")?.as_str()
    }

    /// Mission outcome; `None` for upcoming launches.
    pub fn success(&self) -> Option<bool> {
        self.field("success")?.as_bool()
    }
}

impl From<Value> for Launch {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_on_typical_record() {
        let launch = Launch::new(json!({
            "id": "5eb87cd9ffd86e000604b32a",
            "name": "FalconSat",
            "date_utc": "2006-03-24T22:30:00.000Z",
            "success": false,
            "flight_number": 1
        }));

        assert_eq!(launch.id(), Some("5eb87cd9ffd86e000604b32a"));
        assert_eq!(launch.name(), Some("FalconSat"));
        assert_eq!(launch.date_utc(), Some("2006-03-24T22:30:00.000Z"));
        assert_eq!(launch.success(), Some(false));
        assert_eq!(launch.field("flight_number"), Some(&json!(1)));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let launch = Launch::new(json!({"name": "Starlink"}));
        assert_eq!(launch.id(), None);
        assert_eq!(launch.date_utc(), None);
        assert_eq!(launch.success(), None);
    }

    #[test]
    fn test_transparent_serialization() {
        let value = json!({"id": "1", "name": "CRS-1"});
        let launch: Launch = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&launch).unwrap(), value);
    }
}
