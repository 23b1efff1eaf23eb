//! University records as exchanged with the external REST API.
//!
//! The service owns these records. [`University`] is what it returns from
//! `GET /universities`. [`UniversityPayload`] is the body the frontend sends on
//! `POST /universities` and `PUT /universities/{id}`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier assigned by the REST service. Immutable once assigned, used as
/// the update and delete key.
///
/// Services disagree on whether ids are strings or integers, so both JSON
/// forms are accepted and kept as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniversityId(String);

impl UniversityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for UniversityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UniversityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => UniversityId(s),
            RawId::Signed(n) => UniversityId(n.to_string()),
            RawId::Unsigned(n) => UniversityId(n.to_string()),
        })
    }
}

/// A university record as stored by the service.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub location: String,
    pub website: String,
    /// Order is preserved on edit but carries no meaning.
    #[serde(default)]
    pub contact_emails: Vec<String>,
}

/// Normalized create/update body. It has no identifier: on create the
/// service assigns one, and on update it travels in the path.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UniversityPayload {
    pub name: String,
    pub location: String,
    pub website: String,
    pub contact_emails: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn id_accepts_strings_and_integers() {
        let text: University = serde_json::from_str(
            r#"{"id":"abc","name":"MIT","location":"Cambridge","website":"https://mit.edu","contact_emails":[]}"#,
        )
        .unwrap();
        let number: University = serde_json::from_str(
            r#"{"id":42,"name":"MIT","location":"Cambridge","website":"https://mit.edu"}"#,
        )
        .unwrap();

        assert_eq!(text.id, UniversityId::new("abc"));
        assert_eq!(number.id.as_str(), "42");
        assert!(number.contact_emails.is_empty());
    }

    #[test]
    fn payload_serializes_flat_email_list() {
        let payload = UniversityPayload {
            name: "MIT".to_string(),
            location: "Cambridge".to_string(),
            website: "https://mit.edu".to_string(),
            contact_emails: vec!["a@mit.edu".to_string()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "MIT",
                "location": "Cambridge",
                "website": "https://mit.edu",
                "contact_emails": ["a@mit.edu"],
            })
        );
    }
}
