//! Record domain types

use serde::{Deserialize, Serialize};

use crate::dto::record::RecordPayload;

/// A single persisted record
///
/// `id` is assigned by the storage engine and stays `None` until the record
/// has been saved once. All other fields are freely mutable and unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub city: Option<String>,
}

impl Record {
    /// Overwrite every mutable field with the payload, keeping the id
    pub fn overwrite_with(&mut self, payload: RecordPayload) {
        self.name = payload.name;
        self.age = payload.age;
        self.city = payload.city;
    }
}

impl From<RecordPayload> for Record {
    fn from(payload: RecordPayload) -> Self {
        Record {
            id: None,
            name: payload.name,
            age: payload.age,
            city: payload.city,
        }
    }
}
