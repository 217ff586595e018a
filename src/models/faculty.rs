//! Modelo de Faculty

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "faculty";

/// Campo indexado por nombre de facultad
pub const NAME_FIELD: &str = "facultyName";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub faculty_name: String,
}

impl Faculty {
    pub fn new(faculty_name: impl Into<String>) -> Self {
        Self {
            id: None,
            faculty_name: faculty_name.into(),
        }
    }
}
