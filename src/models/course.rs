//! Modelo de Course

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "course";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub final_mark: Option<f64>,
}

impl Course {
    pub fn new(name: impl Into<String>, final_mark: f64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            final_mark: Some(final_mark),
        }
    }
}
