//! Modelo de Student
//!
//! Mapea los documentos de la colección `student`.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "student";

/// Nota de un estudiante en un curso
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(default)]
    pub course: Option<ObjectId>,
    pub grade: f64,
}

/// Student principal - mapea un documento de la colección student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub courses: Vec<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<ObjectId>,
    #[serde(default)]
    pub grades: Vec<Grade>,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            courses: Vec::new(),
            faculty_id: None,
            grades: Vec::new(),
        }
    }
}
