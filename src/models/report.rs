//! Resultados de los reportes
//!
//! Formas de documento producidas por nuestras propias agregaciones, más el
//! resumen de una ejecución completa de la secuencia. Los resultados de
//! `$lookup` se devuelven como documentos tal cual los entrega el motor.

use chrono::{DateTime, Utc};
use mongodb::bson::Document;
use mongodb::results::UpdateResult;
use serde::{Deserialize, Serialize};

/// Resultado de una asignación (`updateOne` / `updateMany`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateSummary {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Promedio de notas agrupado por nombre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAverage {
    #[serde(rename = "_id")]
    pub first_name: Option<String>,
    pub avg: Option<f64>,
}

/// Vista reducida estudiante/facultad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFacultyView {
    pub student_name: String,
    #[serde(default)]
    pub faculty_name: Option<String>,
}

/// Resultado de una ejecución completa de la secuencia de reportes
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    pub index_name: String,
    pub total_final_marks: f64,
    pub courses_assigned: UpdateSummary,
    pub student_courses: Option<Vec<Document>>,
    pub faculty_assigned: UpdateSummary,
    pub student_with_faculty: Option<Document>,
    pub averages: Vec<StudentAverage>,
    pub projection: Option<StudentFacultyView>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SequenceReport {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
