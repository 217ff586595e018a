//! Servicio de reportes
//!
//! Catálogo fijo de operaciones sobre el conjunto estudiante/curso/facultad.
//! Cada operación obtiene el handle compartido, ejecuta una sola consulta,
//! registra un resumen de una línea y devuelve el resultado. Los errores se
//! registran y se propagan sin cambios.

use std::future::Future;

use mongodb::bson::{oid::ObjectId, Document};
use mongodb::Database;
use tracing::{error, info};

use crate::database::{ConnectionManager, MongoConnector};
use crate::models::{StudentAverage, StudentFacultyView, UpdateSummary};
use crate::repositories::{CourseRepository, FacultyRepository, StudentRepository};
use crate::utils::errors::AppResult;

pub struct ReportService {
    connections: ConnectionManager<MongoConnector>,
}

impl ReportService {
    pub fn new(connections: ConnectionManager<MongoConnector>) -> Self {
        Self { connections }
    }

    /// Gestor de la conexión compartida, para diagnóstico
    pub fn connections(&self) -> &ConnectionManager<MongoConnector> {
        &self.connections
    }

    /// Abre la conexión compartida si todavía no existe
    pub async fn connect(&mut self) -> AppResult<()> {
        self.connections.acquire().await.map(|_| ())
    }

    /// Cierra la conexión compartida
    pub async fn shutdown(&mut self) {
        self.connections.release().await;
    }

    /// Obtener handle → ejecutar → registrar → devolver
    async fn run_logged<T, F, Fut, D>(&mut self, action: &str, execute: F, describe: D) -> AppResult<T>
    where
        F: FnOnce(Database) -> Fut,
        Fut: Future<Output = AppResult<T>>,
        D: FnOnce(&T) -> String,
    {
        let handle = self.connections.acquire().await?;

        match execute(handle.database().clone()).await {
            Ok(value) => {
                info!("{}", describe(&value));
                Ok(value)
            }
            Err(e) => {
                error!("❌ Error {}: {}", action, e);
                Err(e)
            }
        }
    }

    pub async fn create_faculty_index(&mut self) -> AppResult<String> {
        self.run_logged(
            "creating index",
            |db| async move { FacultyRepository::new(&db).ensure_name_index().await },
            |name| format!("📇 Index created: {}", name),
        )
        .await
    }

    pub async fn total_final_marks(&mut self) -> AppResult<f64> {
        self.run_logged(
            "calculating final marks",
            |db| async move { CourseRepository::new(&db).total_final_marks().await },
            |total| format!("🧮 Total Final Marks: {}", total),
        )
        .await
    }

    pub async fn assign_courses(&mut self, course_ids: &[ObjectId]) -> AppResult<UpdateSummary> {
        self.run_logged(
            "assigning courses",
            |db| async move { StudentRepository::new(&db).assign_courses(course_ids).await },
            |summary| {
                format!(
                    "📚 {} student(s) updated with courses ({} matched).",
                    summary.modified_count, summary.matched_count
                )
            },
        )
        .await
    }

    pub async fn student_courses(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Vec<Document>>> {
        self.run_logged(
            "fetching student courses",
            |db| async move {
                StudentRepository::new(&db)
                    .find_courses(first_name, last_name)
                    .await
            },
            |courses| match courses {
                Some(courses) => format!("📚 Student courses: {}", to_json(courses)),
                None => "🔍 Student not found.".to_string(),
            },
        )
        .await
    }

    pub async fn assign_faculty(
        &mut self,
        first_name: &str,
        faculty_id: ObjectId,
    ) -> AppResult<UpdateSummary> {
        self.run_logged(
            "assigning faculty",
            |db| async move {
                StudentRepository::new(&db)
                    .assign_faculty(first_name, faculty_id)
                    .await
            },
            |summary| format!("🏛️ {} student updated with faculty.", summary.modified_count),
        )
        .await
    }

    pub async fn student_with_faculty(
        &mut self,
        first_name: &str,
    ) -> AppResult<Option<Document>> {
        self.run_logged(
            "fetching student with faculty",
            |db| async move { StudentRepository::new(&db).find_with_faculty(first_name).await },
            |student| format!("🏛️ Student with faculty: {}", to_json(student)),
        )
        .await
    }

    pub async fn student_averages(&mut self) -> AppResult<Vec<StudentAverage>> {
        self.run_logged(
            "calculating averages",
            |db| async move { StudentRepository::new(&db).average_grades().await },
            |averages| format!("📊 Student average grades: {}", to_json(averages)),
        )
        .await
    }

    pub async fn student_faculty_projection(
        &mut self,
        first_name: &str,
    ) -> AppResult<Option<StudentFacultyView>> {
        self.run_logged(
            "fetching projected data",
            |db| async move {
                StudentRepository::new(&db)
                    .find_faculty_projection(first_name)
                    .await
            },
            |view| format!("🪪 Projected result: {}", to_json(view)),
        )
        .await
    }
}

/// JSON compacto para los logs; `null` para resultados vacíos
fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_to_json_renders_missing_results_as_null() {
        let view: Option<StudentFacultyView> = None;
        assert_eq!(to_json(&view), "null");
    }

    #[test]
    fn test_to_json_renders_projection() {
        let view = StudentFacultyView {
            student_name: "Sara".to_string(),
            faculty_name: Some("Engineering".to_string()),
        };
        assert_eq!(
            to_json(&view),
            r#"{"studentName":"Sara","facultyName":"Engineering"}"#
        );
    }

    #[test]
    fn test_to_json_keeps_whole_joined_document() {
        let student = doc! {
            "firstName": "Sara",
            "courses": ["c1", "c2"],
            "grades": [{ "course": "c1", "grade": 80 }],
            "faculty": [{ "dean": "Dr. Nasser" }],
        };
        let rendered = to_json(&Some(student));
        assert!(rendered.contains(r#""courses":["c1","c2"]"#));
        assert!(rendered.contains(r#""grade":80"#));
        assert!(rendered.contains(r#""faculty":[{"dean":"Dr. Nasser"}]"#));
    }
}
