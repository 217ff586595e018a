use futures::TryStreamExt;
use mongodb::bson::{self, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;

use crate::models::{student, StudentAverage, StudentFacultyView, UpdateSummary};
use crate::repositories::pipelines;
use crate::utils::errors::AppError;

pub struct StudentRepository {
    collection: Collection<Document>,
}

impl StudentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(student::COLLECTION),
        }
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, AppError> {
        let documents = self
            .collection
            .aggregate(pipeline)
            .await?
            .try_collect()
            .await?;

        Ok(documents)
    }

    async fn aggregate_first(&self, pipeline: Vec<Document>) -> Result<Option<Document>, AppError> {
        Ok(self.aggregate(pipeline).await?.into_iter().next())
    }

    async fn aggregate_first_as<T: DeserializeOwned>(
        &self,
        pipeline: Vec<Document>,
    ) -> Result<Option<T>, AppError> {
        match self.aggregate_first(pipeline).await? {
            Some(document) => Ok(Some(bson::from_document(document)?)),
            None => Ok(None),
        }
    }

    /// Asigna la misma lista de cursos a todos los estudiantes
    pub async fn assign_courses(&self, course_ids: &[ObjectId]) -> Result<UpdateSummary, AppError> {
        let result = self
            .collection
            .update_many(pipelines::all_documents(), pipelines::set_courses(course_ids))
            .await?;

        Ok(result.into())
    }

    /// Cursos del estudiante con ese nombre completo; `None` si no existe
    pub async fn find_courses(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Vec<Document>>, AppError> {
        let student = self
            .aggregate_first(pipelines::student_courses(first_name, last_name))
            .await?;

        Ok(student.map(pipelines::course_details))
    }

    pub async fn assign_faculty(
        &self,
        first_name: &str,
        faculty_id: ObjectId,
    ) -> Result<UpdateSummary, AppError> {
        let result = self
            .collection
            .update_one(
                pipelines::by_first_name(first_name),
                pipelines::set_faculty(faculty_id),
            )
            .await?;

        Ok(result.into())
    }

    /// Documento completo del estudiante con su facultad en `faculty`
    pub async fn find_with_faculty(&self, first_name: &str) -> Result<Option<Document>, AppError> {
        self.aggregate_first(pipelines::student_with_faculty(first_name))
            .await
    }

    pub async fn average_grades(&self) -> Result<Vec<StudentAverage>, AppError> {
        self.aggregate(pipelines::student_averages())
            .await?
            .into_iter()
            .map(|document| bson::from_document(document).map_err(AppError::from))
            .collect()
    }

    pub async fn find_faculty_projection(
        &self,
        first_name: &str,
    ) -> Result<Option<StudentFacultyView>, AppError> {
        self.aggregate_first_as(pipelines::student_faculty_projection(first_name))
            .await
    }
}
