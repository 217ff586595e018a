use mongodb::{bson::Document, Collection, Database, IndexModel};

use crate::models::faculty;
use crate::repositories::pipelines;
use crate::utils::errors::AppError;

pub struct FacultyRepository {
    collection: Collection<Document>,
}

impl FacultyRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(faculty::COLLECTION),
        }
    }

    /// Asegura el índice ascendente sobre `facultyName` y devuelve su nombre
    pub async fn ensure_name_index(&self) -> Result<String, AppError> {
        let model = IndexModel::builder()
            .keys(pipelines::faculty_name_index_keys())
            .build();
        let result = self.collection.create_index(model).await?;

        Ok(result.index_name)
    }
}
