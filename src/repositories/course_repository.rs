use futures::TryStreamExt;
use mongodb::{bson::Document, Collection, Database};

use crate::models::course;
use crate::repositories::pipelines;
use crate::utils::errors::AppError;

pub struct CourseRepository {
    collection: Collection<Document>,
}

impl CourseRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(course::COLLECTION),
        }
    }

    pub async fn total_final_marks(&self) -> Result<f64, AppError> {
        let groups: Vec<Document> = self
            .collection
            .aggregate(pipelines::total_final_marks())
            .await?
            .try_collect()
            .await?;

        Ok(pipelines::sum_from_group(&groups))
    }
}
