use async_trait::async_trait;
use reqwest::Method;
use tracing::error;

use crate::error::AppError;
use crate::models::{Classroom, ClassroomCreateDto, ClassroomUpdateDto};

use super::HttpApiClient;

#[async_trait]
pub trait ClassroomApi: Send + Sync {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, AppError>;
    async fn get_classroom(&self, id: i64) -> Result<Classroom, AppError>;
    async fn create_classroom(&self, dto: &ClassroomCreateDto) -> Result<Classroom, AppError>;
    async fn update_classroom(
        &self,
        id: i64,
        dto: &ClassroomUpdateDto,
    ) -> Result<Classroom, AppError>;
    async fn delete_classroom(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl ClassroomApi for HttpApiClient {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, AppError> {
        self.get_json("/classrooms")
            .await
            .inspect_err(|e| error!("Error fetching classrooms: {}", e))
    }

    async fn get_classroom(&self, id: i64) -> Result<Classroom, AppError> {
        self.get_json(&format!("/classrooms/{}", id))
            .await
            .inspect_err(|e| error!("Error fetching classroom with id {}: {}", id, e))
    }

    async fn create_classroom(&self, dto: &ClassroomCreateDto) -> Result<Classroom, AppError> {
        self.send_json(Method::POST, "/classrooms", dto)
            .await
            .inspect_err(|e| error!("Error creating classroom: {}", e))
    }

    async fn update_classroom(
        &self,
        id: i64,
        dto: &ClassroomUpdateDto,
    ) -> Result<Classroom, AppError> {
        self.send_json(Method::PUT, &format!("/classrooms/{}", id), dto)
            .await
            .inspect_err(|e| error!("Error updating classroom with id {}: {}", id, e))
    }

    async fn delete_classroom(&self, id: i64) -> Result<(), AppError> {
        self.delete(&format!("/classrooms/{}", id))
            .await
            .inspect_err(|e| error!("Error deleting classroom with id {}: {}", id, e))
    }
}
