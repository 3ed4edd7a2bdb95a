use async_trait::async_trait;
use reqwest::Method;
use tracing::error;

use crate::error::AppError;
use crate::models::{Course, CourseCreateDto, CourseUpdateDto};

use super::HttpApiClient;

#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn get_course(&self, id: i64) -> Result<Course, AppError>;
    async fn create_course(&self, dto: &CourseCreateDto) -> Result<Course, AppError>;
    async fn update_course(&self, id: i64, dto: &CourseUpdateDto) -> Result<Course, AppError>;
    async fn delete_course(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl CourseApi for HttpApiClient {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.get_json("/courses")
            .await
            .inspect_err(|e| error!("Error fetching courses: {}", e))
    }

    async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        self.get_json(&format!("/courses/{}", id))
            .await
            .inspect_err(|e| error!("Error fetching course with id {}: {}", id, e))
    }

    async fn create_course(&self, dto: &CourseCreateDto) -> Result<Course, AppError> {
        self.send_json(Method::POST, "/courses", dto)
            .await
            .inspect_err(|e| error!("Error creating course: {}", e))
    }

    async fn update_course(&self, id: i64, dto: &CourseUpdateDto) -> Result<Course, AppError> {
        self.send_json(Method::PUT, &format!("/courses/{}", id), dto)
            .await
            .inspect_err(|e| error!("Error updating course with id {}: {}", id, e))
    }

    async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        self.delete(&format!("/courses/{}", id))
            .await
            .inspect_err(|e| error!("Error deleting course with id {}: {}", id, e))
    }
}
