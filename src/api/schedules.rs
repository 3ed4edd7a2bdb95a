use async_trait::async_trait;
use reqwest::Method;
use tracing::error;

use crate::error::AppError;
use crate::models::{Schedule, ScheduleCreateDto, ScheduleUpdateDto};

use super::HttpApiClient;

#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn create_schedule(
        &self,
        course_id: i64,
        dto: &ScheduleCreateDto,
    ) -> Result<Schedule, AppError>;
    async fn update_schedule(&self, id: i64, dto: &ScheduleUpdateDto)
    -> Result<Schedule, AppError>;
    async fn delete_schedule(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl ScheduleApi for HttpApiClient {
    async fn create_schedule(
        &self,
        course_id: i64,
        dto: &ScheduleCreateDto,
    ) -> Result<Schedule, AppError> {
        self.send_json(Method::POST, &format!("/courses/{}/schedules", course_id), dto)
            .await
            .inspect_err(|e| error!("Error creating schedule for course id {}: {}", course_id, e))
    }

    async fn update_schedule(
        &self,
        id: i64,
        dto: &ScheduleUpdateDto,
    ) -> Result<Schedule, AppError> {
        self.send_json(Method::PUT, &format!("/schedules/{}", id), dto)
            .await
            .inspect_err(|e| error!("Error updating schedule with id {}: {}", id, e))
    }

    async fn delete_schedule(&self, id: i64) -> Result<(), AppError> {
        self.delete(&format!("/schedules/{}", id))
            .await
            .inspect_err(|e| error!("Error deleting schedule with id {}: {}", id, e))
    }
}
