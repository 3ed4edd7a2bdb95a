use async_trait::async_trait;
use reqwest::Method;
use tracing::error;

use crate::error::AppError;
use crate::models::{Enrollment, EnrollmentCreateDto, EnrollmentUpdateDto};

use super::HttpApiClient;

#[async_trait]
pub trait EnrollmentApi: Send + Sync {
    async fn create_enrollment(
        &self,
        course_id: i64,
        dto: &EnrollmentCreateDto,
    ) -> Result<Enrollment, AppError>;
    async fn update_enrollment(
        &self,
        id: i64,
        dto: &EnrollmentUpdateDto,
    ) -> Result<Enrollment, AppError>;
    async fn delete_enrollment(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl EnrollmentApi for HttpApiClient {
    async fn create_enrollment(
        &self,
        course_id: i64,
        dto: &EnrollmentCreateDto,
    ) -> Result<Enrollment, AppError> {
        self.send_json(Method::POST, &format!("/courses/{}/enrollments", course_id), dto)
            .await
            .inspect_err(|e| {
                error!("Error creating enrollment for course id {}: {}", course_id, e)
            })
    }

    async fn update_enrollment(
        &self,
        id: i64,
        dto: &EnrollmentUpdateDto,
    ) -> Result<Enrollment, AppError> {
        self.send_json(Method::PUT, &format!("/enrollments/{}", id), dto)
            .await
            .inspect_err(|e| error!("Error updating enrollment with id {}: {}", id, e))
    }

    async fn delete_enrollment(&self, id: i64) -> Result<(), AppError> {
        self.delete(&format!("/enrollments/{}", id))
            .await
            .inspect_err(|e| error!("Error deleting enrollment with id {}: {}", id, e))
    }
}
