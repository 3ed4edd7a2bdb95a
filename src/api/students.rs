use async_trait::async_trait;
use tracing::error;

use crate::error::AppError;
use crate::models::Student;

use super::HttpApiClient;

#[async_trait]
pub trait StudentApi: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;
}

#[async_trait]
impl StudentApi for HttpApiClient {
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.get_json("/students/list")
            .await
            .inspect_err(|e| error!("Error fetching students list: {}", e))
    }
}
