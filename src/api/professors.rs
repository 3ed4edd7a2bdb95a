use async_trait::async_trait;
use tracing::error;

use crate::error::AppError;
use crate::models::ProfessorSummary;

use super::HttpApiClient;

#[async_trait]
pub trait ProfessorApi: Send + Sync {
    async fn list_professors(&self) -> Result<Vec<ProfessorSummary>, AppError>;
}

#[async_trait]
impl ProfessorApi for HttpApiClient {
    async fn list_professors(&self) -> Result<Vec<ProfessorSummary>, AppError> {
        self.get_json("/professors/list")
            .await
            .inspect_err(|e| error!("Error fetching professors list: {}", e))
    }
}
