mod classrooms;
mod courses;
mod enrollments;
mod professors;
mod schedules;
mod students;

use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::error::AppError;

pub use classrooms::ClassroomApi;
pub use courses::CourseApi;
pub use enrollments::EnrollmentApi;
pub use professors::ProfessorApi;
pub use schedules::ScheduleApi;
pub use students::StudentApi;

/// Every entity client in one handle, so one backend object can serve all pages.
pub trait AdminApi:
    CourseApi + ClassroomApi + ProfessorApi + StudentApi + ScheduleApi + EnrollmentApi
{
}

impl<T> AdminApi for T where
    T: CourseApi + ClassroomApi + ProfessorApi + StudentApi + ScheduleApi + EnrollmentApi
{
}

/// JSON-over-HTTP client for the course administration backend.
pub struct HttpApiClient {
    client: Client,
    config: ConsoleConfig,
}

impl HttpApiClient {
    pub fn new(config: ConsoleConfig) -> Result<Self, AppError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        debug!("GET {}", path);
        let response = self.client.get(self.url(path)).send().await?;
        read_json(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!("{} {}", method, path);
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        debug!("DELETE {}", path);
        let response = self.client.delete(self.url(path)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::api(status.as_u16(), &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let response = ensure_success(response).await?;
    let body_text = response.text().await?;
    Ok(serde_json::from_str::<T>(&body_text)?)
}
