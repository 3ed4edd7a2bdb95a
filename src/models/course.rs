use serde::{Deserialize, Serialize};

use super::enrollment::Enrollment;
use super::schedule::Schedule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub professor_id: i64,
    #[serde(default)]
    pub professor: Option<ProfessorRef>,
    #[serde(default)]
    pub schedules: Option<Vec<Schedule>>,
    #[serde(default)]
    pub enrollments: Option<Vec<Enrollment>>,
}

impl Course {
    pub fn professor_name(&self) -> Option<String> {
        self.professor.as_ref().and_then(ProfessorRef::display_name)
    }

    pub fn schedules(&self) -> &[Schedule] {
        self.schedules.as_deref().unwrap_or_default()
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        self.enrollments.as_deref().unwrap_or_default()
    }
}

/// Professor nested in a course. Depending on the endpoint the backend embeds either the
/// full professor record or the `{ id, fullName }` summary, so every name field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ProfessorRef {
    pub fn display_name(&self) -> Option<String> {
        if let Some(full) = self.full_name.as_ref().filter(|n| !n.trim().is_empty()) {
            return Some(full.clone());
        }
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreateDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub professor_id: i64,
}

pub type CourseUpdateDto = CourseCreateDto;
