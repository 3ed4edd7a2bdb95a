use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::user::Student;

/// Wire values are upper-case; parsing from user input ignores case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Completed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "ACTIVE",
            EnrollmentStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(EnrollmentStatus::Active),
            "COMPLETED" => Ok(EnrollmentStatus::Completed),
            other => Err(format!("unknown enrollment status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub course_id: i64,
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub student_id: Option<i64>,
    pub enrollment_date: String,
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub grade1: Option<i16>,
    #[serde(default)]
    pub grade2: Option<i16>,
    #[serde(default)]
    pub grade3: Option<i16>,
    #[serde(default)]
    pub final_grade: Option<i16>,
}

impl Enrollment {
    pub fn student_id(&self) -> Option<i64> {
        self.student_id.or_else(|| self.student.as_ref().map(Student::id))
    }

    pub fn student_name(&self) -> Option<String> {
        self.student.as_ref().map(Student::full_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCreateDto {
    pub student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
}

/// Update body; the student of an enrollment cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade1: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade2: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade3: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_grade: Option<i16>,
}
