use std::ops::RangeInclusive;

use crate::models::{Enrollment, EnrollmentCreateDto, EnrollmentStatus, EnrollmentUpdateDto};

use super::FieldErrors;

pub const GRADE_RANGE: RangeInclusive<i64> = 1..=5;

/// Enrollment form. `student_id` only exists on the create path; `status` is kept as typed
/// so that unknown values can be reported instead of rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentForm {
    pub student_id: Option<i64>,
    pub status: Option<String>,
    pub grade1: Option<i64>,
    pub grade2: Option<i64>,
    pub grade3: Option<i64>,
    pub final_grade: Option<i64>,
}

impl EnrollmentForm {
    pub fn for_create() -> Self {
        Self {
            student_id: Some(0),
            status: Some(EnrollmentStatus::Active.to_string()),
            ..Self::default()
        }
    }

    pub fn from_enrollment(enrollment: &Enrollment) -> Self {
        Self {
            student_id: None,
            status: Some(enrollment.status.to_string()),
            grade1: enrollment.grade1.map(i64::from),
            grade2: enrollment.grade2.map(i64::from),
            grade3: enrollment.grade3.map(i64::from),
            final_grade: enrollment.final_grade.map(i64::from),
        }
    }

    pub fn parsed_status(&self) -> Option<EnrollmentStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn to_create_dto(&self, enrollment_date: Option<String>) -> EnrollmentCreateDto {
        EnrollmentCreateDto {
            student_id: self.student_id.unwrap_or_default(),
            enrollment_date,
            status: self.parsed_status(),
        }
    }

    pub fn to_update_dto(&self) -> EnrollmentUpdateDto {
        EnrollmentUpdateDto {
            status: self.parsed_status(),
            grade1: self.grade1.and_then(to_small),
            grade2: self.grade2.and_then(to_small),
            grade3: self.grade3.and_then(to_small),
            final_grade: self.final_grade.and_then(to_small),
        }
    }
}

fn to_small(grade: i64) -> Option<i16> {
    i16::try_from(grade).ok()
}

/// `creating` selects the create path, where a student must be chosen.
pub fn validate_enrollment(form: &EnrollmentForm, creating: bool) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if creating && form.student_id.unwrap_or(0) == 0 {
        errors.insert("studentId", "Student is required.");
    }

    if let Some(status) = form.status.as_deref().filter(|s| !s.is_empty()) {
        if status.parse::<EnrollmentStatus>().is_err() {
            errors.insert("status", "Status must be either 'ACTIVE' or 'COMPLETED'.");
        }
    }

    let grades = [
        ("grade1", "Grade 1", form.grade1),
        ("grade2", "Grade 2", form.grade2),
        ("grade3", "Grade 3", form.grade3),
        ("finalGrade", "Final Grade", form.final_grade),
    ];
    for (field, label, grade) in grades {
        if let Some(value) = grade {
            if !GRADE_RANGE.contains(&value) {
                errors.insert(field, format!("{} must be between 1 and 5.", label));
            }
        }
    }

    errors
}
