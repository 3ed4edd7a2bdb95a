use crate::models::{Course, CourseCreateDto};

use super::FieldErrors;

/// Course form as typed by the user. `price` and `professor_id` stay optional until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseForm {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub professor_id: Option<i64>,
}

impl CourseForm {
    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone().unwrap_or_default(),
            price: Some(course.price),
            professor_id: Some(course.professor_id),
        }
    }

    /// Only meaningful once [`validate_course`] returned no errors.
    pub fn to_dto(&self) -> CourseCreateDto {
        let description = self.description.trim();
        CourseCreateDto {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price: self.price.unwrap_or_default(),
            professor_id: self.professor_id.unwrap_or_default(),
        }
    }
}

pub fn validate_course(form: &CourseForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Course name is required.");
    }

    match form.price {
        Some(price) if price >= 0.0 => {}
        _ => errors.insert("price", "Price must be a non-negative number."),
    }

    if form.professor_id.unwrap_or(0) == 0 {
        errors.insert("professorId", "Professor is required.");
    }

    errors
}
