use crate::models::{Classroom, ClassroomCreateDto};

use super::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassroomForm {
    pub name: String,
    pub abbreviation: String,
}

impl ClassroomForm {
    pub fn from_classroom(classroom: &Classroom) -> Self {
        Self {
            name: classroom.name.clone(),
            abbreviation: classroom.abbreviation.clone(),
        }
    }

    pub fn to_dto(&self) -> ClassroomCreateDto {
        ClassroomCreateDto {
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
        }
    }
}

/// `editing_id` is the classroom being edited, or `None` when creating.
pub fn validate_classroom(
    form: &ClassroomForm,
    existing: &[Classroom],
    editing_id: Option<i64>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Classroom name is required.");
    }

    if form.abbreviation.trim().is_empty() {
        errors.insert("abbreviation", "Classroom abbreviation is required.");
    } else {
        let wanted = form.abbreviation.to_lowercase();
        let duplicate = existing
            .iter()
            .any(|c| c.abbreviation.to_lowercase() == wanted && Some(c.id) != editing_id);
        if duplicate {
            errors.insert(
                "abbreviation",
                "This abbreviation is already in use by another classroom.",
            );
        }
    }

    errors
}
