//! Page state machines for the console.
//!
//! Each page owns its API handle and the snapshot of its last fetch. Failures are turned
//! into a banner on the page and never escape as panics; every successful mutation is
//! followed by a full refetch of the data the page shows.

mod classroom_list;
mod course_detail;
mod course_list;

pub use classroom_list::ClassroomListPage;
pub use course_detail::{CourseDetailPage, DeleteTarget};
pub use course_list::{CourseListPage, enrollment_summary, format_price, schedule_summary};

use crate::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Submitting,
    Deleting,
    LoadError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Edit(_) => "update",
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// An open modal: the form being edited plus the field errors of the last submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModal<F> {
    pub mode: FormMode,
    pub form: F,
    pub errors: FieldErrors,
}

impl<F> FormModal<F> {
    pub fn create(form: F) -> Self {
        Self {
            mode: FormMode::Create,
            form,
            errors: FieldErrors::new(),
        }
    }

    pub fn edit(id: i64, form: F) -> Self {
        Self {
            mode: FormMode::Edit(id),
            form,
            errors: FieldErrors::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request succeeded and the page data was refetched.
    Saved,
    /// Client-side validation failed; nothing was sent.
    Invalid,
    /// The request failed; the page banner holds the message.
    Failed,
    /// There was no open modal or pending confirmation to act on.
    Ignored,
}
