use std::sync::Arc;

use tracing::info;

use crate::api::{CourseApi, ProfessorApi};
use crate::error::{AppError, banner};
use crate::filter::filter_by_term;
use crate::models::{Course, ProfessorSummary};
use crate::validation::{CourseForm, validate_course};

use super::{FormMode, FormModal, PageStatus, SubmitOutcome};

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn schedule_summary(course: &Course) -> String {
    match course.schedules().len() {
        0 => "No schedules".to_string(),
        n => format!("{} schedule(s)", n),
    }
}

pub fn enrollment_summary(course: &Course) -> String {
    match course.enrollments().len() {
        0 => "No enrollments".to_string(),
        n => format!("{} student(s) enrolled", n),
    }
}

pub struct CourseListPage<A: ?Sized> {
    api: Arc<A>,
    courses: Vec<Course>,
    professors: Vec<ProfessorSummary>,
    status: PageStatus,
    banner: Option<String>,
    search_term: String,
    modal: Option<FormModal<CourseForm>>,
    pending_delete: Option<i64>,
}

impl<A: CourseApi + ProfessorApi + ?Sized> CourseListPage<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            courses: Vec::new(),
            professors: Vec::new(),
            status: PageStatus::Idle,
            banner: None,
            search_term: String::new(),
            modal: None,
            pending_delete: None,
        }
    }

    /// Loads the courses and the professor dropdown source.
    pub async fn load(&mut self) {
        self.fetch_courses().await;
        self.fetch_professors().await;
    }

    async fn fetch_courses(&mut self) {
        self.status = PageStatus::Loading;
        self.banner = None;
        match self.api.list_courses().await {
            Ok(courses) => {
                self.courses = courses;
                self.status = PageStatus::Loaded;
            }
            Err(e) => {
                self.banner = Some(banner(
                    "Failed to fetch courses. Please try again later.",
                    &e,
                ));
                self.status = PageStatus::LoadError;
            }
        }
    }

    async fn fetch_professors(&mut self) {
        match self.api.list_professors().await {
            Ok(professors) => self.professors = professors,
            Err(e) => {
                // a failed course fetch keeps its own banner
                if self.banner.is_none() {
                    self.banner = Some(banner(
                        "Failed to fetch professors list. Please try again later.",
                        &e,
                    ));
                }
            }
        }
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn professors(&self) -> &[ProfessorSummary] {
        &self.professors
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn visible(&self) -> Vec<&Course> {
        filter_by_term(&self.courses, &self.search_term)
    }

    pub fn modal(&self) -> Option<&FormModal<CourseForm>> {
        self.modal.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut CourseForm> {
        self.modal.as_mut().map(|m| &mut m.form)
    }

    pub fn open_create(&mut self) {
        let form = CourseForm {
            price: Some(0.0),
            professor_id: Some(0),
            ..CourseForm::default()
        };
        self.modal = Some(FormModal::create(form));
    }

    pub fn open_edit(&mut self, id: i64) -> Result<(), AppError> {
        let course = self
            .courses
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::InvalidInput(format!("Course {} not found.", id)))?;
        self.modal = Some(FormModal::edit(id, CourseForm::from_course(course)));
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(modal) = self.modal.as_mut() else {
            return SubmitOutcome::Ignored;
        };

        let errors = validate_course(&modal.form);
        if !errors.is_empty() {
            modal.errors = errors;
            return SubmitOutcome::Invalid;
        }
        modal.errors.clear();

        let mode = modal.mode;
        let dto = modal.form.to_dto();
        self.status = PageStatus::Submitting;
        let result = match mode {
            FormMode::Create => self.api.create_course(&dto).await,
            FormMode::Edit(id) => self.api.update_course(id, &dto).await,
        };
        self.modal = None;

        match result {
            Ok(saved) => {
                info!("course {} {}d", saved.id, mode.verb());
                self.fetch_courses().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.banner = Some(banner(&format!("Failed to {} course.", mode.verb()), &e));
                self.status = PageStatus::Loaded;
                SubmitOutcome::Failed
            }
        }
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> SubmitOutcome {
        let Some(id) = self.pending_delete.take() else {
            return SubmitOutcome::Ignored;
        };

        self.status = PageStatus::Deleting;
        self.banner = None;
        match self.api.delete_course(id).await {
            Ok(()) => {
                info!("course {} deleted", id);
                self.fetch_courses().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.banner = Some(banner("Failed to delete course.", &e));
                self.status = PageStatus::Loaded;
                SubmitOutcome::Failed
            }
        }
    }
}
