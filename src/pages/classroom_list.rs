use std::sync::Arc;

use tracing::info;

use crate::api::ClassroomApi;
use crate::error::{AppError, banner};
use crate::filter::filter_by_term;
use crate::models::Classroom;
use crate::validation::{ClassroomForm, validate_classroom};

use super::{FormMode, FormModal, PageStatus, SubmitOutcome};

pub struct ClassroomListPage<A: ?Sized> {
    api: Arc<A>,
    classrooms: Vec<Classroom>,
    status: PageStatus,
    banner: Option<String>,
    search_term: String,
    modal: Option<FormModal<ClassroomForm>>,
    pending_delete: Option<i64>,
}

impl<A: ClassroomApi + ?Sized> ClassroomListPage<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            classrooms: Vec::new(),
            status: PageStatus::Idle,
            banner: None,
            search_term: String::new(),
            modal: None,
            pending_delete: None,
        }
    }

    pub async fn load(&mut self) {
        self.status = PageStatus::Loading;
        self.banner = None;
        match self.api.list_classrooms().await {
            Ok(classrooms) => {
                self.classrooms = classrooms;
                self.status = PageStatus::Loaded;
            }
            Err(e) => {
                self.banner = Some(banner(
                    "Failed to fetch classrooms. Please try again later.",
                    &e,
                ));
                self.status = PageStatus::LoadError;
            }
        }
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Snapshot filtered by the current search term.
    pub fn visible(&self) -> Vec<&Classroom> {
        filter_by_term(&self.classrooms, &self.search_term)
    }

    pub fn modal(&self) -> Option<&FormModal<ClassroomForm>> {
        self.modal.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ClassroomForm> {
        self.modal.as_mut().map(|m| &mut m.form)
    }

    pub fn open_create(&mut self) {
        self.modal = Some(FormModal::create(ClassroomForm::default()));
    }

    pub fn open_edit(&mut self, id: i64) -> Result<(), AppError> {
        let classroom = self
            .classrooms
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::InvalidInput(format!("Classroom {} not found.", id)))?;
        self.modal = Some(FormModal::edit(id, ClassroomForm::from_classroom(classroom)));
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(modal) = self.modal.as_mut() else {
            return SubmitOutcome::Ignored;
        };

        let errors = validate_classroom(&modal.form, &self.classrooms, modal.mode.editing_id());
        if !errors.is_empty() {
            modal.errors = errors;
            return SubmitOutcome::Invalid;
        }
        modal.errors.clear();

        let mode = modal.mode;
        let dto = modal.form.to_dto();
        self.status = PageStatus::Submitting;
        let result = match mode {
            FormMode::Create => self.api.create_classroom(&dto).await,
            FormMode::Edit(id) => self.api.update_classroom(id, &dto).await,
        };
        self.modal = None;

        match result {
            Ok(saved) => {
                info!("classroom {} {}d", saved.id, mode.verb());
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.banner = Some(banner(
                    &format!("Failed to {} classroom.", mode.verb()),
                    &e,
                ));
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
        match self.api.delete_classroom(id).await {
            Ok(()) => {
                info!("classroom {} deleted", id);
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.banner = Some(banner("Failed to delete classroom.", &e));
                self.status = PageStatus::Loaded;
                SubmitOutcome::Failed
            }
        }
    }
}
