use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::api::{ClassroomApi, CourseApi, EnrollmentApi, ProfessorApi, ScheduleApi, StudentApi};
use crate::error::{AppError, banner};
use crate::models::{Classroom, Course, Enrollment, ProfessorSummary, Schedule, Student};
use crate::validation::{
    CourseForm, EnrollmentForm, ScheduleForm, validate_course, validate_enrollment,
    validate_schedule,
};

use super::{FormMode, FormModal, PageStatus, SubmitOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Schedule(i64),
    Enrollment(i64),
}

impl DeleteTarget {
    pub fn noun(&self) -> &'static str {
        match self {
            DeleteTarget::Schedule(_) => "schedule",
            DeleteTarget::Enrollment(_) => "enrollment",
        }
    }
}

/// A single course with its schedules and enrollments.
///
/// The course id comes from the caller (a route parameter, a CLI argument) and is parsed
/// here so a bad value surfaces as a page banner rather than an error.
pub struct CourseDetailPage<A: ?Sized> {
    api: Arc<A>,
    course_id: Option<i64>,
    course: Option<Course>,
    professors: Vec<ProfessorSummary>,
    classrooms: Vec<Classroom>,
    students: Vec<Student>,
    status: PageStatus,
    banner: Option<String>,
    master: Option<FormModal<CourseForm>>,
    schedule_modal: Option<FormModal<ScheduleForm>>,
    enrollment_modal: Option<FormModal<EnrollmentForm>>,
    pending_delete: Option<DeleteTarget>,
}

impl<A> CourseDetailPage<A>
where
    A: CourseApi + ProfessorApi + ClassroomApi + StudentApi + ScheduleApi + EnrollmentApi + ?Sized,
{
    pub fn new(api: Arc<A>, course_id_param: Option<&str>) -> Self {
        let parsed = match course_id_param.map(str::trim) {
            None | Some("") => Err("Course ID is missing."),
            Some(raw) => raw.parse::<i64>().map_err(|_| "Invalid Course ID format."),
        };
        let (course_id, status, banner) = match parsed {
            Ok(id) => (Some(id), PageStatus::Idle, None),
            Err(msg) => (None, PageStatus::LoadError, Some(msg.to_string())),
        };

        Self {
            api,
            course_id,
            course: None,
            professors: Vec::new(),
            classrooms: Vec::new(),
            students: Vec::new(),
            status,
            banner,
            master: None,
            schedule_modal: None,
            enrollment_modal: None,
            pending_delete: None,
        }
    }

    pub async fn load(&mut self) {
        let Some(course_id) = self.course_id else {
            return;
        };

        self.status = PageStatus::Loading;
        self.banner = None;
        match self.fetch_all(course_id).await {
            Ok(()) => self.status = PageStatus::Loaded,
            Err(e) => {
                self.banner = Some(banner("Failed to fetch course details or related data.", &e));
                self.status = PageStatus::LoadError;
            }
        }
    }

    async fn fetch_all(&mut self, course_id: i64) -> Result<(), AppError> {
        self.course = Some(self.api.get_course(course_id).await?);
        self.professors = self.api.list_professors().await?;
        self.classrooms = self.api.list_classrooms().await?;
        self.students = self.api.list_students().await?;
        Ok(())
    }

    pub fn course_id(&self) -> Option<i64> {
        self.course_id
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    pub fn professors(&self) -> &[ProfessorSummary] {
        &self.professors
    }

    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn schedules(&self) -> &[Schedule] {
        self.course.as_ref().map(Course::schedules).unwrap_or_default()
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        self.course.as_ref().map(Course::enrollments).unwrap_or_default()
    }

    /// Classroom label for a schedule row, looked up in the classroom list when the
    /// schedule only carries an id.
    pub fn classroom_label(&self, schedule: &Schedule) -> String {
        let classroom = schedule.classroom.as_ref().or_else(|| {
            schedule
                .classroom_id()
                .and_then(|id| self.classrooms.iter().find(|c| c.id == id))
        });
        match classroom {
            Some(c) => format!("{} ({})", c.name, c.abbreviation),
            None => "—".to_string(),
        }
    }

    pub fn student_label(&self, enrollment: &Enrollment) -> String {
        if let Some(name) = enrollment.student_name() {
            return name;
        }
        enrollment
            .student_id()
            .and_then(|id| self.students.iter().find(|s| s.id() == id))
            .map(Student::full_name)
            .unwrap_or_else(|| "—".to_string())
    }

    /// Runs a mutation against the course and refetches it; the page keeps the previous
    /// snapshot if either step fails.
    async fn mutate_and_refresh<F, Fut>(&mut self, mutation: F) -> Result<(), AppError>
    where
        F: FnOnce(Arc<A>, i64) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let course_id = self.require_course_id()?;
        mutation(Arc::clone(&self.api), course_id).await?;
        self.course = Some(self.api.get_course(course_id).await?);
        Ok(())
    }

    fn require_course_id(&self) -> Result<i64, AppError> {
        self.course_id
            .ok_or_else(|| AppError::InvalidInput("Course ID is missing.".to_string()))
    }

    fn finish(&mut self, result: Result<(), AppError>, failure_prefix: &str) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.banner = None;
                self.status = PageStatus::Loaded;
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.banner = Some(banner(failure_prefix, &e));
                self.status = PageStatus::Loaded;
                SubmitOutcome::Failed
            }
        }
    }

    // Course master data

    pub fn master(&self) -> Option<&FormModal<CourseForm>> {
        self.master.as_ref()
    }

    pub fn master_form_mut(&mut self) -> Option<&mut CourseForm> {
        self.master.as_mut().map(|m| &mut m.form)
    }

    pub fn begin_edit(&mut self) -> Result<(), AppError> {
        let course = self
            .course
            .as_ref()
            .ok_or_else(|| AppError::InvalidInput("Course is not loaded.".to_string()))?;
        self.master = Some(FormModal::edit(course.id, CourseForm::from_course(course)));
        Ok(())
    }

    /// Drops the edit form; the next `begin_edit` starts again from the saved course.
    pub fn cancel_edit(&mut self) {
        self.master = None;
    }

    pub async fn save_course(&mut self) -> SubmitOutcome {
        let Some(master) = self.master.as_mut() else {
            return SubmitOutcome::Ignored;
        };

        let errors = validate_course(&master.form);
        if !errors.is_empty() {
            master.errors = errors;
            return SubmitOutcome::Invalid;
        }
        master.errors.clear();

        let dto = master.form.to_dto();
        self.master = None;
        self.status = PageStatus::Submitting;

        let result = self
            .mutate_and_refresh(move |api, course_id| async move {
                let saved = api.update_course(course_id, &dto).await?;
                info!("course {} updated", saved.id);
                Ok(())
            })
            .await;
        self.finish(result, "Failed to update course.")
    }

    // Schedules

    pub fn schedule_modal(&self) -> Option<&FormModal<ScheduleForm>> {
        self.schedule_modal.as_ref()
    }

    pub fn schedule_form_mut(&mut self) -> Option<&mut ScheduleForm> {
        self.schedule_modal.as_mut().map(|m| &mut m.form)
    }

    pub fn open_schedule_create(&mut self) {
        let form = ScheduleForm {
            classroom_id: Some(0),
            day_of_week: Some(0),
            ..ScheduleForm::default()
        };
        self.schedule_modal = Some(FormModal::create(form));
    }

    pub fn open_schedule_edit(&mut self, id: i64) -> Result<(), AppError> {
        let schedule = self
            .schedules()
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::InvalidInput(format!("Schedule {} not found.", id)))?;
        let form = ScheduleForm::from_schedule(schedule);
        self.schedule_modal = Some(FormModal::edit(id, form));
        Ok(())
    }

    pub fn close_schedule_modal(&mut self) {
        self.schedule_modal = None;
    }

    pub async fn save_schedule(&mut self) -> SubmitOutcome {
        let Some(modal) = self.schedule_modal.as_mut() else {
            return SubmitOutcome::Ignored;
        };

        let errors = validate_schedule(&modal.form);
        if !errors.is_empty() {
            modal.errors = errors;
            return SubmitOutcome::Invalid;
        }
        modal.errors.clear();

        let mode = modal.mode;
        let dto = modal.form.to_dto();
        self.schedule_modal = None;
        self.status = PageStatus::Submitting;

        let result = self
            .mutate_and_refresh(move |api, course_id| async move {
                let saved = match mode {
                    FormMode::Edit(id) => api.update_schedule(id, &dto).await?,
                    FormMode::Create => api.create_schedule(course_id, &dto).await?,
                };
                info!("schedule {} {}d", saved.id, mode.verb());
                Ok(())
            })
            .await;
        self.finish(result, "Failed to save schedule.")
    }

    // Enrollments

    pub fn enrollment_modal(&self) -> Option<&FormModal<EnrollmentForm>> {
        self.enrollment_modal.as_ref()
    }

    pub fn enrollment_form_mut(&mut self) -> Option<&mut EnrollmentForm> {
        self.enrollment_modal.as_mut().map(|m| &mut m.form)
    }

    pub fn open_enrollment_create(&mut self) {
        self.enrollment_modal = Some(FormModal::create(EnrollmentForm::for_create()));
    }

    pub fn open_enrollment_edit(&mut self, id: i64) -> Result<(), AppError> {
        let enrollment = self
            .enrollments()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::InvalidInput(format!("Enrollment {} not found.", id)))?;
        let form = EnrollmentForm::from_enrollment(enrollment);
        self.enrollment_modal = Some(FormModal::edit(id, form));
        Ok(())
    }

    pub fn close_enrollment_modal(&mut self) {
        self.enrollment_modal = None;
    }

    pub async fn save_enrollment(&mut self) -> SubmitOutcome {
        let Some(modal) = self.enrollment_modal.as_mut() else {
            return SubmitOutcome::Ignored;
        };

        let creating = modal.mode == FormMode::Create;
        let errors = validate_enrollment(&modal.form, creating);
        if !errors.is_empty() {
            modal.errors = errors;
            return SubmitOutcome::Invalid;
        }
        modal.errors.clear();

        let mode = modal.mode;
        let form = modal.form.clone();
        self.enrollment_modal = None;
        self.status = PageStatus::Submitting;

        let result = self
            .mutate_and_refresh(move |api, course_id| async move {
                let saved = match mode {
                    FormMode::Edit(id) => api.update_enrollment(id, &form.to_update_dto()).await?,
                    FormMode::Create => {
                        let dto = form.to_create_dto(Some(Utc::now().to_rfc3339()));
                        api.create_enrollment(course_id, &dto).await?
                    }
                };
                info!("enrollment {} {}d", saved.id, mode.verb());
                Ok(())
            })
            .await;
        self.finish(result, "Failed to save enrollment.")
    }

    // Deletes

    pub fn pending_delete(&self) -> Option<DeleteTarget> {
        self.pending_delete
    }

    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.pending_delete = Some(target);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> SubmitOutcome {
        let Some(target) = self.pending_delete.take() else {
            return SubmitOutcome::Ignored;
        };

        self.status = PageStatus::Deleting;
        let result = self
            .mutate_and_refresh(move |api, _| async move {
                match target {
                    DeleteTarget::Schedule(id) => api.delete_schedule(id).await,
                    DeleteTarget::Enrollment(id) => api.delete_enrollment(id).await,
                }
            })
            .await;
        if result.is_ok() {
            info!("{:?} deleted", target);
        }
        let prefix = format!("Failed to delete {}.", target.noun());
        self.finish(result, &prefix)
    }
}
