use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::warn;

use crate::api::AdminApi;
use crate::error::AppError;
use crate::pages::{
    ClassroomListPage, CourseDetailPage, CourseListPage, DeleteTarget, PageStatus, SubmitOutcome,
};
use crate::validation::FieldErrors;

use super::render;
use super::{ClassroomCommand, Command, CourseCommand, EnrollmentCommand, ScheduleCommand};

pub async fn run<A: AdminApi + ?Sized>(api: Arc<A>, command: Command) -> Result<(), AppError> {
    match command {
        Command::Courses(cmd) => courses(api, cmd).await,
        Command::Classrooms(cmd) => classrooms(api, cmd).await,
        Command::Schedules(cmd) => schedules(api, cmd).await,
        Command::Enrollments(cmd) => enrollments(api, cmd).await,
        Command::Professors => {
            let professors = api.list_professors().await?;
            print!("{}", render::professor_table(&professors));
            Ok(())
        }
        Command::Students => {
            let students = api.list_students().await?;
            print!("{}", render::student_table(&students));
            Ok(())
        }
    }
}

fn ensure_loaded(status: PageStatus, banner: Option<&str>) -> Result<(), AppError> {
    if status == PageStatus::LoadError {
        return Err(AppError::Action(
            banner.unwrap_or("Failed to load data.").to_string(),
        ));
    }
    if let Some(banner) = banner {
        warn!("{}", banner);
    }
    Ok(())
}

fn check_outcome(
    outcome: SubmitOutcome,
    errors: Option<&FieldErrors>,
    banner: Option<&str>,
) -> Result<(), AppError> {
    match outcome {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid => Err(AppError::Validation(errors.cloned().unwrap_or_default())),
        SubmitOutcome::Failed => Err(AppError::Action(
            banner.unwrap_or("The action failed.").to_string(),
        )),
        SubmitOutcome::Ignored => Err(AppError::Action("Nothing to submit.".to_string())),
    }
}

/// Stand-in for the confirmation dialog.
fn confirm(message: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    print!("{} [y/N] ", message);
    io::stdout()
        .flush()
        .map_err(|e| AppError::InvalidInput(format!("Failed to write prompt: {}", e)))?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| AppError::InvalidInput(format!("Failed to read confirmation: {}", e)))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

async fn courses<A: AdminApi + ?Sized>(api: Arc<A>, cmd: CourseCommand) -> Result<(), AppError> {
    match cmd {
        CourseCommand::Show { id } => {
            let page = load_detail(api, &id).await?;
            print_detail(&page);
            Ok(())
        }
        CourseCommand::List { search } => {
            let mut page = load_courses(api).await?;
            if let Some(term) = search {
                page.set_search_term(term);
            }
            print!("{}", render::course_table(&page.visible()));
            Ok(())
        }
        CourseCommand::Create { name, description, price, professor_id } => {
            let mut page = load_courses(api).await?;
            page.open_create();
            if let Some(form) = page.form_mut() {
                form.name = name;
                form.description = description.unwrap_or_default();
                form.price = price;
                form.professor_id = professor_id;
            }
            submit_course(page).await
        }
        CourseCommand::Update { id, name, description, price, professor_id } => {
            let mut page = load_courses(api).await?;
            page.open_edit(id)?;
            if let Some(form) = page.form_mut() {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(description) = description {
                    form.description = description;
                }
                if price.is_some() {
                    form.price = price;
                }
                if professor_id.is_some() {
                    form.professor_id = professor_id;
                }
            }
            submit_course(page).await
        }
        CourseCommand::Delete { id, yes } => {
            let mut page = load_courses(api).await?;
            let message =
                "Are you sure you want to delete this course? This action cannot be undone.";
            if !confirm(message, yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            page.request_delete(id);
            let outcome = page.confirm_delete().await;
            check_outcome(outcome, None, page.banner())?;
            print!("{}", render::course_table(&page.visible()));
            Ok(())
        }
    }
}

async fn load_courses<A: AdminApi + ?Sized>(api: Arc<A>) -> Result<CourseListPage<A>, AppError> {
    let mut page = CourseListPage::new(api);
    page.load().await;
    ensure_loaded(page.status(), page.banner())?;
    Ok(page)
}

async fn submit_course<A: AdminApi + ?Sized>(mut page: CourseListPage<A>) -> Result<(), AppError> {
    let outcome = page.submit().await;
    let errors = page.modal().map(|m| m.errors.clone());
    check_outcome(outcome, errors.as_ref(), page.banner())?;
    ensure_loaded(page.status(), page.banner())?;
    print!("{}", render::course_table(&page.visible()));
    Ok(())
}

async fn classrooms<A: AdminApi + ?Sized>(
    api: Arc<A>,
    cmd: ClassroomCommand,
) -> Result<(), AppError> {
    let mut page = ClassroomListPage::new(api);
    page.load().await;
    ensure_loaded(page.status(), page.banner())?;

    match cmd {
        ClassroomCommand::List { search } => {
            if let Some(term) = search {
                page.set_search_term(term);
            }
            print!("{}", render::classroom_table(&page.visible()));
            return Ok(());
        }
        ClassroomCommand::Create { name, abbreviation } => {
            page.open_create();
            if let Some(form) = page.form_mut() {
                form.name = name;
                form.abbreviation = abbreviation;
            }
        }
        ClassroomCommand::Update { id, name, abbreviation } => {
            page.open_edit(id)?;
            if let Some(form) = page.form_mut() {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(abbreviation) = abbreviation {
                    form.abbreviation = abbreviation;
                }
            }
        }
        ClassroomCommand::Delete { id, yes } => {
            let message =
                "Are you sure you want to delete this classroom? This action cannot be undone.";
            if !confirm(message, yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            page.request_delete(id);
            let outcome = page.confirm_delete().await;
            check_outcome(outcome, None, page.banner())?;
            print!("{}", render::classroom_table(&page.visible()));
            return Ok(());
        }
    }

    let outcome = page.submit().await;
    let errors = page.modal().map(|m| m.errors.clone());
    check_outcome(outcome, errors.as_ref(), page.banner())?;
    ensure_loaded(page.status(), page.banner())?;
    print!("{}", render::classroom_table(&page.visible()));
    Ok(())
}

async fn load_detail<A: AdminApi + ?Sized>(
    api: Arc<A>,
    course: &str,
) -> Result<CourseDetailPage<A>, AppError> {
    let mut page = CourseDetailPage::new(api, Some(course));
    page.load().await;
    ensure_loaded(page.status(), page.banner())?;
    Ok(page)
}

fn print_detail<A: AdminApi + ?Sized>(page: &CourseDetailPage<A>) {
    if let Some(course) = page.course() {
        print!(
            "{}",
            render::course_detail(course, |s| page.classroom_label(s), |e| page.student_label(e))
        );
    }
}

async fn schedules<A: AdminApi + ?Sized>(
    api: Arc<A>,
    cmd: ScheduleCommand,
) -> Result<(), AppError> {
    let (page, outcome) = match cmd {
        ScheduleCommand::Add { course, classroom_id, day, start, end } => {
            let mut page = load_detail(api, &course).await?;
            page.open_schedule_create();
            if let Some(form) = page.schedule_form_mut() {
                form.classroom_id = classroom_id;
                form.day_of_week = day;
                form.start_time = start;
                form.end_time = end;
            }
            let outcome = page.save_schedule().await;
            (page, outcome)
        }
        ScheduleCommand::Update { course, id, classroom_id, day, start, end } => {
            let mut page = load_detail(api, &course).await?;
            page.open_schedule_edit(id)?;
            if let Some(form) = page.schedule_form_mut() {
                if classroom_id.is_some() {
                    form.classroom_id = classroom_id;
                }
                if day.is_some() {
                    form.day_of_week = day;
                }
                if let Some(start) = start {
                    form.start_time = start;
                }
                if let Some(end) = end {
                    form.end_time = end;
                }
            }
            let outcome = page.save_schedule().await;
            (page, outcome)
        }
        ScheduleCommand::Delete { course, id, yes } => {
            let mut page = load_detail(api, &course).await?;
            if !confirm("Are you sure you want to delete this schedule?", yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            page.request_delete(DeleteTarget::Schedule(id));
            let outcome = page.confirm_delete().await;
            (page, outcome)
        }
    };

    let errors = page.schedule_modal().map(|m| m.errors.clone());
    check_outcome(outcome, errors.as_ref(), page.banner())?;
    print_detail(&page);
    Ok(())
}

async fn enrollments<A: AdminApi + ?Sized>(
    api: Arc<A>,
    cmd: EnrollmentCommand,
) -> Result<(), AppError> {
    let (page, outcome) = match cmd {
        EnrollmentCommand::Add { course, student_id, status } => {
            let mut page = load_detail(api, &course).await?;
            page.open_enrollment_create();
            if let Some(form) = page.enrollment_form_mut() {
                form.student_id = student_id;
                if status.is_some() {
                    form.status = status;
                }
            }
            let outcome = page.save_enrollment().await;
            (page, outcome)
        }
        EnrollmentCommand::Update { course, id, status, grade1, grade2, grade3, final_grade } => {
            let mut page = load_detail(api, &course).await?;
            page.open_enrollment_edit(id)?;
            if let Some(form) = page.enrollment_form_mut() {
                if status.is_some() {
                    form.status = status;
                }
                if grade1.is_some() {
                    form.grade1 = grade1;
                }
                if grade2.is_some() {
                    form.grade2 = grade2;
                }
                if grade3.is_some() {
                    form.grade3 = grade3;
                }
                if final_grade.is_some() {
                    form.final_grade = final_grade;
                }
            }
            let outcome = page.save_enrollment().await;
            (page, outcome)
        }
        EnrollmentCommand::Delete { course, id, yes } => {
            let mut page = load_detail(api, &course).await?;
            if !confirm("Are you sure you want to remove this enrollment?", yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            page.request_delete(DeleteTarget::Enrollment(id));
            let outcome = page.confirm_delete().await;
            (page, outcome)
        }
    };

    let errors = page.enrollment_modal().map(|m| m.errors.clone());
    check_outcome(outcome, errors.as_ref(), page.banner())?;
    print_detail(&page);
    Ok(())
}
