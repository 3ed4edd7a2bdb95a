use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Schedule, ScheduleCreateDto};

use super::FieldErrors;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("Invalid time regex"));

/// Strict 24-hour `HH:MM`, zero padded.
pub fn is_valid_time(value: &str) -> bool {
    TIME_RE.is_match(value)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleForm {
    pub classroom_id: Option<i64>,
    pub day_of_week: Option<i64>,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleForm {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            classroom_id: schedule.classroom_id(),
            day_of_week: Some(schedule.day_of_week),
            start_time: schedule.start_time.clone(),
            end_time: schedule.end_time.clone(),
        }
    }

    pub fn to_dto(&self) -> ScheduleCreateDto {
        ScheduleCreateDto {
            classroom_id: self.classroom_id.unwrap_or_default(),
            day_of_week: self.day_of_week.unwrap_or_default(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}

pub fn validate_schedule(form: &ScheduleForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.classroom_id.unwrap_or(0) == 0 {
        errors.insert("classroomId", "Classroom is required.");
    }

    if !matches!(form.day_of_week, Some(0..=6)) {
        errors.insert("dayOfWeek", "Day of the week is required and must be valid.");
    }

    let start_ok = check_time(&mut errors, "startTime", "Start time", &form.start_time);
    let end_ok = check_time(&mut errors, "endTime", "End time", &form.end_time);

    // Fixed-width HH:MM compares correctly as plain strings.
    if start_ok && end_ok && form.end_time <= form.start_time {
        errors.insert("timeOrder", "End time must be after start time.");
    }

    errors
}

fn check_time(errors: &mut FieldErrors, field: &'static str, label: &str, value: &str) -> bool {
    if value.is_empty() {
        errors.insert(field, format!("{} is required.", label));
        false
    } else if !is_valid_time(value) {
        errors.insert(field, format!("{} must be in HH:MM format.", label));
        false
    } else {
        true
    }
}
