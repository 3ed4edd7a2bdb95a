use serde::{Deserialize, Serialize};

use super::classroom::Classroom;

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn day_name(day_of_week: i64) -> Option<&'static str> {
    usize::try_from(day_of_week)
        .ok()
        .and_then(|idx| DAYS_OF_WEEK.get(idx).copied())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub course_id: i64,
    #[serde(default)]
    pub classroom: Option<Classroom>,
    #[serde(default)]
    pub classroom_id: Option<i64>,
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
}

impl Schedule {
    pub fn classroom_id(&self) -> Option<i64> {
        self.classroom_id
            .or_else(|| self.classroom.as_ref().map(|c| c.id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCreateDto {
    pub classroom_id: i64,
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
}

pub type ScheduleUpdateDto = ScheduleCreateDto;
