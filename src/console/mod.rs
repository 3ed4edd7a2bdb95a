//! Command-line front end. Each subcommand drives one of the page state machines the same
//! way a user would: load, optionally filter, open a form, fill it and submit.

mod render;
mod run;

use clap::{Parser, Subcommand};

pub use render::{
    classroom_table, course_detail, course_table, field_errors, professor_table, student_table,
};
pub use run::run;

#[derive(Debug, Parser)]
#[command(name = "course-console", version, about = "Course administration console")]
pub struct Cli {
    /// Backend base URL, overrides COURSE_API_BASE_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Courses(CourseCommand),
    #[command(subcommand)]
    Classrooms(ClassroomCommand),
    #[command(subcommand)]
    Schedules(ScheduleCommand),
    #[command(subcommand)]
    Enrollments(EnrollmentCommand),
    /// List professors that can own a course
    Professors,
    /// List students that can be enrolled
    Students,
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one course with its schedules and enrollments
    Show { id: String },
    Create {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
        #[arg(long)]
        professor_id: Option<i64>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
        #[arg(long)]
        professor_id: Option<i64>,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ClassroomCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Create {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        abbreviation: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        abbreviation: Option<String>,
    },
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    Add {
        course: String,
        #[arg(long)]
        classroom_id: Option<i64>,
        /// 0 = Sunday … 6 = Saturday
        #[arg(long, allow_negative_numbers = true)]
        day: Option<i64>,
        #[arg(long, default_value = "")]
        start: String,
        #[arg(long, default_value = "")]
        end: String,
    },
    Update {
        course: String,
        id: i64,
        #[arg(long)]
        classroom_id: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        day: Option<i64>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    Delete {
        course: String,
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum EnrollmentCommand {
    Add {
        course: String,
        #[arg(long)]
        student_id: Option<i64>,
        /// ACTIVE or COMPLETED
        #[arg(long)]
        status: Option<String>,
    },
    Update {
        course: String,
        id: i64,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        grade1: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        grade2: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        grade3: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        final_grade: Option<i64>,
    },
    Delete {
        course: String,
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
