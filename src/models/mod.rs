pub mod classroom;
pub mod course;
pub mod enrollment;
pub mod schedule;
pub mod user;

pub use classroom::{Classroom, ClassroomCreateDto, ClassroomUpdateDto};
pub use course::{Course, CourseCreateDto, CourseUpdateDto, ProfessorRef};
pub use enrollment::{Enrollment, EnrollmentCreateDto, EnrollmentStatus, EnrollmentUpdateDto};
pub use schedule::{DAYS_OF_WEEK, Schedule, ScheduleCreateDto, ScheduleUpdateDto, day_name};
pub use user::{Professor, ProfessorSummary, Student, User, UserStatus};
