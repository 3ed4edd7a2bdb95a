#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use course_console::api::{
    ClassroomApi, CourseApi, EnrollmentApi, ProfessorApi, ScheduleApi, StudentApi,
};
use course_console::error::{AppError, ErrorResponse};
use course_console::models::*;

#[derive(Default)]
struct State {
    courses: Vec<Course>,
    classrooms: Vec<Classroom>,
    professors: Vec<ProfessorSummary>,
    students: Vec<Student>,
    next_id: i64,
}

/// In-memory stand-in for the backend. Operations can be made to fail by name and every
/// call is recorded so tests can check what reached the "network".
pub struct FakeBackend {
    state: Mutex<State>,
    failures: Mutex<HashMap<&'static str, String>>,
    calls: Mutex<Vec<&'static str>>,
}

pub fn api_error(status: u16, message: &str) -> AppError {
    AppError::Api {
        status,
        body: Some(ErrorResponse {
            error: Some(message.to_string()),
            message: None,
        }),
    }
}

pub fn student(id: i64, first: &str, last: &str) -> Student {
    Student {
        user: User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            user_status: UserStatus::Active,
            registration_date: "2024-09-01T00:00:00Z".to_string(),
        },
        additional_contact: None,
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 100,
                ..State::default()
            }),
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Two classrooms, two professors, two students and two courses, the first of which
    /// has one schedule and one enrollment.
    pub fn seeded() -> Self {
        let backend = Self::new();
        {
            let mut state = backend.state.lock().unwrap();
            state.classrooms = vec![
                Classroom { id: 1, name: "Computer Lab A".into(), abbreviation: "CLA".into() },
                Classroom { id: 2, name: "Mathematics Room".into(), abbreviation: "MR".into() },
            ];
            state.professors = vec![
                ProfessorSummary { id: 1, full_name: "John Doe".into() },
                ProfessorSummary { id: 2, full_name: "Jane Smith".into() },
            ];
            state.students = vec![student(1, "Alice", "Brown"), student(2, "Bob", "Green")];
            let lab = state.classrooms[0].clone();
            let alice = state.students[0].clone();
            state.courses = vec![
                Course {
                    id: 1,
                    name: "Introduction to Programming".into(),
                    description: Some("Learn basic programming concepts".into()),
                    price: 299.99,
                    professor_id: 1,
                    professor: Some(ProfessorRef {
                        id: Some(1),
                        full_name: Some("John Doe".into()),
                        ..ProfessorRef::default()
                    }),
                    schedules: Some(vec![Schedule {
                        id: 10,
                        course_id: 1,
                        classroom: Some(lab),
                        classroom_id: None,
                        day_of_week: 1,
                        start_time: "09:00".into(),
                        end_time: "11:00".into(),
                    }]),
                    enrollments: Some(vec![Enrollment {
                        id: 20,
                        course_id: 1,
                        student: Some(alice),
                        student_id: None,
                        enrollment_date: "2024-09-02T10:00:00Z".into(),
                        status: EnrollmentStatus::Active,
                        grade1: Some(4),
                        grade2: None,
                        grade3: None,
                        final_grade: None,
                    }]),
                },
                Course {
                    id: 2,
                    name: "Advanced Mathematics".into(),
                    description: Some("Advanced mathematical topics".into()),
                    price: 399.99,
                    professor_id: 2,
                    professor: Some(ProfessorRef {
                        id: Some(2),
                        first_name: Some("Jane".into()),
                        last_name: Some("Smith".into()),
                        ..ProfessorRef::default()
                    }),
                    schedules: Some(Vec::new()),
                    enrollments: Some(Vec::new()),
                },
            ];
        }
        backend
    }

    pub fn fail_on(&self, op: &'static str, message: &str) {
        self.failures.lock().unwrap().insert(op, message.to_string());
    }

    pub fn clear_failures(&self) {
        self.failures.lock().unwrap().clear();
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn course(&self, id: i64) -> Option<Course> {
        self.state.lock().unwrap().courses.iter().find(|c| c.id == id).cloned()
    }

    pub fn classroom_names(&self) -> Vec<String> {
        self.state.lock().unwrap().classrooms.iter().map(|c| c.name.clone()).collect()
    }

    pub fn classroom(&self, id: i64) -> Option<Classroom> {
        self.state.lock().unwrap().classrooms.iter().find(|c| c.id == id).cloned()
    }

    fn enter(&self, op: &'static str) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(op);
        match self.failures.lock().unwrap().get(op) {
            Some(message) => Err(api_error(500, message)),
            None => Ok(()),
        }
    }
}

fn next_id(state: &mut State) -> i64 {
    state.next_id += 1;
    state.next_id
}

fn not_found(what: &str, id: i64) -> AppError {
    api_error(404, &format!("{} {} not found", what, id))
}

#[async_trait]
impl CourseApi for FakeBackend {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.enter("list_courses")?;
        Ok(self.state.lock().unwrap().courses.clone())
    }

    async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        self.enter("get_course")?;
        self.course(id).ok_or_else(|| not_found("Course", id))
    }

    async fn create_course(&self, dto: &CourseCreateDto) -> Result<Course, AppError> {
        self.enter("create_course")?;
        let mut state = self.state.lock().unwrap();
        let professor = state
            .professors
            .iter()
            .find(|p| p.id == dto.professor_id)
            .map(|p| ProfessorRef {
                id: Some(p.id),
                full_name: Some(p.full_name.clone()),
                ..ProfessorRef::default()
            });
        let course = Course {
            id: next_id(&mut state),
            name: dto.name.clone(),
            description: dto.description.clone(),
            price: dto.price,
            professor_id: dto.professor_id,
            professor,
            schedules: Some(Vec::new()),
            enrollments: Some(Vec::new()),
        };
        state.courses.push(course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: i64, dto: &CourseUpdateDto) -> Result<Course, AppError> {
        self.enter("update_course")?;
        let mut state = self.state.lock().unwrap();
        let course = state
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("Course", id))?;
        course.name = dto.name.clone();
        course.description = dto.description.clone();
        course.price = dto.price;
        course.professor_id = dto.professor_id;
        Ok(course.clone())
    }

    async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        self.enter("delete_course")?;
        let mut state = self.state.lock().unwrap();
        let before = state.courses.len();
        state.courses.retain(|c| c.id != id);
        if state.courses.len() == before {
            return Err(not_found("Course", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ClassroomApi for FakeBackend {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, AppError> {
        self.enter("list_classrooms")?;
        Ok(self.state.lock().unwrap().classrooms.clone())
    }

    async fn get_classroom(&self, id: i64) -> Result<Classroom, AppError> {
        self.enter("get_classroom")?;
        self.state
            .lock()
            .unwrap()
            .classrooms
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("Classroom", id))
    }

    async fn create_classroom(&self, dto: &ClassroomCreateDto) -> Result<Classroom, AppError> {
        self.enter("create_classroom")?;
        let mut state = self.state.lock().unwrap();
        let classroom = Classroom {
            id: next_id(&mut state),
            name: dto.name.clone(),
            abbreviation: dto.abbreviation.clone(),
        };
        state.classrooms.push(classroom.clone());
        Ok(classroom)
    }

    async fn update_classroom(
        &self,
        id: i64,
        dto: &ClassroomUpdateDto,
    ) -> Result<Classroom, AppError> {
        self.enter("update_classroom")?;
        let mut state = self.state.lock().unwrap();
        let classroom = state
            .classrooms
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("Classroom", id))?;
        classroom.name = dto.name.clone();
        classroom.abbreviation = dto.abbreviation.clone();
        Ok(classroom.clone())
    }

    async fn delete_classroom(&self, id: i64) -> Result<(), AppError> {
        self.enter("delete_classroom")?;
        let mut state = self.state.lock().unwrap();
        let before = state.classrooms.len();
        state.classrooms.retain(|c| c.id != id);
        if state.classrooms.len() == before {
            return Err(not_found("Classroom", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfessorApi for FakeBackend {
    async fn list_professors(&self) -> Result<Vec<ProfessorSummary>, AppError> {
        self.enter("list_professors")?;
        Ok(self.state.lock().unwrap().professors.clone())
    }
}

#[async_trait]
impl StudentApi for FakeBackend {
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.enter("list_students")?;
        Ok(self.state.lock().unwrap().students.clone())
    }
}

#[async_trait]
impl ScheduleApi for FakeBackend {
    async fn create_schedule(
        &self,
        course_id: i64,
        dto: &ScheduleCreateDto,
    ) -> Result<Schedule, AppError> {
        self.enter("create_schedule")?;
        let mut state = self.state.lock().unwrap();
        let id = next_id(&mut state);
        let classroom = state.classrooms.iter().find(|c| c.id == dto.classroom_id).cloned();
        let course = state
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| not_found("Course", course_id))?;
        let schedule = Schedule {
            id,
            course_id,
            classroom,
            classroom_id: Some(dto.classroom_id),
            day_of_week: dto.day_of_week,
            start_time: dto.start_time.clone(),
            end_time: dto.end_time.clone(),
        };
        course.schedules.get_or_insert_with(Vec::new).push(schedule.clone());
        Ok(schedule)
    }

    async fn update_schedule(
        &self,
        id: i64,
        dto: &ScheduleUpdateDto,
    ) -> Result<Schedule, AppError> {
        self.enter("update_schedule")?;
        let mut state = self.state.lock().unwrap();
        let classroom = state.classrooms.iter().find(|c| c.id == dto.classroom_id).cloned();
        let schedule = state
            .courses
            .iter_mut()
            .flat_map(|c| c.schedules.iter_mut().flatten())
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("Schedule", id))?;
        schedule.classroom = classroom;
        schedule.classroom_id = Some(dto.classroom_id);
        schedule.day_of_week = dto.day_of_week;
        schedule.start_time = dto.start_time.clone();
        schedule.end_time = dto.end_time.clone();
        Ok(schedule.clone())
    }

    async fn delete_schedule(&self, id: i64) -> Result<(), AppError> {
        self.enter("delete_schedule")?;
        let mut state = self.state.lock().unwrap();
        for course in state.courses.iter_mut() {
            if let Some(schedules) = course.schedules.as_mut() {
                schedules.retain(|s| s.id != id);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentApi for FakeBackend {
    async fn create_enrollment(
        &self,
        course_id: i64,
        dto: &EnrollmentCreateDto,
    ) -> Result<Enrollment, AppError> {
        self.enter("create_enrollment")?;
        let mut state = self.state.lock().unwrap();
        let id = next_id(&mut state);
        let student = state.students.iter().find(|s| s.id() == dto.student_id).cloned();
        let course = state
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| not_found("Course", course_id))?;
        let enrollment = Enrollment {
            id,
            course_id,
            student,
            student_id: Some(dto.student_id),
            enrollment_date: dto.enrollment_date.clone().unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            grade1: None,
            grade2: None,
            grade3: None,
            final_grade: None,
        };
        course.enrollments.get_or_insert_with(Vec::new).push(enrollment.clone());
        Ok(enrollment)
    }

    async fn update_enrollment(
        &self,
        id: i64,
        dto: &EnrollmentUpdateDto,
    ) -> Result<Enrollment, AppError> {
        self.enter("update_enrollment")?;
        let mut state = self.state.lock().unwrap();
        let enrollment = state
            .courses
            .iter_mut()
            .flat_map(|c| c.enrollments.iter_mut().flatten())
            .find(|e| e.id == id)
            .ok_or_else(|| not_found("Enrollment", id))?;
        if let Some(status) = dto.status {
            enrollment.status = status;
        }
        enrollment.grade1 = dto.grade1;
        enrollment.grade2 = dto.grade2;
        enrollment.grade3 = dto.grade3;
        enrollment.final_grade = dto.final_grade;
        Ok(enrollment.clone())
    }

    async fn delete_enrollment(&self, id: i64) -> Result<(), AppError> {
        self.enter("delete_enrollment")?;
        let mut state = self.state.lock().unwrap();
        for course in state.courses.iter_mut() {
            if let Some(enrollments) = course.enrollments.as_mut() {
                enrollments.retain(|e| e.id != id);
            }
        }
        Ok(())
    }
}
