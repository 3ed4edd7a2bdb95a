use crate::models::{
    Classroom, Course, Enrollment, ProfessorSummary, Schedule, Student, day_name,
};
use crate::pages::{enrollment_summary, format_price, schedule_summary};
use crate::validation::FieldErrors;

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(idx) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "—".to_string())
}

pub fn classroom_table(classrooms: &[&Classroom]) -> String {
    if classrooms.is_empty() {
        return "No classrooms found.\n".to_string();
    }
    let rows: Vec<Vec<String>> = classrooms
        .iter()
        .map(|c| vec![c.id.to_string(), c.name.clone(), c.abbreviation.clone()])
        .collect();
    table(&["ID", "Name", "Abbreviation"], &rows)
}

pub fn course_table(courses: &[&Course]) -> String {
    if courses.is_empty() {
        return "No courses found.\n".to_string();
    }
    let rows: Vec<Vec<String>> = courses
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                or_dash(c.description.clone()),
                format_price(c.price),
                or_dash(c.professor_name()),
                schedule_summary(c),
                enrollment_summary(c),
            ]
        })
        .collect();
    table(
        &["ID", "Name", "Description", "Price", "Professor", "Schedules", "Enrollments"],
        &rows,
    )
}

pub fn professor_table(professors: &[ProfessorSummary]) -> String {
    let rows: Vec<Vec<String>> = professors
        .iter()
        .map(|p| vec![p.id.to_string(), p.full_name.clone()])
        .collect();
    table(&["ID", "Name"], &rows)
}

pub fn student_table(students: &[Student]) -> String {
    let rows: Vec<Vec<String>> = students
        .iter()
        .map(|s| vec![s.id().to_string(), s.full_name(), s.user.email.clone()])
        .collect();
    table(&["ID", "Name", "Email"], &rows)
}

/// Course header followed by its schedule and enrollment tables. The label closures
/// resolve classroom and student names that the course payload may not embed.
pub fn course_detail(
    course: &Course,
    classroom_label: impl Fn(&Schedule) -> String,
    student_label: impl Fn(&Enrollment) -> String,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} (#{})\n", course.name, course.id));
    out.push_str(&format!("Description: {}\n", or_dash(course.description.clone())));
    out.push_str(&format!("Price:       {}\n", format_price(course.price)));
    out.push_str(&format!("Professor:   {}\n", or_dash(course.professor_name())));
    out.push('\n');

    out.push_str("Schedules\n");
    if course.schedules().is_empty() {
        out.push_str("No schedules for this course.\n");
    } else {
        let rows: Vec<Vec<String>> = course
            .schedules()
            .iter()
            .map(|s| {
                vec![
                    s.id.to_string(),
                    day_name(s.day_of_week).unwrap_or("?").to_string(),
                    s.start_time.clone(),
                    s.end_time.clone(),
                    classroom_label(s),
                ]
            })
            .collect();
        out.push_str(&table(&["ID", "Day", "Start", "End", "Classroom"], &rows));
    }
    out.push('\n');

    out.push_str("Enrollments\n");
    if course.enrollments().is_empty() {
        out.push_str("No enrollments for this course.\n");
    } else {
        let grade = |g: Option<i16>| g.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string());
        let rows: Vec<Vec<String>> = course
            .enrollments()
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    student_label(e),
                    e.status.to_string(),
                    grade(e.grade1),
                    grade(e.grade2),
                    grade(e.grade3),
                    grade(e.final_grade),
                ]
            })
            .collect();
        out.push_str(&table(
            &["ID", "Student", "Status", "Grade 1", "Grade 2", "Grade 3", "Final"],
            &rows,
        ));
    }
    out
}

/// One line per field. The time-order error is reported under the end time field.
pub fn field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, message) in errors.iter() {
        let field = if field == "timeOrder" { "endTime" } else { field };
        out.push_str(&format!("  {}: {}\n", field, message));
    }
    out
}
