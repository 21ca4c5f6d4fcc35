//! Text report generation.
//!
//! Every function builds and returns a `String`; printing is left to the
//! caller so the same blocks serve the menu, the demo and the tests.

use crate::analysis::{average, by_status, letter_grade, rank_record, status, top_performers};
use crate::error::{GradebookError, Result};
use crate::models::{format_score, ClassSummary, RankedStudent};
use crate::roster::RosterStore;

/// Default width of the name column in the summary table.
pub const DEFAULT_NAME_WIDTH: usize = 15;

const REPORT_RULE_WIDTH: usize = 25;

/// Generate the detailed report for one student.
pub fn student_report(roster: &RosterStore, id: &str) -> Result<String> {
    let record = roster
        .get(id)
        .ok_or_else(|| GradebookError::NotFound(id.to_string()))?;

    let mut output = String::new();

    output.push_str("\n=== STUDENT REPORT ===\n");
    output.push_str(&format!("Student ID: {}\n", record.id));
    output.push_str(&format!("Name: {}\n", record.name));

    match average(roster, id) {
        None => output.push_str("No grades recorded yet.\n"),
        Some(avg) => {
            output.push_str("\nGrades:\n");
            for grade in &record.grades {
                output.push_str(&format!(
                    "  {}: {}\n",
                    grade.subject,
                    format_score(grade.score)
                ));
            }

            output.push_str(&format!("\nAverage: {}\n", format_score(avg)));
            output.push_str(&format!("Letter Grade: {}\n", letter_grade(avg)));
            output.push_str(&format!("Status: {}\n", status(avg)));
        }
    }

    output.push_str(&"=".repeat(REPORT_RULE_WIDTH));
    output.push('\n');

    Ok(output)
}

/// Generate the fixed-width table of all students.
///
/// Students without grades show `N/A` for average, grade and status.
pub fn all_students_table(roster: &RosterStore, name_width: usize) -> Result<String> {
    if roster.is_empty() {
        return Err(no_students());
    }

    // ID(5) Name(w) Avg(6) Grade(5) Status(10), single-space separated.
    let rule_width = 5 + name_width + 6 + 5 + 10 + 4;

    let mut output = String::new();

    output.push_str("\n=== ALL STUDENTS SUMMARY ===\n");
    output.push_str(&format!(
        "{:<5} {:<nw$} {:<6} {:<5} {:<10}\n",
        "ID",
        "Name",
        "Avg",
        "Grade",
        "Status",
        nw = name_width
    ));
    output.push_str(&"-".repeat(rule_width));
    output.push('\n');

    for record in roster.all() {
        let (avg, letter, status) = match rank_record(record) {
            Some(ranked) => (
                format_score(ranked.average),
                ranked.letter.to_string(),
                ranked.status.to_string(),
            ),
            None => ("N/A".to_string(), "N/A".to_string(), "N/A".to_string()),
        };

        output.push_str(&format!(
            "{:<5} {:<nw$} {:<6} {:<5} {:<10}\n",
            record.id,
            record.name,
            avg,
            letter,
            status,
            nw = name_width
        ));
    }

    output.push_str(&"=".repeat(rule_width));
    output.push('\n');

    Ok(output)
}

/// Generate the ranked top performers block for `n` students.
pub fn top_performers_report(roster: &RosterStore, n: usize) -> Result<String> {
    if roster.is_empty() {
        return Err(no_students());
    }

    let top = top_performers(roster, n);
    if top.is_empty() {
        return Err(GradebookError::NoData(
            "No students with grades found.".to_string(),
        ));
    }

    Ok(top_performers_section(&top))
}

/// Render already-ranked students as `rank. name (ID: id) - average (letter)`.
pub fn top_performers_section(students: &[RankedStudent]) -> String {
    let mut section = String::new();

    section.push_str("\n=== TOP PERFORMERS ===\n");
    for (i, student) in students.iter().enumerate() {
        section.push_str(&format!("{}. {}\n", i + 1, student_line(student)));
    }

    section
}

/// Generate the list of students whose status matches `filter`.
pub fn status_report(roster: &RosterStore, filter: &str) -> Result<String> {
    if roster.is_empty() {
        return Err(no_students());
    }

    let students = by_status(roster, filter);
    if students.is_empty() {
        return Err(GradebookError::NoData(format!(
            "No {} students found.",
            filter.to_lowercase()
        )));
    }

    Ok(status_section(filter, &students))
}

/// Render a status list, one `name (ID: id) - average (letter)` per line.
pub fn status_section(filter: &str, students: &[RankedStudent]) -> String {
    let mut section = String::new();

    section.push_str(&format!("\n=== {} STUDENTS ===\n", filter.to_uppercase()));
    for student in students {
        section.push_str(&student_line(student));
        section.push('\n');
    }

    section
}

/// Render the class summary as text.
pub fn class_summary_section(summary: &ClassSummary) -> String {
    let mut section = String::new();

    section.push_str("\n=== CLASS SUMMARY ===\n");
    section.push_str(&format!(
        "Students: {} ({} graded, {} without grades)\n",
        summary.total_students, summary.graded_students, summary.ungraded_students
    ));

    match summary.class_average {
        Some(avg) => section.push_str(&format!("Class Average: {}\n", format_score(avg))),
        None => section.push_str("Class Average: N/A\n"),
    }

    section.push_str(&format!(
        "Passing: {} | Failing: {}\n",
        summary.passing, summary.failing
    ));

    let distribution: Vec<String> = summary
        .distribution
        .iter()
        .map(|(letter, count)| format!("{}: {}", letter, count))
        .collect();
    section.push_str(&format!("Distribution: {}\n", distribution.join(", ")));

    if let Some(ref best) = summary.highest {
        section.push_str(&format!("Highest: {}\n", student_line(best)));
    }
    if let Some(ref worst) = summary.lowest {
        section.push_str(&format!("Lowest: {}\n", student_line(worst)));
    }

    section
}

/// Generate a JSON class summary.
pub fn generate_json_summary(summary: &ClassSummary) -> anyhow::Result<String> {
    serde_json::to_string_pretty(summary).map_err(Into::into)
}

/// Confirmation printed after a student is added.
pub fn student_added_message(id: &str, name: &str) -> String {
    format!("Student {} added successfully with ID: {}", name, id)
}

/// Confirmation printed after a grade is recorded.
pub fn grade_added_message(score: f64, subject: &str, name: &str) -> String {
    format!(
        "Grade {} added for {} to student {}",
        format_score(score),
        subject,
        name
    )
}

fn student_line(student: &RankedStudent) -> String {
    format!(
        "{} (ID: {}) - {} ({})",
        student.name,
        student.id,
        format_score(student.average),
        student.letter
    )
}

fn no_students() -> GradebookError {
    GradebookError::NoData("No students in the system.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::class_summary;

    fn create_test_roster() -> RosterStore {
        let mut roster = RosterStore::new();
        roster.add_student("001", "Alice").unwrap();
        roster.add_student("002", "Bob").unwrap();
        roster.add_student("003", "Carol").unwrap();
        roster.add_grade("001", "Math", 95.0).unwrap();
        roster.add_grade("001", "Science", 88.0).unwrap();
        roster.add_grade("002", "Math", 50.0).unwrap();
        roster
    }

    #[test]
    fn test_student_report_with_grades() {
        let roster = create_test_roster();
        let report = student_report(&roster, "001").unwrap();

        assert!(report.contains("=== STUDENT REPORT ==="));
        assert!(report.contains("Student ID: 001"));
        assert!(report.contains("Name: Alice"));
        assert!(report.contains("  Math: 95.0\n  Science: 88.0\n"));
        assert!(report.contains("Average: 91.5"));
        assert!(report.contains("Letter Grade: A"));
        assert!(report.contains("Status: Passing"));
        assert!(report.ends_with(&format!("{}\n", "=".repeat(25))));
    }

    #[test]
    fn test_student_report_without_grades() {
        let roster = create_test_roster();
        let report = student_report(&roster, "003").unwrap();

        assert!(report.contains("No grades recorded yet."));
        assert!(!report.contains("Average:"));
    }

    #[test]
    fn test_student_report_unknown_id() {
        let roster = create_test_roster();
        assert_eq!(
            student_report(&roster, "999").unwrap_err(),
            GradebookError::NotFound("999".to_string())
        );
    }

    #[test]
    fn test_all_students_table() {
        let roster = create_test_roster();
        let table = all_students_table(&roster, DEFAULT_NAME_WIDTH).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], "=== ALL STUDENTS SUMMARY ===");
        assert_eq!(lines[2], "ID    Name            Avg    Grade Status    ");
        assert_eq!(lines[3], "-".repeat(45));
        assert_eq!(lines[4], "001   Alice           91.5   A     Passing   ");
        assert_eq!(lines[5], "002   Bob             50.0   F     Failing   ");
        assert_eq!(lines[6], "003   Carol           N/A    N/A   N/A       ");
        assert_eq!(lines[7], "=".repeat(45));
    }

    #[test]
    fn test_all_students_table_empty() {
        let err = all_students_table(&RosterStore::new(), DEFAULT_NAME_WIDTH).unwrap_err();
        assert!(matches!(err, GradebookError::NoData(_)));
    }

    #[test]
    fn test_top_performers_report() {
        let roster = create_test_roster();
        let report = top_performers_report(&roster, 5).unwrap();

        assert!(report.contains("=== TOP PERFORMERS ==="));
        assert!(report.contains("1. Alice (ID: 001) - 91.5 (A)\n2. Bob (ID: 002) - 50.0 (F)\n"));
        assert!(!report.contains("Carol"));
    }

    #[test]
    fn test_top_performers_report_without_grades() {
        let mut roster = RosterStore::new();
        roster.add_student("001", "Alice").unwrap();

        let err = top_performers_report(&roster, 5).unwrap_err();
        assert_eq!(err.to_string(), "No students with grades found.");
    }

    #[test]
    fn test_status_report() {
        let roster = create_test_roster();

        let failing = status_report(&roster, "Failing").unwrap();
        assert!(failing.contains("=== FAILING STUDENTS ==="));
        assert!(failing.contains("Bob (ID: 002) - 50.0 (F)"));
        assert!(!failing.contains("Alice"));

        let mut passing_only = RosterStore::new();
        passing_only.add_student("001", "Alice").unwrap();
        passing_only.add_grade("001", "Math", 75.0).unwrap();
        let err = status_report(&passing_only, "Failing").unwrap_err();
        assert_eq!(err.to_string(), "No failing students found.");
    }

    #[test]
    fn test_class_summary_section() {
        let roster = create_test_roster();
        let section = class_summary_section(&class_summary(&roster));

        assert!(section.contains("Students: 3 (2 graded, 1 without grades)"));
        assert!(section.contains("Class Average: 70.75"));
        assert!(section.contains("Passing: 1 | Failing: 1"));
        assert!(section.contains("Distribution: A: 1, B: 0, C: 0, D: 0, F: 1"));
        assert!(section.contains("Highest: Alice (ID: 001) - 91.5 (A)"));
    }

    #[test]
    fn test_generate_json_summary() {
        let roster = create_test_roster();
        let json = generate_json_summary(&class_summary(&roster)).unwrap();

        assert!(json.contains("\"total_students\": 3"));
        assert!(json.contains("\"class_average\": 70.75"));
        assert!(json.contains("\"distribution\""));
        assert!(json.contains("\"highest\""));
    }
}
