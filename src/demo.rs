//! Demo data seeding.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::report;
use crate::roster::RosterStore;
use tracing::info;

const DEMO_STUDENTS: &[(&str, &str)] = &[
    ("001", "Alice Johnson"),
    ("002", "Bob Smith"),
    ("003", "Carol Davis"),
];

const DEMO_GRADES: &[(&str, &str, f64)] = &[
    ("001", "Math", 95.0),
    ("001", "Science", 88.0),
    ("001", "English", 92.0),
    ("002", "Math", 78.0),
    ("002", "Science", 82.0),
    ("002", "English", 75.0),
    ("003", "Math", 55.0),
    ("003", "Science", 58.0),
];

/// Add the sample students and grades to `roster`.
///
/// Returns one confirmation line per student and grade added, in order.
/// Fails if one of the sample ids is already taken.
pub fn seed_demo(roster: &mut RosterStore) -> Result<Vec<String>> {
    let mut echo = Vec::with_capacity(DEMO_STUDENTS.len() + DEMO_GRADES.len());

    for (id, name) in DEMO_STUDENTS {
        roster.add_student(id, name)?;
        echo.push(report::student_added_message(id, name));
    }
    for (id, subject, score) in DEMO_GRADES {
        roster.add_grade(id, subject, *score)?;
        let name = roster.get(id).map_or(*id, |r| r.name.as_str());
        echo.push(report::grade_added_message(*score, subject, name));
    }

    info!(
        "Seeded {} demo students with {} grades",
        DEMO_STUDENTS.len(),
        DEMO_GRADES.len()
    );
    Ok(echo)
}

/// Render the reports shown after seeding: the class table, top
/// performers, then the passing and failing lists.
pub fn demo_report(roster: &RosterStore, settings: &ReportConfig) -> String {
    let sections = [
        report::all_students_table(roster, settings.name_width),
        report::top_performers_report(roster, settings.top_count),
        report::status_report(roster, "Passing"),
        report::status_report(roster, "Failing"),
    ];

    let mut output = String::from("\n=== DEMO: Displaying Reports ===\n");
    for section in sections {
        match section {
            Ok(text) => output.push_str(&text),
            Err(e) => {
                output.push_str(&e.to_string());
                output.push('\n');
            }
        }
    }

    output
}
