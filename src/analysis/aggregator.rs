//! Grade aggregation, ranking and filtering.
//!
//! This module computes per-student averages and the derived views
//! (top performers, status lists, class summary) from a roster snapshot.

use super::grading::{letter_grade, round2, status};
use crate::models::{ClassSummary, LetterGrade, RankedStudent, Status, StudentRecord};
use crate::roster::RosterStore;
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::debug;

/// Number of students shown by the top performers view unless configured.
pub const DEFAULT_TOP_COUNT: usize = 5;

/// Average of a student's grades, rounded to two decimals.
///
/// `None` if the student is unknown or has no grades. Every entry counts
/// once, whatever its subject.
pub fn average(roster: &RosterStore, id: &str) -> Option<f64> {
    roster.get(id).and_then(record_average)
}

/// Average of a single record. `None` when it has no grades.
pub fn record_average(record: &StudentRecord) -> Option<f64> {
    if !record.has_grades() {
        return None;
    }

    let total: f64 = record.grades.iter().map(|g| g.score).sum();
    Some(round2(total / record.grades.len() as f64))
}

/// Annotate a record with its average, letter and status.
pub fn rank_record(record: &StudentRecord) -> Option<RankedStudent> {
    record_average(record).map(|average| RankedStudent {
        id: record.id.clone(),
        name: record.name.clone(),
        average,
        letter: letter_grade(average),
        status: status(average),
    })
}

/// Every graded student, annotated, in roster order.
pub fn ranked_students(roster: &RosterStore) -> Vec<RankedStudent> {
    roster.all().filter_map(rank_record).collect()
}

/// Sort students by average (highest first). Ties keep roster order.
pub fn sort_by_average(students: &mut [RankedStudent]) {
    students.sort_by(|a, b| b.average.total_cmp(&a.average));
}

/// The `n` graded students with the highest averages.
pub fn top_performers(roster: &RosterStore, n: usize) -> Vec<RankedStudent> {
    let mut students = ranked_students(roster);
    sort_by_average(&mut students);
    students.truncate(n);
    students
}

/// Graded students whose status matches `filter`, ignoring case.
///
/// Keeps roster order. A filter naming no known status matches nobody.
pub fn by_status(roster: &RosterStore, filter: &str) -> Vec<RankedStudent> {
    let wanted: Status = match filter.parse() {
        Ok(status) => status,
        Err(e) => {
            debug!("Status filter matches nobody: {}", e);
            return Vec::new();
        }
    };

    ranked_students(roster)
        .into_iter()
        .filter(|s| s.status == wanted)
        .collect()
}

/// Compute the class summary for the current roster.
pub fn class_summary(roster: &RosterStore) -> ClassSummary {
    let mut ranked = ranked_students(roster);

    let mut distribution: BTreeMap<LetterGrade, usize> =
        LetterGrade::ALL.iter().map(|&letter| (letter, 0)).collect();
    for student in &ranked {
        *distribution.entry(student.letter).or_default() += 1;
    }

    let passing = ranked
        .iter()
        .filter(|s| s.status == Status::Passing)
        .count();

    let class_average = if ranked.is_empty() {
        None
    } else {
        let total: f64 = ranked.iter().map(|s| s.average).sum();
        Some(round2(total / ranked.len() as f64))
    };

    sort_by_average(&mut ranked);

    ClassSummary {
        generated_at: Utc::now(),
        total_students: roster.len(),
        graded_students: ranked.len(),
        ungraded_students: roster.len() - ranked.len(),
        passing,
        failing: ranked.len() - passing,
        distribution,
        class_average,
        highest: ranked.first().cloned(),
        lowest: ranked.last().cloned(),
    }
}
