//! Data models for the gradebook.
//!
//! This module contains the core data structures used throughout
//! the application for representing students, grades, and summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Lowest accepted score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest accepted score.
pub const MAX_SCORE: f64 = 100.0;

/// One subject/score pair recorded for a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    /// Subject label. Not unique per student.
    pub subject: String,
    /// Score in `MIN_SCORE..=MAX_SCORE`.
    pub score: f64,
}

/// A student on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique roster key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Grades in insertion order.
    pub grades: Vec<GradeEntry>,
}

impl StudentRecord {
    /// Creates a record with no grades.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grades: Vec::new(),
        }
    }

    /// Returns true if at least one grade has been recorded.
    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }
}

/// Letter grade derived from an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// All letters, best first.
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterGrade::A => write!(f, "A"),
            LetterGrade::B => write!(f, "B"),
            LetterGrade::C => write!(f, "C"),
            LetterGrade::D => write!(f, "D"),
            LetterGrade::F => write!(f, "F"),
        }
    }
}

/// Pass/fail classification of an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Passing,
    Failing,
}

impl Status {
    /// Returns the status label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passing => "Passing",
            Status::Failing => "Failing",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passing" => Ok(Status::Passing),
            "failing" => Ok(Status::Failing),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// A graded student annotated with the derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStudent {
    pub id: String,
    pub name: String,
    pub average: f64,
    pub letter: LetterGrade,
    pub status: Status,
}

/// Snapshot of the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    /// When the summary was computed.
    pub generated_at: DateTime<Utc>,
    /// Number of students on the roster.
    pub total_students: usize,
    /// Students with at least one grade.
    pub graded_students: usize,
    /// Students with no grades.
    pub ungraded_students: usize,
    /// Graded students with a passing average.
    pub passing: usize,
    /// Graded students with a failing average.
    pub failing: usize,
    /// Number of graded students per letter.
    pub distribution: BTreeMap<LetterGrade, usize>,
    /// Mean of the student averages, if anyone is graded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_average: Option<f64>,
    /// Best student by average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<RankedStudent>,
    /// Worst student by average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest: Option<RankedStudent>,
}

/// Formats a score or average the way the reports show numbers:
/// whole values keep one decimal place (`95.0`), everything else uses
/// the shortest round-trip form (`91.5`, `86.33`).
pub fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_ordering() {
        assert!(LetterGrade::A < LetterGrade::B);
        assert!(LetterGrade::D < LetterGrade::F);
        assert_eq!(LetterGrade::ALL.len(), 5);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Passing".parse::<Status>(), Ok(Status::Passing));
        assert_eq!("FAILING".parse::<Status>(), Ok(Status::Failing));
        assert_eq!(" passing ".parse::<Status>(), Ok(Status::Passing));
        assert!("honors".parse::<Status>().is_err());
    }

    #[test]
    fn test_new_record_has_no_grades() {
        let record = StudentRecord::new("001", "Alice");
        assert_eq!(record.id, "001");
        assert_eq!(record.name, "Alice");
        assert!(!record.has_grades());
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(95.0), "95.0");
        assert_eq!(format_score(91.5), "91.5");
        assert_eq!(format_score(86.33), "86.33");
        assert_eq!(format_score(0.0), "0.0");
    }
}
