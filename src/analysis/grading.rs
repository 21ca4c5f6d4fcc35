//! Classification of averages into letter grades and pass/fail status.

use crate::models::{LetterGrade, Status};

/// Lowest passing average.
pub const PASSING_THRESHOLD: f64 = 60.0;

/// Converts an average into a letter grade.
///
/// | Range  | Grade |
/// |--------|-------|
/// | >= 90  | A     |
/// | >= 80  | B     |
/// | >= 70  | C     |
/// | >= 60  | D     |
/// | < 60   | F     |
pub fn letter_grade(average: f64) -> LetterGrade {
    match average {
        a if a >= 90.0 => LetterGrade::A,
        a if a >= 80.0 => LetterGrade::B,
        a if a >= 70.0 => LetterGrade::C,
        a if a >= PASSING_THRESHOLD => LetterGrade::D,
        _ => LetterGrade::F,
    }
}

/// Passing iff the average is at least [`PASSING_THRESHOLD`].
pub fn status(average: f64) -> Status {
    if average >= PASSING_THRESHOLD {
        Status::Passing
    } else {
        Status::Failing
    }
}

/// Rounds to two decimal places, ties to even.
///
/// Rounds the stored binary value itself: `2.675` is stored just below
/// the tie and becomes `2.67`, while the exact tie `0.125` becomes `0.12`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
