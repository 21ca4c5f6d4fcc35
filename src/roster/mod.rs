//! In-memory roster of students and their grades.
//!
//! Records live in a `Vec` so iteration follows insertion order; a
//! `HashMap` indexes ids to positions for lookup.

use crate::error::{GradebookError, Result};
use crate::models::{GradeEntry, StudentRecord, MAX_SCORE, MIN_SCORE};
use std::collections::HashMap;
use tracing::{debug, warn};

/// The roster store. Created empty; lives for the whole session.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
    index: HashMap<String, usize>,
}

impl RosterStore {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student with an empty grade list.
    ///
    /// Fails with `DuplicateId` if the id is already present; the existing
    /// record is left untouched.
    pub fn add_student(&mut self, id: &str, name: &str) -> Result<()> {
        if self.index.contains_key(id) {
            warn!("Rejected duplicate student id {}", id);
            return Err(GradebookError::DuplicateId(id.to_string()));
        }

        self.index.insert(id.to_string(), self.records.len());
        self.records.push(StudentRecord::new(id, name));
        debug!("Added student {} ({})", id, name);

        Ok(())
    }

    /// Append a grade to a student's record.
    ///
    /// The id is checked before the score. On failure the grade list is
    /// unchanged.
    pub fn add_grade(&mut self, id: &str, subject: &str, score: f64) -> Result<()> {
        let Some(&position) = self.index.get(id) else {
            warn!("Rejected grade for unknown student {}", id);
            return Err(GradebookError::NotFound(id.to_string()));
        };

        // NaN fails the range check too.
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            warn!("Rejected out-of-range score {} for student {}", score, id);
            return Err(GradebookError::InvalidRange(score));
        }

        let record = &mut self.records[position];
        record.grades.push(GradeEntry {
            subject: subject.to_string(),
            score,
        });
        debug!(
            "Added grade {} for {} to student {} ({} grades)",
            score,
            subject,
            id,
            record.grades.len()
        );

        Ok(())
    }

    /// Look up a student by id.
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Iterate over all students in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Number of students on the roster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no student has been added.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
