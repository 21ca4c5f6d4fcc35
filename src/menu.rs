//! Interactive text menu.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so a
//! session can be driven from a terminal or from an in-memory buffer.
//! Core failures are printed and the menu re-prompts; only I/O errors
//! end the session early.

use crate::config::ReportConfig;
use crate::demo;
use crate::error::{GradebookError, Result as CoreResult};
use crate::report;
use crate::roster::RosterStore;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const MENU_TEXT: &str = "\n=== STUDENT GRADE MANAGEMENT SYSTEM ===
1. Add Student
2. Add Grade
3. View Student Report
4. View All Students
5. Find Top Performers
6. View Passing Students
7. View Failing Students
8. Exit
";

/// Parse score text typed at the prompt.
///
/// Range checking is left to the roster; this only rejects text that is
/// not a number at all.
pub fn parse_score(text: &str) -> CoreResult<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| GradebookError::InvalidNumber(trimmed.to_string()))
}

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddStudent,
    AddGrade,
    StudentReport,
    AllStudents,
    TopPerformers,
    Passing,
    Failing,
    Exit,
}

impl Choice {
    /// Map the typed option to a choice. `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::AddStudent),
            "2" => Some(Choice::AddGrade),
            "3" => Some(Choice::StudentReport),
            "4" => Some(Choice::AllStudents),
            "5" => Some(Choice::TopPerformers),
            "6" => Some(Choice::Passing),
            "7" => Some(Choice::Failing),
            "8" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Interactive session over an input/output pair.
pub struct Menu<R, W> {
    input: R,
    output: W,
    settings: ReportConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu session.
    pub fn new(input: R, output: W, settings: ReportConfig) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Consume the session and return its output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask whether to run the demo first. End of input counts as "no".
    pub fn confirm_demo(&mut self) -> Result<bool> {
        let answer = self
            .prompt("Would you like to run the demo first? (y/n): ")?
            .unwrap_or_default()
            .to_lowercase();

        Ok(answer == "y" || answer == "yes")
    }

    /// Seed the demo data and print the demo reports.
    pub fn run_demo(&mut self, roster: &mut RosterStore) -> Result<()> {
        writeln!(self.output, "=== DEMO: Adding Sample Data ===")?;
        match demo::seed_demo(roster) {
            Ok(echo) => {
                for line in echo {
                    writeln!(self.output, "{}", line)?;
                }
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }

        let text = demo::demo_report(roster, &self.settings);
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Run the menu loop until Exit or end of input.
    pub fn run(&mut self, roster: &mut RosterStore) -> Result<()> {
        loop {
            self.output.write_all(MENU_TEXT.as_bytes())?;

            let Some(line) = self.prompt("\nEnter your choice (1-8): ")? else {
                debug!("Input closed, leaving menu");
                writeln!(self.output)?;
                return Ok(());
            };

            match Choice::parse(&line) {
                Some(Choice::Exit) => {
                    writeln!(
                        self.output,
                        "Thank you for using the Student Grade Management System!"
                    )?;
                    return Ok(());
                }
                Some(choice) => {
                    debug!("Menu choice: {:?}", choice);
                    if !self.handle(choice, roster)? {
                        debug!("Input closed mid-prompt, leaving menu");
                        return Ok(());
                    }
                }
                None => {
                    writeln!(
                        self.output,
                        "Invalid choice! Please enter a number between 1-8."
                    )?;
                }
            }
        }
    }

    /// Handle one non-exit choice. Returns `false` if input ran out.
    fn handle(&mut self, choice: Choice, roster: &mut RosterStore) -> Result<bool> {
        match choice {
            Choice::AddStudent => {
                let Some(id) = self.prompt("Enter Student ID: ")? else {
                    return Ok(false);
                };
                let Some(name) = self.prompt("Enter Student Name: ")? else {
                    return Ok(false);
                };

                if id.is_empty() || name.is_empty() {
                    writeln!(self.output, "Please provide both Student ID and Name!")?;
                } else {
                    match roster.add_student(&id, &name) {
                        Ok(()) => {
                            writeln!(self.output, "{}", report::student_added_message(&id, &name))?
                        }
                        Err(e) => writeln!(self.output, "{}", e)?,
                    }
                }
            }
            Choice::AddGrade => {
                let Some(id) = self.prompt("Enter Student ID: ")? else {
                    return Ok(false);
                };
                let Some(subject) = self.prompt("Enter Subject: ")? else {
                    return Ok(false);
                };
                let Some(score_text) = self.prompt("Enter Grade (0-100): ")? else {
                    return Ok(false);
                };

                match parse_score(&score_text) {
                    Err(e) => writeln!(self.output, "{}", e)?,
                    Ok(_) if id.is_empty() || subject.is_empty() => {
                        writeln!(self.output, "Please provide Student ID and Subject!")?
                    }
                    Ok(score) => match roster.add_grade(&id, &subject, score) {
                        Ok(()) => {
                            let name = roster.get(&id).map_or(id.as_str(), |r| r.name.as_str());
                            let message = report::grade_added_message(score, &subject, name);
                            writeln!(self.output, "{}", message)?
                        }
                        Err(e) => writeln!(self.output, "{}", e)?,
                    },
                }
            }
            Choice::StudentReport => {
                let Some(id) = self.prompt("Enter Student ID: ")? else {
                    return Ok(false);
                };

                if id.is_empty() {
                    writeln!(self.output, "Please provide Student ID!")?;
                } else {
                    let text = report::student_report(roster, &id);
                    self.write_report(text)?;
                }
            }
            Choice::AllStudents => {
                let text = report::all_students_table(roster, self.settings.name_width);
                self.write_report(text)?;
            }
            Choice::TopPerformers => {
                let text = report::top_performers_report(roster, self.settings.top_count);
                self.write_report(text)?;
            }
            Choice::Passing => {
                let text = report::status_report(roster, "Passing");
                self.write_report(text)?;
            }
            Choice::Failing => {
                let text = report::status_report(roster, "Failing");
                self.write_report(text)?;
            }
            Choice::Exit => {}
        }

        Ok(true)
    }

    fn write_report(&mut self, text: CoreResult<String>) -> Result<()> {
        match text {
            Ok(text) => self.output.write_all(text.as_bytes())?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;

        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}
