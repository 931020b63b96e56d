//! Graduation reminders built from comma-separated student lists.

use std::str::FromStr;

use csv::{ReaderBuilder, Trim};

use crate::error::RosterError;

/// Points gained per outstanding assignment once it is submitted.
pub const POINTS_PER_ASSIGNMENT: i64 = 2;

/// Grade reached after submitting every missing assignment.
///
/// `None` when the result does not fit in an `i64`.
pub fn potential_grade(current_grade: i64, missing_assignments: i64) -> Option<i64> {
    POINTS_PER_ASSIGNMENT
        .checked_mul(missing_assignments)?
        .checked_add(current_grade)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    name: String,
    missing_assignments: i64,
    current_grade: i64,
    potential_grade: i64,
}

impl StudentRecord {
    pub fn new(
        name: impl Into<String>,
        missing_assignments: i64,
        current_grade: i64,
    ) -> Result<Self, RosterError> {
        let name = name.into();
        let potential = potential_grade(current_grade, missing_assignments).ok_or_else(|| {
            RosterError::GradeOverflow {
                name: name.clone(),
                assignments: missing_assignments,
                grade: current_grade,
            }
        })?;
        Ok(Self {
            name,
            missing_assignments,
            current_grade,
            potential_grade: potential,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_grade(&self) -> i64 {
        self.current_grade
    }

    pub fn potential_grade(&self) -> i64 {
        self.potential_grade
    }

    pub fn reminder(&self) -> String {
        format!(
            "Hi {},\n\nThis is a reminder that you have {} assignments left to \
             submit before you can graduate. You're current grade is {} and can increase \
             to {} if you submit all assignments before the due date.\n\n",
            self.name, self.missing_assignments, self.current_grade, self.potential_grade
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    /// Zip three comma-separated lists into student records.
    ///
    /// All three lists must have the same number of entries, and every
    /// potential grade must fit in an `i64`.
    pub fn from_lists(names: &str, assignments: &str, grades: &str) -> Result<Self, RosterError> {
        let names = split_list(names)?;
        let assignments = split_list(assignments)?;
        let grades = split_list(grades)?;

        if names.len() != assignments.len() || names.len() != grades.len() {
            return Err(RosterError::LengthMismatch {
                names: names.len(),
                assignments: assignments.len(),
                grades: grades.len(),
            });
        }

        let students = names
            .into_iter()
            .zip(assignments)
            .zip(grades)
            .map(|((name, assignment), grade)| {
                StudentRecord::new(
                    name,
                    parse_whole(&assignment, "assignments")?,
                    parse_whole(&grade, "grade")?,
                )
            })
            .collect::<Result<Vec<_>, RosterError>>()?;

        log::debug!("Parsed {} student records", students.len());
        Ok(Self { students })
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

fn split_list(input: &str) -> Result<Vec<String>, RosterError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

fn parse_whole(value: &str, field: &'static str) -> Result<i64, RosterError> {
    i64::from_str(value).map_err(|_| RosterError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
