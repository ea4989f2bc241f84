use crate::config::toml_config::RegistrarConfig;
use crate::core::catalog::Catalog;
use crate::domain::error::RegistrationError;
use crate::domain::ports::{by_id, Student};
use crate::domain::student::RegisteredStudent;
use crate::utils::error::{RegistrarError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub student: i32,
    pub action: Action,
    pub course: String,
}

impl EnrollmentRequest {
    pub fn add(student: i32, course: impl Into<String>) -> Self {
        Self {
            student,
            action: Action::Add,
            course: course.into(),
        }
    }

    pub fn drop(student: i32, course: impl Into<String>) -> Self {
        Self {
            student,
            action: Action::Drop,
            course: course.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Enrolled,
    Dropped,
    /// Drop of a course the student was not taking.
    NotEnrolled,
    Rejected(RegistrationError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enrolled => f.write_str("enrolled"),
            Self::Dropped => f.write_str("dropped"),
            Self::NotEnrolled => f.write_str("not enrolled"),
            Self::Rejected(e) => write!(f, "rejected: {}", e),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestOutcome {
    pub request: EnrollmentRequest,
    pub outcome: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub dropped: usize,
    pub outcomes: Vec<RequestOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: i32,
    pub name: String,
    pub courses: Vec<String>,
}

/// Holds the students of one term and applies enrollment requests to them.
#[derive(Debug)]
pub struct Registrar {
    catalog: Catalog,
    students: HashMap<i32, RegisteredStudent>,
}

impl Registrar {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            students: HashMap::new(),
        }
    }

    pub fn from_config(config: &RegistrarConfig) -> Result<Self> {
        let catalog = Catalog::from_definitions(&config.courses)?;
        let mut registrar = Self::new(catalog);
        for student in &config.students {
            registrar.enroll_student(student.id, &student.name)?;
        }
        tracing::info!(
            "Loaded term '{}': {} courses, {} students",
            config.term_name(),
            registrar.catalog.len(),
            registrar.students.len()
        );
        Ok(registrar)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn enroll_student(&mut self, id: i32, name: &str) -> Result<()> {
        if self.students.contains_key(&id) {
            return Err(RegistrarError::DuplicateStudent { id });
        }
        self.students.insert(id, RegisteredStudent::new(id, name));
        tracing::debug!("Registered student {} ({})", id, name);
        Ok(())
    }

    pub fn student(&self, id: i32) -> Option<&RegisteredStudent> {
        self.students.get(&id)
    }

    /// All students, ordered by id.
    pub fn students(&self) -> Vec<&RegisteredStudent> {
        let mut students: Vec<&RegisteredStudent> = self.students.values().collect();
        students.sort_by(|a, b| by_id(*a, *b));
        students
    }

    /// Applies one request. Refused enrollments come back as
    /// [`Outcome::Rejected`]; unknown students or courses are errors.
    pub fn apply(&mut self, request: &EnrollmentRequest) -> Result<Outcome> {
        let course = self
            .catalog
            .get(&request.course)
            .ok_or_else(|| RegistrarError::UnknownCourse {
                name: request.course.clone(),
            })?;
        let student = self
            .students
            .get_mut(&request.student)
            .ok_or(RegistrarError::UnknownStudent {
                id: request.student,
            })?;

        let outcome = match request.action {
            Action::Add => match student.add_course(course.clone()) {
                Ok(()) => Outcome::Enrolled,
                Err(e) => Outcome::Rejected(e),
            },
            Action::Drop => {
                let was_enrolled = student.is_enrolled_in(course);
                student.drop_course(course);
                if was_enrolled {
                    Outcome::Dropped
                } else {
                    Outcome::NotEnrolled
                }
            }
        };

        match &outcome {
            Outcome::Rejected(e) => tracing::warn!(
                "Student {} could not add {}: {}",
                student.id(),
                course,
                e
            ),
            other => tracing::info!("Student {}: {} {}", student.id(), other, course),
        }

        Ok(outcome)
    }

    /// Applies every request in order. Rejections are recorded and the run
    /// continues; an unknown student or course stops it.
    pub fn run(&mut self, requests: &[EnrollmentRequest]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for request in requests {
            let outcome = self.apply(request)?;
            match outcome {
                Outcome::Enrolled => summary.accepted += 1,
                Outcome::Dropped => summary.dropped += 1,
                Outcome::Rejected(_) => summary.rejected += 1,
                Outcome::NotEnrolled => {}
            }
            summary.outcomes.push(RequestOutcome {
                request: request.clone(),
                outcome: outcome.to_string(),
            });
        }

        tracing::info!(
            "Run complete: {} accepted, {} rejected, {} dropped",
            summary.accepted,
            summary.rejected,
            summary.dropped
        );
        Ok(summary)
    }

    pub fn roster(&self) -> Vec<RosterEntry> {
        self.students()
            .into_iter()
            .map(|s| RosterEntry {
                id: s.id(),
                name: s.name().to_string(),
                courses: s.courses().iter().map(|c| c.name().to_string()).collect(),
            })
            .collect()
    }
}
