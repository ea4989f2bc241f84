use thiserror::Error;

/// Why an enrollment was refused.
///
/// `Prerequisite` wraps a [`PrerequisiteError`], so code that handles a
/// `RegistrationError` handles prerequisite failures too.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{}", .message.as_deref().unwrap_or("Registration failed"))]
    NotOffered { message: Option<String> },

    #[error(transparent)]
    Prerequisite(#[from] PrerequisiteError),
}

impl RegistrationError {
    pub fn not_offered() -> Self {
        Self::NotOffered {
            message: Some("Course not offered".to_string()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotOffered { message } => message.as_deref(),
            Self::Prerequisite(e) => e.message(),
        }
    }

    pub fn is_prerequisite(&self) -> bool {
        matches!(self, Self::Prerequisite(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or("Missing prerequisite"))]
pub struct PrerequisiteError {
    message: Option<String>,
}

impl PrerequisiteError {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }

    pub fn missing(course: &str) -> Self {
        Self::new(Some(format!("Missing prerequisite {}", course)))
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
