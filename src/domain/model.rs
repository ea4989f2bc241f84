use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A course a student can register for.
///
/// Identity is the name alone: two courses with the same name are equal and
/// hash the same even when their offered flag or prerequisite differ. Lookups
/// in a student's course list (prerequisite checks, drops) rely on this.
#[derive(Debug, Clone)]
pub struct Course {
    name: String,
    offered: bool,
    prerequisite: Option<Arc<Course>>,
}

impl Course {
    pub fn new(name: impl Into<String>, offered: bool) -> Self {
        Self {
            name: name.into(),
            offered,
            prerequisite: None,
        }
    }

    pub fn with_prerequisite(name: impl Into<String>, prerequisite: Course, offered: bool) -> Self {
        Self {
            name: name.into(),
            offered,
            prerequisite: Some(Arc::new(prerequisite)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_offered(&self) -> bool {
        self.offered
    }

    pub fn set_offered(&mut self, offered: bool) {
        self.offered = offered;
    }

    pub fn prerequisite(&self) -> Option<&Course> {
        self.prerequisite.as_deref()
    }

    /// Replaces the prerequisite; `None` clears it.
    pub fn set_prerequisite(&mut self, prerequisite: Option<Course>) {
        self.prerequisite = prerequisite.map(Arc::new);
    }

    // Shares an already resolved prerequisite without cloning the chain.
    pub(crate) fn set_shared_prerequisite(&mut self, prerequisite: Arc<Course>) {
        self.prerequisite = Some(prerequisite);
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
