use crate::config::toml_config::CourseDefinition;
use crate::domain::model::Course;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::validate_unique;
use std::collections::HashMap;
use std::sync::Arc;

/// Courses resolved from their definitions, with prerequisites wired by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Arc<Course>>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_definitions(definitions: &[CourseDefinition]) -> Result<Self> {
        validate_unique("courses.name", definitions.iter().map(|d| &d.name))?;

        let by_name: HashMap<&str, &CourseDefinition> =
            definitions.iter().map(|d| (d.name.as_str(), d)).collect();
        let mut resolved = HashMap::new();
        let mut catalog = Self::default();

        for definition in definitions {
            let mut visiting = Vec::new();
            let course = resolve(&definition.name, &by_name, &mut resolved, &mut visiting)?;
            catalog
                .index
                .insert(definition.name.clone(), catalog.courses.len());
            catalog.courses.push(course);
        }

        tracing::debug!("Catalog resolved {} courses", catalog.courses.len());
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Course> {
        self.index.get(name).map(|&i| &*self.courses[i])
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().map(|c| &**c)
    }
}

fn resolve(
    name: &str,
    by_name: &HashMap<&str, &CourseDefinition>,
    resolved: &mut HashMap<String, Arc<Course>>,
    visiting: &mut Vec<String>,
) -> Result<Arc<Course>> {
    if let Some(course) = resolved.get(name) {
        return Ok(Arc::clone(course));
    }

    if visiting.iter().any(|v| v == name) {
        visiting.push(name.to_string());
        return Err(RegistrarError::ConfigError {
            message: format!("Prerequisite cycle: {}", visiting.join(" -> ")),
        });
    }

    let definition = by_name
        .get(name)
        .ok_or_else(|| RegistrarError::UnknownCourse {
            name: name.to_string(),
        })?;

    visiting.push(name.to_string());
    let mut course = Course::new(definition.name.clone(), definition.offered);

    if let Some(prerequisite) = &definition.prerequisite {
        if !by_name.contains_key(prerequisite.as_str()) {
            return Err(RegistrarError::InvalidConfigValueError {
                field: "courses.prerequisite".to_string(),
                value: prerequisite.clone(),
                reason: format!("{} requires a course that is not defined", definition.name),
            });
        }
        let prerequisite = resolve(prerequisite, by_name, resolved, visiting)?;
        course.set_shared_prerequisite(prerequisite);
    }
    visiting.pop();

    let course = Arc::new(course);
    resolved.insert(name.to_string(), Arc::clone(&course));
    Ok(course)
}
