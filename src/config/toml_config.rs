use crate::core::registrar::EnrollmentRequest;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A registration script: a catalog, the students, and the requests to replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    pub registrar: Option<TermConfig>,
    #[serde(default)]
    pub courses: Vec<CourseDefinition>,
    #[serde(default)]
    pub students: Vec<StudentDefinition>,
    #[serde(default)]
    pub requests: Vec<EnrollmentRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDefinition {
    pub name: String,
    #[serde(default = "default_offered")]
    pub offered: bool,
    pub prerequisite: Option<String>,
}

fn default_offered() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDefinition {
    pub id: i32,
    pub name: String,
}

impl RegistrarConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistrarError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(RegistrarError::TomlError)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistrarError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn term_name(&self) -> &str {
        self.registrar
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("unnamed term")
    }

    pub fn validate_config(&self) -> Result<()> {
        let term = validate_required_field("registrar", &self.registrar)?;
        validate_non_empty_string("registrar.name", &term.name)?;

        for course in &self.courses {
            validate_non_empty_string("courses.name", &course.name)?;
            if let Some(prerequisite) = &course.prerequisite {
                validate_non_empty_string("courses.prerequisite", prerequisite)?;
            }
        }
        validate_unique("courses.name", self.courses.iter().map(|c| &c.name))?;

        for student in &self.students {
            validate_non_empty_string("students.name", &student.name)?;
        }
        validate_unique("students.id", self.students.iter().map(|s| &s.id))?;

        for request in &self.requests {
            validate_non_empty_string("requests.course", &request.course)?;
        }

        Ok(())
    }
}

impl Validate for RegistrarConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registrar::Action;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCRIPT: &str = r#"
[registrar]
name = "Fall term"

[[courses]]
name = "CS101"

[[courses]]
name = "CS201"
prerequisite = "CS101"

[[courses]]
name = "ART100"
offered = false

[[students]]
id = 1
name = "Ada"

[[requests]]
student = 1
action = "add"
course = "CS101"

[[requests]]
student = 1
action = "drop"
course = "CS101"
"#;

    #[test]
    fn test_parse_registration_script() {
        let config = RegistrarConfig::from_toml_str(SCRIPT).unwrap();

        assert_eq!(config.term_name(), "Fall term");
        assert_eq!(config.courses.len(), 3);
        assert!(config.courses[0].offered);
        assert!(!config.courses[2].offered);
        assert_eq!(config.courses[1].prerequisite.as_deref(), Some("CS101"));
        assert_eq!(config.requests[1].action, Action::Drop);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SCRIPT.as_bytes()).unwrap();

        let config = RegistrarConfig::from_file(file.path()).unwrap();
        assert_eq!(config.students[0].name, "Ada");
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("COURSE_REGISTRAR_TEST_TERM", "Spring term");
        let content = r#"
[registrar]
name = "${COURSE_REGISTRAR_TEST_TERM}"
"#;
        let config = RegistrarConfig::from_toml_str(content).unwrap();
        assert_eq!(config.term_name(), "Spring term");

        let untouched = RegistrarConfig::from_toml_str(
            "[registrar]\nname = \"${COURSE_REGISTRAR_TEST_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(untouched.term_name(), "${COURSE_REGISTRAR_TEST_UNSET_VAR}");
    }

    #[test]
    fn test_validation_rejects_duplicates_and_missing_term() {
        let duplicate_ids = r#"
[registrar]
name = "Fall"

[[students]]
id = 1
name = "Ada"

[[students]]
id = 1
name = "Grace"
"#;
        let config = RegistrarConfig::from_toml_str(duplicate_ids).unwrap();
        assert!(config.validate().is_err());

        let no_term = RegistrarConfig::from_toml_str("").unwrap();
        assert!(matches!(
            no_term.validate(),
            Err(RegistrarError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_any_integer_student_id_is_accepted() {
        let content = r#"
[registrar]
name = "Fall"

[[students]]
id = 0
name = "Zero"

[[students]]
id = -3
name = "Negative"
"#;
        let config = RegistrarConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.students[1].id, -3);
    }

    #[test]
    fn test_invalid_toml() {
        let result = RegistrarConfig::from_toml_str("[[courses]\nname = ");
        assert!(matches!(result, Err(RegistrarError::TomlError(_))));
    }
}
