pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::RegistrarConfig;
pub use core::catalog::Catalog;
pub use core::registrar::{Action, EnrollmentRequest, Outcome, Registrar, RunSummary};
pub use domain::error::{PrerequisiteError, RegistrationError};
pub use domain::model::Course;
pub use domain::ports::{by_id, Student};
pub use domain::student::RegisteredStudent;
pub use utils::error::{RegistrarError, Result};
