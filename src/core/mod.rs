pub mod catalog;
pub mod registrar;

pub use crate::domain::model::Course;
pub use crate::domain::ports::Student;
pub use crate::utils::error::Result;
