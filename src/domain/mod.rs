// Domain layer: courses, students and the enrollment rules between them.

pub mod error;
pub mod model;
pub mod ports;
pub mod student;
