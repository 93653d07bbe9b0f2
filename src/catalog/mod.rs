pub mod course;
pub mod registry;

pub use course::{Course, CourseCode};
pub use registry::CourseCatalog;
