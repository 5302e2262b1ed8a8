#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;
pub mod seed;

pub use error::Error;
pub use model::{Course, CourseError, Lesson, LessonId, Module, ModuleId};
pub use progress::{CourseProgress, compute_progress};
pub use seed::seed_course;
