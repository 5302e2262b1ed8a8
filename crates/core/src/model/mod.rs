mod course;
mod ids;
mod lesson;

pub use course::{Course, CourseError, Module};
pub use ids::{LessonId, ModuleId, ParseIdError};
pub use lesson::Lesson;
