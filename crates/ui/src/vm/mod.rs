mod course_vm;

pub use course_vm::{CourseVm, LessonVm, ModuleVm, ProgressVm, map_course};
