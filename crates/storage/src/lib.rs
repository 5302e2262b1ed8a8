#![forbid(unsafe_code)]

pub mod json_file;
pub mod repository;

pub use json_file::{JsonFileRepository, STORAGE_FILE_NAME};
pub use repository::{
    CourseRecord, InMemoryRepository, LessonRecord, ModuleRecord, ProgressRepository, Storage,
    StorageError,
};
