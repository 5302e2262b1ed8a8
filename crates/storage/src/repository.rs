use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use course_core::model::{Course, CourseError, Lesson, LessonId, Module, ModuleId};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("persisted course is invalid: {0}")]
    InvalidCourse(#[from] CourseError),

    #[error("backend error: {0}")]
    Backend(String),
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Persisted shape of a course.
///
/// These records mirror the on-disk JSON layout
/// `{title, modules: [{id, title, lessons: [{id, title, description, completed}]}]}`
/// so repositories can serialize/deserialize without leaking storage concerns
/// into the domain layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    pub modules: Vec<ModuleRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub id: ModuleId,
    pub title: String,
    pub lessons: Vec<LessonRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl CourseRecord {
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title().to_owned(),
            modules: course
                .modules()
                .iter()
                .map(|module| ModuleRecord {
                    id: module.id(),
                    title: module.title().to_owned(),
                    lessons: module
                        .lessons()
                        .iter()
                        .map(|lesson| LessonRecord {
                            id: lesson.id(),
                            title: lesson.title().to_owned(),
                            description: lesson.description().to_owned(),
                            completed: lesson.completed(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Convert the record back into a domain `Course`.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if titles fail validation or ids are not unique.
    pub fn into_course(self) -> Result<Course, CourseError> {
        let mut modules = Vec::with_capacity(self.modules.len());
        for module in self.modules {
            let mut lessons = Vec::with_capacity(module.lessons.len());
            for lesson in module.lessons {
                lessons.push(Lesson::from_persisted(
                    lesson.id,
                    lesson.title,
                    lesson.description,
                    lesson.completed,
                )?);
            }
            modules.push(Module::new(module.id, module.title, lessons)?);
        }
        Course::new(self.title, modules)
    }
}

//
// ─── REPOSITORY ────────────────────────────────────────────────────────────────
//

/// Repository contract for the persisted course blob.
///
/// A single logical writer owns the one storage key; calls are synchronous
/// because the payload is a few kilobytes at most.
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted course, `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for unreadable or undecodable data.
    fn load(&self) -> Result<Option<Course>, StorageError>;

    /// Persist the full course, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the course cannot be stored.
    fn save(&self, course: &Course) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Stores the serialized JSON rather than the domain value, so tests exercise
/// the same record round-trip the file backend does.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    blob: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<Course>, StorageError> {
        let guard = self
            .blob
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        match guard.as_deref() {
            Some(json) => {
                let record: CourseRecord = serde_json::from_str(json)?;
                Ok(Some(record.into_course()?))
            }
            None => Ok(None),
        }
    }

    fn save(&self, course: &Course) -> Result<(), StorageError> {
        let json = serde_json::to_string(&CourseRecord::from_course(course))?;
        let mut guard = self
            .blob
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        *guard = Some(json);
        Ok(())
    }
}

/// Aggregates the progress repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            progress: Arc::new(crate::json_file::JsonFileRepository::new(path)),
        }
    }
}
