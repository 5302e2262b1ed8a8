use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use course_core::model::Course;

use crate::repository::{CourseRecord, ProgressRepository, StorageError};

/// Fixed name of the single storage entry. The file name is the storage key;
/// there is exactly one blob per data directory.
pub const STORAGE_FILE_NAME: &str = "course_progress.json";

/// File-backed progress repository: one JSON blob, replaced wholesale on
/// every save.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository writing to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository using the standard file name inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STORAGE_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<Course>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted course yet");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let record: CourseRecord = serde_json::from_str(&json)?;
        Ok(Some(record.into_course()?))
    }

    fn save(&self, course: &Course) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&CourseRecord::from_course(course))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash mid-write cannot leave a truncated blob.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "persisted course");
        Ok(())
    }
}
