use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{LessonId, ModuleId};
use crate::model::lesson::Lesson;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyCourseTitle,

    #[error("module {id} title cannot be empty")]
    EmptyModuleTitle { id: ModuleId },

    #[error("lesson {id} title cannot be empty")]
    EmptyLessonTitle { id: LessonId },

    #[error("duplicate module id {id}")]
    DuplicateModuleId { id: ModuleId },

    #[error("duplicate lesson id {id}")]
    DuplicateLessonId { id: LessonId },
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// An ordered group of lessons within a course.
///
/// Structurally immutable after construction; only the completion flags of
/// nested lessons change, and those changes go through [`Course::toggle_lesson`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    title: String,
    lessons: Vec<Lesson>,
}

impl Module {
    /// Creates a new module.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyModuleTitle` for an empty title, or
    /// `CourseError::DuplicateLessonId` if two lessons share an id.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        lessons: Vec<Lesson>,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyModuleTitle { id });
        }

        let mut seen = HashSet::new();
        for lesson in &lessons {
            if !seen.insert(lesson.id()) {
                return Err(CourseError::DuplicateLessonId { id: lesson.id() });
            }
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            lessons,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    fn with_lesson_toggled(&self, lesson_id: LessonId) -> Self {
        let lessons = self
            .lessons
            .iter()
            .map(|lesson| {
                if lesson.id() == lesson_id {
                    lesson.toggled()
                } else {
                    lesson.clone()
                }
            })
            .collect();
        Self {
            id: self.id,
            title: self.title.clone(),
            lessons,
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Root aggregate of the whole curriculum.
///
/// One instance per session; mutations replace the value wholesale rather
/// than editing in place, so observers never see a half-applied change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    title: String,
    modules: Vec<Module>,
}

impl Course {
    /// Creates a new course.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyCourseTitle` for an empty title,
    /// `CourseError::DuplicateModuleId` if two modules share an id, or
    /// `CourseError::DuplicateLessonId` if a lesson id repeats anywhere in
    /// the course (lesson ids are unique course-wide, not per module).
    pub fn new(title: impl Into<String>, modules: Vec<Module>) -> Result<Self, CourseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyCourseTitle);
        }

        let mut module_ids = HashSet::new();
        let mut lesson_ids = HashSet::new();
        for module in &modules {
            if !module_ids.insert(module.id()) {
                return Err(CourseError::DuplicateModuleId { id: module.id() });
            }
            for lesson in module.lessons() {
                if !lesson_ids.insert(lesson.id()) {
                    return Err(CourseError::DuplicateLessonId { id: lesson.id() });
                }
            }
        }

        Ok(Self {
            title: title.trim().to_owned(),
            modules,
        })
    }

    // Accessors
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Returns a new course where the lesson matching both ids has its
    /// completion flag inverted. Everything else is structurally unchanged.
    ///
    /// Unknown `(module_id, lesson_id)` pairs are a no-op: the returned
    /// course is equal to `self`.
    #[must_use]
    pub fn toggle_lesson(&self, module_id: ModuleId, lesson_id: LessonId) -> Self {
        let modules = self
            .modules
            .iter()
            .map(|module| {
                if module.id() == module_id {
                    module.with_lesson_toggled(lesson_id)
                } else {
                    module.clone()
                }
            })
            .collect();
        Self {
            title: self.title.clone(),
            modules,
        }
    }

    /// Looks up a lesson by its course-wide unique id.
    #[must_use]
    pub fn find_lesson(&self, lesson_id: LessonId) -> Option<&Lesson> {
        self.modules
            .iter()
            .flat_map(|module| module.lessons())
            .find(|lesson| lesson.id() == lesson_id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
