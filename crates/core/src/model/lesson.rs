use crate::model::CourseError;
use crate::model::ids::LessonId;

/// An atomic trackable unit of the curriculum.
///
/// Lessons are created once from seed data (or rehydrated from storage) and
/// never added or removed afterwards; only the completion flag changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    completed: bool,
}

impl Lesson {
    /// Creates a new, not-yet-completed lesson.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyLessonTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CourseError> {
        Self::from_persisted(id, title, description, false)
    }

    /// Rebuilds a lesson from persisted state, completion flag included.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyLessonTitle` if the title is empty or
    /// whitespace-only.
    pub fn from_persisted(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyLessonTitle { id });
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into().trim().to_owned(),
            completed,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Returns a copy of this lesson with the completion flag inverted.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_new_rejects_empty_title() {
        let err = Lesson::new(LessonId::new(101), "   ", "something").unwrap_err();
        assert_eq!(
            err,
            CourseError::EmptyLessonTitle {
                id: LessonId::new(101)
            }
        );
    }

    #[test]
    fn lesson_new_starts_incomplete() {
        let lesson = Lesson::new(LessonId::new(101), "Week 1", "Intro").unwrap();
        assert!(!lesson.completed());
    }

    #[test]
    fn lesson_trims_title_and_description() {
        let lesson = Lesson::new(LessonId::new(1), "  Week 1  ", "  Intro  ").unwrap();
        assert_eq!(lesson.title(), "Week 1");
        assert_eq!(lesson.description(), "Intro");
    }

    #[test]
    fn lesson_allows_empty_description() {
        // The compatibility guard cares about descriptions, the domain does not.
        let lesson = Lesson::new(LessonId::new(1), "Week 1", "").unwrap();
        assert_eq!(lesson.description(), "");
    }

    #[test]
    fn toggled_inverts_and_double_toggle_is_identity() {
        let lesson = Lesson::new(LessonId::new(101), "Week 1", "Intro").unwrap();
        let once = lesson.toggled();
        assert!(once.completed());
        assert_eq!(once.toggled(), lesson);
    }

    #[test]
    fn from_persisted_keeps_completion() {
        let lesson = Lesson::from_persisted(LessonId::new(101), "Week 1", "Intro", true).unwrap();
        assert!(lesson.completed());
    }
}
