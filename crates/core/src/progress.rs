use crate::model::Course;

/// Aggregated completion statistics, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseProgress {
    pub total_lessons: usize,
    pub completed_lessons: usize,
}

impl CourseProgress {
    /// Completion percentage in `[0, 100]`. Zero when the course is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total_lessons == 0 {
            return 0.0;
        }
        self.completed_lessons as f64 / self.total_lessons as f64 * 100.0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_lessons > 0 && self.completed_lessons == self.total_lessons
    }
}

/// Derives progress statistics from the current course state.
///
/// Pure, single pass over all lessons. Callers re-run it after each course
/// mutation; transient view state (expanded lesson) never triggers it.
#[must_use]
pub fn compute_progress(course: &Course) -> CourseProgress {
    let mut total = 0;
    let mut completed = 0;
    for module in course.modules() {
        total += module.lessons().len();
        completed += module
            .lessons()
            .iter()
            .filter(|lesson| lesson.completed())
            .count();
    }
    CourseProgress {
        total_lessons: total,
        completed_lessons: completed,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LessonId, ModuleId};
    use crate::seed::seed_course;

    #[test]
    fn empty_course_has_zero_percentage() {
        let course = Course::new("Empty", vec![]).unwrap();
        let progress = compute_progress(&course);
        assert_eq!(progress.total_lessons, 0);
        assert_eq!(progress.completed_lessons, 0);
        assert!((progress.percentage() - 0.0).abs() < f64::EPSILON);
        assert!(!progress.is_complete());
    }

    #[test]
    fn seed_course_starts_at_zero_of_twelve() {
        let progress = compute_progress(&seed_course());
        assert_eq!(progress.total_lessons, 12);
        assert_eq!(progress.completed_lessons, 0);
        assert!((progress.percentage() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn one_of_twelve_is_one_twelfth() {
        let course = seed_course().toggle_lesson(ModuleId::new(1), LessonId::new(101));
        let progress = compute_progress(&course);
        assert_eq!(progress.completed_lessons, 1);
        assert!((progress.percentage() - 100.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn completed_never_exceeds_total() {
        let mut course = seed_course();
        for module in seed_course().modules() {
            for lesson in module.lessons() {
                course = course.toggle_lesson(module.id(), lesson.id());
            }
        }
        let progress = compute_progress(&course);
        assert_eq!(progress.completed_lessons, progress.total_lessons);
        assert!((progress.percentage() - 100.0).abs() < f64::EPSILON);
        assert!(progress.is_complete());
    }
}
