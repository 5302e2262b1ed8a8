use course_core::model::{Course, LessonId, ModuleId};
use course_core::progress::CourseProgress;

/// UI-ready representation of the whole course page.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseVm {
    pub title: String,
    pub progress: ProgressVm,
    pub modules: Vec<ModuleVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleVm {
    pub id: ModuleId,
    pub title: String,
    pub lessons: Vec<LessonVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Progress header data, preformatted for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
    pub label: String,
    pub bar_width: String,
}

impl ProgressVm {
    #[must_use]
    pub fn from_progress(progress: CourseProgress) -> Self {
        let percentage = progress.percentage();
        Self {
            completed: progress.completed_lessons,
            total: progress.total_lessons,
            percentage,
            label: format!(
                "{} / {} Weeks Completed",
                progress.completed_lessons, progress.total_lessons
            ),
            bar_width: format!("{percentage:.2}%"),
        }
    }
}

/// Convert the domain course into render-friendly view models.
#[must_use]
pub fn map_course(course: &Course, progress: CourseProgress) -> CourseVm {
    CourseVm {
        title: course.title().to_owned(),
        progress: ProgressVm::from_progress(progress),
        modules: course
            .modules()
            .iter()
            .map(|module| ModuleVm {
                id: module.id(),
                title: module.title().to_owned(),
                lessons: module
                    .lessons()
                    .iter()
                    .map(|lesson| LessonVm {
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

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
