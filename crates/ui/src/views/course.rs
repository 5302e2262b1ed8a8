use dioxus::prelude::*;

use course_core::compute_progress;
use course_core::model::{LessonId, ModuleId};

use crate::context::AppContext;
use crate::vm::{CourseVm, LessonVm, ProgressVm, map_course};

/// The single page of the tracker: header with aggregate progress, module
/// cards with per-lesson checkboxes, and the reset footer.
///
/// Renders purely from the course signal plus two transient signals (the one
/// expanded lesson and the reset confirmation). Expansion state never touches
/// the persisted model and resets on relaunch.
#[component]
pub fn CourseView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut course = use_signal({
        let service = ctx.progress();
        move || service.load()
    });
    let mut expanded = use_signal(|| None::<LessonId>);
    let mut show_reset_modal = use_signal(|| false);

    let on_toggle_lesson = use_callback({
        let service = ctx.progress();
        move |(module_id, lesson_id): (ModuleId, LessonId)| {
            let next = service.toggle_lesson(&course.read(), module_id, lesson_id);
            course.set(next);
        }
    });

    let on_toggle_details = use_callback(move |lesson_id: LessonId| {
        let current = *expanded.read();
        expanded.set(if current == Some(lesson_id) {
            None
        } else {
            Some(lesson_id)
        });
    });

    let on_reset_confirm = use_callback({
        let service = ctx.progress();
        move |()| {
            course.set(service.reset());
            expanded.set(None);
            show_reset_modal.set(false);
        }
    });

    // Memoized on the course signal: expansion toggles re-render without
    // re-running the aggregation.
    let vm = use_memo(move || {
        let course = course.read();
        map_course(&course, compute_progress(&course))
    });
    let CourseVm {
        title,
        progress,
        modules,
    } = vm();
    let expanded_id = *expanded.read();

    rsx! {
        main { class: "container",
            CourseHeader { title, progress }

            section { class: "modules-list",
                for module in modules {
                    div { class: "module-card", key: "{module.id}",
                        h2 { "{module.title}" }
                        ul { class: "lessons-list",
                            for lesson in module.lessons {
                                LessonRow {
                                    key: "{lesson.id}",
                                    module_id: module.id,
                                    expanded: expanded_id == Some(lesson.id),
                                    lesson,
                                    on_toggle: on_toggle_lesson,
                                    on_details: on_toggle_details,
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "app-footer",
                button {
                    class: "reset-button",
                    r#type: "button",
                    onclick: move |_| show_reset_modal.set(true),
                    "Reset Progress"
                }
            }

            if show_reset_modal() {
                ResetModal {
                    on_cancel: move |()| show_reset_modal.set(false),
                    on_confirm: on_reset_confirm,
                }
            }
        }
    }
}

#[component]
fn CourseHeader(title: String, progress: ProgressVm) -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "{title}" }
            div { class: "progress-container",
                div {
                    class: "progress-bar-wrapper",
                    role: "progressbar",
                    aria_valuenow: "{progress.percentage}",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    aria_label: "Course Completion Progress",
                    div { class: "progress-bar", style: "width: {progress.bar_width}" }
                }
                span { class: "progress-label", "{progress.label}" }
            }
        }
    }
}

#[component]
fn LessonRow(
    module_id: ModuleId,
    lesson: LessonVm,
    expanded: bool,
    on_toggle: Callback<(ModuleId, LessonId)>,
    on_details: Callback<LessonId>,
) -> Element {
    let lesson_id = lesson.id;
    let item_class = if lesson.completed {
        "lesson-item completed"
    } else {
        "lesson-item"
    };
    let icon_class = if expanded {
        "details-icon expanded"
    } else {
        "details-icon"
    };

    rsx! {
        li { class: "{item_class}",
            div { class: "lesson-header",
                label { r#for: "lesson-{lesson_id}",
                    input {
                        r#type: "checkbox",
                        id: "lesson-{lesson_id}",
                        checked: lesson.completed,
                        onchange: move |_| on_toggle.call((module_id, lesson_id)),
                    }
                    span { class: "custom-checkbox" }
                    span { class: "lesson-title", "{lesson.title}" }
                }
                button {
                    class: "details-toggle",
                    r#type: "button",
                    aria_expanded: expanded,
                    aria_controls: "details-{lesson_id}",
                    aria_label: if expanded { "Hide details" } else { "Show details" },
                    onclick: move |_| on_details.call(lesson_id),
                    span { class: "{icon_class}", "\u{25BE}" }
                }
            }
            if expanded {
                div { id: "details-{lesson_id}", class: "lesson-details",
                    p { "{lesson.description}" }
                }
            }
        }
    }
}

#[component]
fn ResetModal(on_cancel: Callback<()>, on_confirm: Callback<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Reset all progress?" }
                p { class: "modal-body",
                    "This clears every completed lesson. It cannot be undone."
                }
                div { class: "modal-actions",
                    button {
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn modal-confirm",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Reset"
                    }
                }
            }
        }
    }
}
