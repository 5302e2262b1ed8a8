//! The hard-coded curriculum the tracker ships with.
//!
//! In a future version this could be loaded from a file or an API; today the
//! course structure is fixed and only completion flags ever change.

use crate::model::{Course, CourseError, Lesson, LessonId, Module, ModuleId};

const COURSE_TITLE: &str = "3-Month Plan to Become an LLM Pro";

/// Builds the seed course: 3 modules, 12 lessons, nothing completed.
///
/// # Panics
///
/// Never in practice; the seed data satisfies every structural invariant,
/// which the unit tests below pin down.
#[must_use]
pub fn seed_course() -> Course {
    build().expect("seed curriculum satisfies course invariants")
}

fn build() -> Result<Course, CourseError> {
    let month_1 = Module::new(
        ModuleId::new(1),
        "Month 1: Fundamentals & Core Concepts",
        vec![
            lesson(
                101,
                "Week 1: Introduction to LLMs & Core Architecture",
                "Understand what LLMs are, their history, applications, and the basics of \
                 Transformer architecture like self-attention. Also covers ethical \
                 considerations like bias and hallucinations.",
            )?,
            lesson(
                102,
                "Week 2: Getting Started with Prompt Engineering Basics",
                "Learn to write clear prompts, use role-playing, and understand parameters \
                 like temperature. Get familiar with popular models like GPT, Gemini, and Llama.",
            )?,
            lesson(
                103,
                "Week 3: LLM APIs & Basic Interaction",
                "Practice making API calls to LLMs using Python. Understand request/response \
                 formats, error handling, and the concept of tokenization and its impact.",
            )?,
            lesson(
                104,
                "Week 4: Use Cases & Limitations Deep Dive",
                "Explore common use cases like content creation and code generation. Deepen \
                 understanding of LLM limitations, including lack of real-world knowledge and \
                 data freshness.",
            )?,
        ],
    )?;

    let month_2 = Module::new(
        ModuleId::new(2),
        "Month 2: Advanced Prompting & Model Customization",
        vec![
            lesson(
                201,
                "Week 5: Advanced Prompt Engineering Techniques",
                "Master advanced techniques like Chain-of-Thought (CoT) for reasoning and \
                 Retrieval-Augmented Generation (RAG) to connect LLMs with external data.",
            )?,
            lesson(
                202,
                "Week 6: LLM Parameters & Model Selection",
                "Dive deeper into API parameters like top_k and penalties. Learn strategies \
                 for choosing the right model based on cost, speed, and capability \
                 (open-source vs. proprietary).",
            )?,
            lesson(
                203,
                "Week 7: Introduction to Fine-tuning Concepts",
                "Learn why and when to fine-tune models for specific tasks. Understand \
                 concepts like PEFT (LoRA, QLoRA) and how to prepare high-quality data for \
                 training.",
            )?,
            lesson(
                204,
                "Week 8: Evaluating LLM Outputs",
                "Discover how to evaluate LLM performance using both quantitative metrics \
                 (like BLEU, ROUGE) and qualitative human judgment. Learn about common \
                 benchmarks.",
            )?,
        ],
    )?;

    let month_3 = Module::new(
        ModuleId::new(3),
        "Month 3: Application Development & Specialization",
        vec![
            lesson(
                301,
                "Week 9: Building LLM-Powered Applications (Frameworks)",
                "Use frameworks like LangChain or LlamaIndex to build complex applications. \
                 Create a simple chatbot or a document Q&A system.",
            )?,
            lesson(
                302,
                "Week 10: Deployment & MLOps for LLMs",
                "Understand the challenges of deploying LLMs, including cost, latency, and \
                 security. Get a high-level overview of MLOps for monitoring and maintaining \
                 models.",
            )?,
            lesson(
                303,
                "Week 11: Specialization & Advanced Topics",
                "Explore specialized areas like code generation, AI agents, and multimodal \
                 LLMs. Learn how to stay current in this fast-evolving field by following \
                 research and communities.",
            )?,
            lesson(
                304,
                "Week 12: Project & Continuous Learning",
                "Apply all your knowledge to a capstone project. Design and build a complete \
                 LLM-powered solution and establish a plan for continuous learning.",
            )?,
        ],
    )?;

    Course::new(COURSE_TITLE, vec![month_1, month_2, month_3])
}

fn lesson(id: u64, title: &str, description: &str) -> Result<Lesson, CourseError> {
    Lesson::new(LessonId::new(id), title, description)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_builds() {
        let course = seed_course();
        assert_eq!(course.title(), COURSE_TITLE);
        assert_eq!(course.modules().len(), 3);
    }

    #[test]
    fn seed_has_twelve_incomplete_lessons() {
        let course = seed_course();
        let lessons: Vec<_> = course
            .modules()
            .iter()
            .flat_map(|module| module.lessons())
            .collect();
        assert_eq!(lessons.len(), 12);
        assert!(lessons.iter().all(|lesson| !lesson.completed()));
    }

    #[test]
    fn seed_lessons_all_carry_descriptions() {
        // The persistence compatibility guard keys off the first description,
        // so an empty one here would break rehydration.
        let course = seed_course();
        for module in course.modules() {
            for lesson in module.lessons() {
                assert!(!lesson.description().is_empty(), "lesson {}", lesson.id());
            }
        }
    }
}
