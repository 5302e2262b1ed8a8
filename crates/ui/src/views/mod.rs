mod course;

pub use course::CourseView;
