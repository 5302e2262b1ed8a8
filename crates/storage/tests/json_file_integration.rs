use course_core::model::{LessonId, ModuleId};
use course_core::seed_course;
use storage::{JsonFileRepository, ProgressRepository, STORAGE_FILE_NAME, StorageError};

#[test]
fn missing_file_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::in_dir(dir.path());
    assert!(repo.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::in_dir(dir.path());

    let course = seed_course()
        .toggle_lesson(ModuleId::new(1), LessonId::new(101))
        .toggle_lesson(ModuleId::new(2), LessonId::new(204));
    repo.save(&course).unwrap();

    let loaded = repo.load().unwrap().expect("blob written");
    assert_eq!(loaded, course);
}

#[test]
fn save_replaces_the_previous_blob() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::in_dir(dir.path());

    let first = seed_course().toggle_lesson(ModuleId::new(1), LessonId::new(101));
    repo.save(&first).unwrap();
    let second = first.toggle_lesson(ModuleId::new(1), LessonId::new(101));
    repo.save(&second).unwrap();

    assert_eq!(repo.load().unwrap().unwrap(), second);
    // No stray temp file left behind.
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![STORAGE_FILE_NAME]);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("nested/data").join(STORAGE_FILE_NAME));

    repo.save(&seed_course()).unwrap();
    assert!(repo.load().unwrap().is_some());
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORAGE_FILE_NAME);
    std::fs::write(&path, "{definitely not json").unwrap();

    let repo = JsonFileRepository::new(path);
    assert!(matches!(
        repo.load().unwrap_err(),
        StorageError::Serialization(_)
    ));
}

#[test]
fn structurally_invalid_file_is_an_invalid_course_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORAGE_FILE_NAME);
    // Valid JSON of the right shape, but an empty course title.
    std::fs::write(&path, r#"{"title": "  ", "modules": []}"#).unwrap();

    let repo = JsonFileRepository::new(path);
    assert!(matches!(
        repo.load().unwrap_err(),
        StorageError::InvalidCourse(_)
    ));
}
