//! Unit tests for the storage adapter: load, save, migration, and
//! self-healing against corrupt slot entries.

use std::fs;
use std::path::PathBuf;

use repsheet::storage::{FileSlot, MemorySlot, TemplateStore};
use repsheet::{AppData, Exercise, ExerciseDay};
use tempfile::TempDir;

fn slot_path(dir: &TempDir) -> PathBuf {
    dir.path().join("workout-template-data.json")
}

fn file_store(dir: &TempDir) -> TemplateStore<FileSlot> {
    TemplateStore::new(FileSlot::new(slot_path(dir)))
}

fn sample_data() -> AppData {
    AppData {
        exercises: vec![Exercise {
            id: "e1".to_string(),
            name: "Deadlift".to_string(),
            reps: "3x5".to_string(),
            rest: "2min".to_string(),
            notes: "belt".to_string(),
        }],
        days: vec![ExerciseDay {
            id: "d1".to_string(),
            title: "Pull Day".to_string(),
            exercise_ids: vec!["e1".to_string()],
        }],
    }
}

#[test]
fn test_load_absent_returns_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    assert_eq!(store.load(), AppData::default());
    // Loading absent data does not create the file.
    assert!(!slot_path(&dir).exists());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);
    let data = sample_data();

    store.save(&data);
    assert_eq!(store.load(), data);
}

#[test]
fn test_corrupt_entry_erased_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(slot_path(&dir), "definitely not json {{").unwrap();

    let mut store = file_store(&dir);
    assert_eq!(store.load(), AppData::default());
    assert!(!slot_path(&dir).exists(), "corrupt entry must be erased");
}

#[test]
fn test_unrecognized_version_erased_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        slot_path(&dir),
        r#"{"version":99,"exercises":[],"days":[]}"#,
    )
    .unwrap();

    let mut store = file_store(&dir);
    assert_eq!(store.load(), AppData::default());
    assert!(!slot_path(&dir).exists());
}

#[test]
fn test_invalid_current_version_erased_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        slot_path(&dir),
        r#"{"version":2,"exercises":[{"id":"e1","name":"Squat","reps":"5x5","rest":"90s"}],"days":[]}"#,
    )
    .unwrap();

    let mut store = file_store(&dir);
    assert_eq!(store.load(), AppData::default());
    assert!(!slot_path(&dir).exists());
}

#[test]
fn test_v1_loads_and_save_upgrades() {
    let dir = TempDir::new().unwrap();
    fs::write(
        slot_path(&dir),
        r#"{"version":1,"exercises":[{"id":"e1","name":"Squat","reps":"5x5","rest":"90s","notes":""}]}"#,
    )
    .unwrap();

    let mut store = file_store(&dir);
    let data = store.load();
    assert_eq!(data.exercises.len(), 1);
    assert!(data.days.is_empty());

    store.save(&data);
    let raw = fs::read_to_string(slot_path(&dir)).unwrap();
    assert!(raw.contains("\"version\": 2"));
    assert!(raw.contains("\"days\""));
}

#[test]
fn test_serialize_and_parse_imported_round_trip() {
    let store = TemplateStore::new(MemorySlot::new());
    let data = sample_data();

    let exported = store.serialize(&data);
    assert_eq!(store.parse_imported(&exported), Some(data));
}

#[test]
fn test_parse_imported_invalid_returns_none() {
    let store = TemplateStore::new(MemorySlot::new());

    assert_eq!(store.parse_imported("garbage"), None);
    assert_eq!(store.parse_imported("{\"exercises\":[]}"), None);
}

#[test]
fn test_parse_imported_never_touches_slot() {
    let dir = TempDir::new().unwrap();
    let original = r#"{"version":2,"exercises":[],"days":[]}"#;
    fs::write(slot_path(&dir), original).unwrap();

    let store = file_store(&dir);
    assert!(store.parse_imported("broken import").is_none());

    let after = fs::read_to_string(slot_path(&dir)).unwrap();
    assert_eq!(after, original, "parsing an import must not modify the slot");
}

#[test]
fn test_parse_imported_accepts_legacy_v1() {
    let store = TemplateStore::new(MemorySlot::new());
    let raw = r#"{"version":1,"exercises":[{"id":"e1","name":"Row","reps":"","rest":"","notes":""}]}"#;

    let data = store.parse_imported(raw).expect("v1 import is valid");
    assert_eq!(data.exercises.len(), 1);
    assert!(data.days.is_empty());
}

#[test]
fn test_clear_removes_entry() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    store.save(&sample_data());
    assert!(slot_path(&dir).exists());

    store.clear();
    assert!(!slot_path(&dir).exists());
    assert_eq!(store.load(), AppData::default());
}
