//! Unit tests for day CRUD, draft guards, and the day-size bound.

use repsheet::plan::types::MAX_DAY_EXERCISES;
use repsheet::{MemorySlot, TemplateStore, WorkoutTemplate};

fn template() -> WorkoutTemplate<MemorySlot> {
    WorkoutTemplate::new(TemplateStore::new(MemorySlot::new()))
}

fn add_exercise(template: &mut WorkoutTemplate<MemorySlot>, name: &str) -> String {
    template.exercise_draft.open_create();
    template.exercise_draft.name = name.to_string();
    assert!(template.save_exercise());
    template
        .exercises()
        .last()
        .map(|e| e.id.clone())
        .expect("exercise was just saved")
}

#[test]
fn test_duplicate_add_keeps_one_occurrence() {
    let mut t = template();
    let id = add_exercise(&mut t, "Squat");

    t.day_draft.open_create(0);
    t.day_draft.selected_exercise_id = id.clone();
    t.day_draft.add_selected_exercise();
    t.day_draft.selected_exercise_id = id.clone();
    t.day_draft.add_selected_exercise();

    assert_eq!(t.day_draft.exercise_ids, vec![id]);
}

#[test]
fn test_add_beyond_bound_is_noop() {
    let mut t = template();
    let mut ids = Vec::new();
    for i in 0..MAX_DAY_EXERCISES + 1 {
        ids.push(add_exercise(&mut t, &format!("Exercise {i}")));
    }

    t.day_draft.open_create(0);
    for id in &ids {
        t.day_draft.selected_exercise_id = id.clone();
        t.day_draft.add_selected_exercise();
    }

    assert_eq!(t.day_draft.exercise_ids.len(), MAX_DAY_EXERCISES);
    assert_eq!(t.day_draft.exercise_ids, &ids[..MAX_DAY_EXERCISES]);
}

#[test]
fn test_empty_selection_add_is_noop() {
    let mut t = template();
    t.day_draft.open_create(0);
    t.day_draft.selected_exercise_id = String::new();
    t.day_draft.add_selected_exercise();

    assert!(t.day_draft.exercise_ids.is_empty());
}

#[test]
fn test_add_clears_selection() {
    let mut t = template();
    let id = add_exercise(&mut t, "Squat");

    t.day_draft.open_create(0);
    t.day_draft.selected_exercise_id = id;
    t.day_draft.add_selected_exercise();

    assert!(t.day_draft.selected_exercise_id.is_empty());
}

#[test]
fn test_save_rejects_blank_title() {
    let mut t = template();
    let id = add_exercise(&mut t, "Squat");

    t.day_draft.open_create(0);
    t.day_draft.title = "   ".to_string();
    t.day_draft.selected_exercise_id = id;
    t.day_draft.add_selected_exercise();

    assert!(!t.save_day());
    assert!(t.days().is_empty());
    // Draft state is unchanged by a rejected save.
    assert_eq!(t.day_draft.exercise_ids.len(), 1);
    assert!(t.day_draft.open);
}

#[test]
fn test_save_rejects_empty_exercise_list() {
    let mut t = template();
    t.day_draft.open_create(0);
    t.day_draft.title = "Push Day".to_string();

    assert!(!t.save_day());
    assert!(t.days().is_empty());
    assert_eq!(t.day_draft.title, "Push Day");
}

#[test]
fn test_save_appends_and_resets_draft_title_from_count() {
    let mut t = template();
    let id = add_exercise(&mut t, "Squat");

    t.day_draft.open_create(0);
    assert_eq!(t.day_draft.title, "Day 1");
    t.day_draft.selected_exercise_id = id;
    t.day_draft.add_selected_exercise();
    assert!(t.save_day());

    assert_eq!(t.days().len(), 1);
    assert_eq!(t.days()[0].title, "Day 1");
    // Draft resets to the next day number and closes.
    assert_eq!(t.day_draft.title, "Day 2");
    assert!(t.day_draft.exercise_ids.is_empty());
    assert!(!t.day_draft.open);
}

#[test]
fn test_edit_replaces_in_place() {
    let mut t = template();
    let squat = add_exercise(&mut t, "Squat");
    let bench = add_exercise(&mut t, "Bench");

    for (title, id) in [("Day A", &squat), ("Day B", &bench)] {
        t.day_draft.open_create(t.days().len());
        t.day_draft.title = title.to_string();
        t.day_draft.selected_exercise_id = id.to_string();
        t.day_draft.add_selected_exercise();
        assert!(t.save_day());
    }

    let first = t.days()[0].clone();
    t.day_draft.open_edit(&first);
    t.day_draft.title = "Leg Day".to_string();
    assert!(t.save_day());

    assert_eq!(t.days().len(), 2);
    assert_eq!(t.days()[0].id, first.id);
    assert_eq!(t.days()[0].title, "Leg Day");
    assert_eq!(t.days()[1].title, "Day B");
}

#[test]
fn test_delete_day() {
    let mut t = template();
    let id = add_exercise(&mut t, "Squat");

    t.day_draft.open_create(0);
    t.day_draft.selected_exercise_id = id;
    t.day_draft.add_selected_exercise();
    assert!(t.save_day());

    let day_id = t.days()[0].id.clone();
    t.delete_day(&day_id);

    assert!(t.days().is_empty());
    assert_eq!(t.selected_print_day_id(), "");
}

#[test]
fn test_delete_day_being_edited_resets_draft() {
    let mut t = template();
    let id = add_exercise(&mut t, "Squat");

    t.day_draft.open_create(0);
    t.day_draft.selected_exercise_id = id;
    t.day_draft.add_selected_exercise();
    assert!(t.save_day());

    let day = t.days()[0].clone();
    t.day_draft.open_edit(&day);
    t.delete_day(&day.id);

    assert!(t.day_draft.editing_id.is_none());
    assert!(!t.day_draft.open);
    assert_eq!(t.day_draft.title, "Day 1");
}
