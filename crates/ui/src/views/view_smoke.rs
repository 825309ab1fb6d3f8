use services::{MOTIVATORS, TrackerState};
use trainer_core::Reminder;
use trainer_core::model::{ImageRef, NoteField, TRAINING_A};

use super::test_harness::{TEST_TITLE, ViewKind, setup_view_harness};

fn render(view: ViewKind, state: TrackerState) -> String {
    let mut harness = setup_view_harness(view, state);
    harness.rebuild();
    harness.render()
}

#[test]
fn shell_renders_title_tabs_and_morning_reminder() {
    let html = render(ViewKind::Shell, TrackerState::new(Reminder::Morning));
    assert!(html.contains(TEST_TITLE), "missing title in {html}");
    for tab in ["Training A", "Notizen", "Fortschritt", "Gewicht", "Meal Prep"] {
        assert!(html.contains(tab), "missing tab {tab} in {html}");
    }
    let reminder = Reminder::Morning.text().unwrap();
    assert!(html.contains(reminder), "missing reminder in {html}");
    assert!(html.contains(TRAINING_A[0]), "default tab not rendered in {html}");
}

#[test]
fn shell_without_reminder_has_no_banner() {
    let html = render(ViewKind::Shell, TrackerState::new(Reminder::None));
    assert!(!html.contains("class=\"reminder\""), "unexpected reminder in {html}");
}

#[test]
fn training_view_renders_checklist_state() {
    let state = TrackerState::default().toggled(TRAINING_A[3]);
    let html = render(ViewKind::Training, state);
    for label in TRAINING_A {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert_eq!(html.matches("Rückgängig").count(), 1, "{html}");
    assert_eq!(html.matches("Erledigt").count(), 5, "{html}");
    assert!(html.contains("exercise-label done"), "missing done style in {html}");
}

#[test]
fn notes_view_shows_saved_text() {
    let state = TrackerState::default().with_note(NoteField::Training, "Knie fühlt sich gut an");
    let html = render(ViewKind::Notes, state);
    assert!(html.contains("Knie fühlt sich gut an"), "missing note in {html}");
}

#[test]
fn progress_view_renders_completion_and_photos() {
    let state = TrackerState::default()
        .toggled(TRAINING_A[0])
        .toggled(TRAINING_A[1])
        .toggled(TRAINING_A[2])
        .with_images([
            ImageRef::from_file("/photos/week1.jpg").unwrap(),
            ImageRef::from_file("/photos/week2.jpg").unwrap(),
        ]);
    let html = render(ViewKind::Progress, state);
    assert!(html.contains("Trainingseinheit A abgeschlossen:"), "{html}");
    assert!(html.contains("50%"), "missing completion in {html}");
    assert!(html.contains("/photos/week2.jpg"), "missing photo in {html}");
    assert!(html.contains("Fortschritt 2"), "missing alt text in {html}");
}

#[test]
fn weight_view_hides_goal_progress_without_goal() {
    let harness = setup_view_harness(ViewKind::Weight, TrackerState::default());
    let state = harness.tracker.add_weight_input(harness.tracker.start_session(), "80");

    let html = render(ViewKind::Weight, state);
    assert!(html.contains("Gewichtstracker"), "{html}");
    assert!(!html.contains("Fortschritt zum Zielgewicht"), "unexpected goal bar in {html}");
    assert!(html.contains("weight-chart"), "missing chart in {html}");
}

#[test]
fn weight_view_renders_goal_progress_message_and_chart() {
    let harness = setup_view_harness(ViewKind::Weight, TrackerState::default());
    let tracker = harness.tracker;
    let state = tracker.add_weight_input(tracker.start_session(), "80");
    let state = tracker.add_weight_input(state.with_goal_input("75"), "78");

    let html = render(ViewKind::Weight, state);
    assert!(html.contains("Fortschritt zum Zielgewicht:"), "missing goal bar in {html}");
    assert!(html.contains("40%"), "missing progress value in {html}");
    assert!(html.contains(MOTIVATORS[0]), "missing motivator in {html}");
    assert!(html.contains("78.0 kg"), "missing latest weight in {html}");
}

#[test]
fn weight_view_without_samples_has_no_chart() {
    let html = render(ViewKind::Weight, TrackerState::default().with_goal_input("70"));
    assert!(!html.contains("weight-chart"), "unexpected chart in {html}");
    assert!(!html.contains("Fortschritt zum Zielgewicht"), "{html}");
}

#[test]
fn nutrition_view_lists_guidance() {
    let html = render(ViewKind::Nutrition, TrackerState::default());
    assert!(html.contains("Magerquark, Hüttenkäse, Skyr"), "{html}");
    assert!(html.contains("Weißbrot"), "{html}");
    assert!(html.contains("Grüner Tee, schwarzer Kaffee"), "{html}");
}

#[test]
fn meal_prep_view_shows_suggestions() {
    let state = TrackerState::default().with_note(NoteField::MealPrep, "Montag: Curry");
    let html = render(ViewKind::MealPrep, state);
    assert!(html.contains("Meal Prep"), "{html}");
    assert!(html.contains("Putenhack mit Zucchini-Nudeln"), "{html}");
    assert!(html.contains("Montag: Curry"), "{html}");
}
