use slam_core::model::Year;
use storage::{InMemoryRepository, Storage};

use crate::vm::QuizIntent;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[test]
fn home_view_smoke_lists_quizzes() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Grand Slam Champions"), "missing quiz title in {html}");
    assert!(html.contains("Play"), "missing play link in {html}");
    assert!(html.contains("Coming soon"), "missing placeholder badge in {html}");
}

#[test]
fn quiz_view_smoke_renders_year_tables() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();

    for expected in ["2024", "2000", "Australian Open", "US Open", "Check", "Reveal all"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("Jannik Sinner"), "missing candidate in {html}");
    assert!(html.contains("In progress"), "missing active label in {html}");
    assert!(html.contains("Locked"), "missing locked label in {html}");
    assert!(html.contains("0/25 years completed"), "missing overall label in {html}");
}

#[test]
fn quiz_view_smoke_reports_missing_data() {
    let storage = Storage::in_memory(InMemoryRepository::new());
    let mut harness = setup_view_harness_with_storage(ViewKind::Quiz, storage);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("The champion list could not be loaded."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry button in {html}");
}

#[test]
fn quiz_view_reveal_all_unlocks_previous_year() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    assert!(!harness.render().contains("Revealed"));

    harness.dispatch(QuizIntent::RevealAll(Year::LAST));
    let html = harness.render();

    assert!(
        html.contains("2024 complete! 2023 is now unlocked."),
        "missing unlock notice in {html}"
    );
    assert!(html.contains("1/25 years completed"), "missing overall label in {html}");
    assert!(html.contains("2023: 0/4 correct"), "missing active year label in {html}");
    assert!(html.contains("Revealed"), "missing reveal feedback in {html}");
    assert!(html.contains("year--completed"), "missing completed row in {html}");
}

#[test]
fn quiz_view_check_marks_selected_cells() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    harness.select("2024-AO", "Jannik Sinner");
    harness.select("2024-RG", "Novak Djokovic");
    harness.dispatch(QuizIntent::Check(Year::LAST));
    let html = harness.render();

    assert!(html.contains("2024: 1/4 correct."), "missing check notice in {html}");
    assert!(html.contains("cell--correct"), "missing correct cell in {html}");
    assert!(html.contains("cell--incorrect"), "missing incorrect cell in {html}");
    assert!(html.contains("Guess again"), "missing retry hint in {html}");
}

#[test]
fn quiz_view_locked_year_shows_error_notice() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    harness.dispatch(QuizIntent::Check(Year::new(2010).unwrap()));
    let html = harness.render();

    assert!(
        html.contains("Finish the year above to unlock this one."),
        "missing locked notice in {html}"
    );
    assert!(html.contains("0/25 years completed"), "state changed in {html}");
}
