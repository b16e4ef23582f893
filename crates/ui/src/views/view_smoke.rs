use std::time::Duration;

use dioxus::prelude::*;
use services::{QuizSnapshot, TickOutcome};

use super::test_harness::{
    TEST_TITLE, ViewHarness, drive_dom, manual_session, setup_view_harness,
};
use crate::views::{QuizScreens, ViewError};
use crate::vm::QuizIntent;

#[derive(Props, Clone, PartialEq)]
struct ScreensProps {
    snapshot: QuizSnapshot,
    show_next: bool,
    error: Option<ViewError>,
}

#[component]
fn ScreensHarness(props: ScreensProps) -> Element {
    rsx! {
        QuizScreens {
            snapshot: props.snapshot,
            title: TEST_TITLE.to_string(),
            time_per_question: 30,
            passing_score: 70,
            show_next: props.show_next,
            error: props.error,
            on_intent: move |_| {},
        }
    }
}

fn render_screens(snapshot: QuizSnapshot, show_next: bool, error: Option<ViewError>) -> String {
    let mut dom = VirtualDom::new_with_props(
        ScreensHarness,
        ScreensProps {
            snapshot,
            show_next,
            error,
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

#[test]
fn idle_snapshot_renders_start_screen() {
    let (session, _) = manual_session();
    let html = render_screens(session.snapshot(), false, None);

    assert!(html.contains("start-btn"), "missing start button in {html}");
    assert!(html.contains(TEST_TITLE), "missing title in {html}");
    assert!(html.contains("10 questions"), "missing question count in {html}");
    assert!(html.contains("30 seconds per question"), "missing time limit in {html}");
}

#[test]
fn unanswered_snapshot_renders_question_and_timer() {
    let (mut session, _) = manual_session();
    session.start().unwrap();
    let html = render_screens(session.snapshot(), false, None);

    assert!(html.contains("What does JSON stand for?"), "missing question in {html}");
    assert!(html.contains("timer-countdown"), "missing timer in {html}");
    assert!(html.contains(">30<"), "missing full countdown in {html}");
    assert!(!html.contains("next-btn"), "next shown too early in {html}");
}

#[test]
fn answered_snapshot_locks_options_and_reveals_next() {
    let (mut session, _) = manual_session();
    session.start().unwrap();
    session.answer(0).unwrap();

    let hidden = render_screens(session.snapshot(), false, None);
    assert!(hidden.contains("Correct!"), "missing feedback in {hidden}");
    assert!(hidden.contains("selected correct"), "missing correct highlight in {hidden}");
    assert!(hidden.contains("disabled"), "options still enabled in {hidden}");
    assert!(!hidden.contains("next-btn"), "next shown before reveal in {hidden}");

    let shown = render_screens(session.snapshot(), true, None);
    assert!(shown.contains("next-btn"), "missing next button in {shown}");
    assert!(shown.contains("Next Question"), "missing next label in {shown}");
}

#[test]
fn timed_out_snapshot_shows_times_up() {
    let (mut session, _) = manual_session();
    session.start().unwrap();
    let mut outcome = TickOutcome::Ignored;
    for _ in 0..30 {
        outcome = session.tick();
    }
    assert!(matches!(outcome, TickOutcome::TimedOut(_)));

    let html = render_screens(session.snapshot(), false, None);
    assert!(html.contains("Time's up!"), "missing timeout feedback in {html}");
    assert!(html.contains("timer danger"), "missing danger timer in {html}");
}

#[test]
fn completed_snapshot_renders_results() {
    let (mut session, _) = manual_session();
    session.start().unwrap();
    let total = session.total_questions();
    for index in 0..total {
        let correct = session.current_question().map(|q| q.correct_index()).unwrap();
        let choice = if index == total - 1 { (correct + 1) % 4 } else { correct };
        session.answer(choice).unwrap();
        session.advance().unwrap();
    }

    let html = render_screens(session.snapshot(), false, None);
    assert!(html.contains("restart-btn"), "missing restart in {html}");
    assert!(html.contains(">9<"), "missing score in {html}");
    assert!(html.contains(">90<"), "missing percentage in {html}");
    assert!(html.contains("performance-message excellent"), "missing tier class in {html}");
    assert!(html.contains("Passed"), "missing verdict in {html}");
}

#[test]
fn error_banner_renders_above_screen() {
    let (session, _) = manual_session();
    let html = render_screens(session.snapshot(), false, Some(ViewError::InvalidAction));
    assert!(html.contains("quiz-error"), "missing error banner in {html}");
    assert!(html.contains("start-btn"), "screen missing under banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_start_screen() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("quiz-root"), "missing root in {html}");
    assert!(html.contains("start-btn"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_autostart_opens_first_question() {
    let mut harness = setup_view_harness(true);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("question-text"), "autostart did not start in {html}");
    assert!(!html.contains("start-btn"), "start screen still shown in {html}");
}

async fn settle(harness: &mut ViewHarness) {
    for _ in 0..3 {
        harness.drive_for(Duration::from_millis(5)).await;
    }
}

#[tokio::test(start_paused = true)]
async fn quiz_view_reveals_next_one_second_after_answer() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    settle(&mut harness).await;
    assert!(harness.in_progress());

    harness.dispatch(QuizIntent::Answer(0));
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(!html.contains("next-btn"), "next shown immediately in {html}");

    tokio::time::sleep(Duration::from_millis(500)).await;
    settle(&mut harness).await;
    let html = harness.render();
    assert!(!html.contains("next-btn"), "next shown before the delay in {html}");

    tokio::time::sleep(Duration::from_millis(600)).await;
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("next-btn"), "next missing after the delay in {html}");
}

#[tokio::test(start_paused = true)]
async fn quiz_view_ticks_run_out_into_timeout() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    settle(&mut harness).await;

    tokio::time::sleep(Duration::from_secs(21)).await;
    settle(&mut harness).await;
    let html = harness.render();
    assert!(!html.contains("Time's up!"), "timed out early in {html}");
    assert!(html.contains("timer warning"), "countdown not draining in {html}");

    for _ in 0..11 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        settle(&mut harness).await;
    }
    let html = harness.render();
    assert!(html.contains("Time's up!"), "missing timeout feedback in {html}");
    assert!(html.contains("timer danger"), "missing danger timer in {html}");
}

#[tokio::test(start_paused = true)]
async fn quiz_view_restart_drops_pending_reveal() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    settle(&mut harness).await;
    harness.dispatch(QuizIntent::Answer(0));
    settle(&mut harness).await;

    tokio::time::sleep(Duration::from_millis(400)).await;
    settle(&mut harness).await;
    harness.dispatch(QuizIntent::Restart);
    settle(&mut harness).await;
    assert!(!harness.in_progress());
    harness.dispatch(QuizIntent::Start);
    settle(&mut harness).await;
    harness.dispatch(QuizIntent::Answer(0));
    settle(&mut harness).await;

    // Past the first answer's delay, short of the second one's.
    tokio::time::sleep(Duration::from_millis(650)).await;
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("Correct!"), "second run not answered in {html}");
    assert!(!html.contains("next-btn"), "earlier run revealed next in {html}");

    tokio::time::sleep(Duration::from_millis(500)).await;
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("next-btn"), "next missing for second run in {html}");
}
