//! Integration tests for ClickClassifier

mod common;
use common::*;

use led_chase::{
    AnimationState, ButtonEvent, ButtonMap, ChaseConfig, ClickClassifier, ClickOutcome,
    ClickWindow, DeadlineTimer, Direction, EventQueue, SharedLines, Speed,
};

type Classifier<'a> =
    ClickClassifier<'a, MockLines, DeadlineTimer<'a, TestInstant, MockTimeSource>>;

fn classifier<'a>(
    state: &'a AnimationState,
    lines: &'a SharedLines<MockLines>,
    clock: &'a MockTimeSource,
) -> Classifier<'a> {
    ClickClassifier::new(state, lines, DeadlineTimer::new(clock), &ChaseConfig::default())
}

#[test]
fn single_press_opens_window_without_touching_speed() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::AwaitingSecondClick
    );
    assert_eq!(classifier.window(), ClickWindow::AwaitingSecondClick);
    assert_eq!(state.speed(), Speed::Slow);
}

#[test]
fn double_click_inside_window_toggles_speed() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(300));

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::SpeedToggled(Speed::Fast)
    );
    assert_eq!(state.speed(), Speed::Fast);
    assert!(!classifier.is_pending());
}

#[test]
fn second_press_after_window_is_ignored() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(1200));

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::WindowExpired
    );
    assert_eq!(state.speed(), Speed::Slow);
    assert_eq!(classifier.window(), ClickWindow::Idle);
}

#[test]
fn press_exactly_at_deadline_counts_as_expired() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(1000));

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::WindowExpired
    );
    assert_eq!(state.speed(), Speed::Slow);
}

#[test]
fn press_one_millisecond_before_deadline_still_toggles() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(999));

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::SpeedToggled(Speed::Fast)
    );
}

#[test]
fn third_quick_press_starts_a_new_window_without_toggling() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(100));
    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(100));

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::AwaitingSecondClick
    );
    assert_eq!(state.speed(), Speed::Fast);
}

#[test]
fn consecutive_double_clicks_toggle_back_and_forth() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    for expected in [Speed::Fast, Speed::Slow, Speed::Fast] {
        classifier.on_event(ButtonEvent::Speed);
        clock.advance(TestDuration(200));
        assert_eq!(
            classifier.on_event(ButtonEvent::Speed),
            ClickOutcome::SpeedToggled(expected)
        );
        clock.advance(TestDuration(2000));
    }
}

#[test]
fn expired_second_press_does_not_open_a_new_window() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(1500));
    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(100));

    // The late press resolved the old window; this one only opens a new one.
    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::AwaitingSecondClick
    );
    assert_eq!(state.speed(), Speed::Slow);
}

#[test]
fn reverse_clears_every_line_and_resets_position() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::with_levels([true, false, true, true]));
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    assert_eq!(
        classifier.on_event(ButtonEvent::Reverse),
        ClickOutcome::Reversed {
            direction: Direction::Reverse,
            position: 3,
        }
    );
    assert_eq!(lines.with(|l| l.levels()), [false; 4]);

    assert_eq!(
        classifier.on_event(ButtonEvent::Reverse),
        ClickOutcome::Reversed {
            direction: Direction::Forward,
            position: 0,
        }
    );
}

#[test]
fn reverse_press_leaves_speed_window_pending() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);

    classifier.on_event(ButtonEvent::Speed);
    classifier.on_event(ButtonEvent::Reverse);
    clock.advance(TestDuration(300));

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::SpeedToggled(Speed::Fast)
    );
}

#[test]
fn reserved_buttons_only_report() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::with_levels([true, false, false, true]));
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);
    let map = ButtonMap::default();

    assert_eq!(
        classifier.on_event(map.decode(1 << 24)),
        ClickOutcome::Reserved(3)
    );
    assert_eq!(
        classifier.on_event(map.decode(1 << 25)),
        ClickOutcome::Reserved(4)
    );
    assert_eq!(
        classifier.on_event(map.decode(1 << 2)),
        ClickOutcome::Unrecognized(1 << 2)
    );

    assert_eq!(state.snapshot(), AnimationState::new().snapshot());
    assert!(lines.with(|l| l.calls().is_empty()));
}

#[test]
fn custom_click_window_is_respected() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let config = ChaseConfig::builder()
        .click_window(TestDuration(400))
        .build()
        .unwrap();
    let mut classifier = ClickClassifier::new(&state, &lines, DeadlineTimer::new(&clock), &config);

    classifier.on_event(ButtonEvent::Speed);
    clock.advance(TestDuration(500));

    assert_eq!(
        classifier.on_event(ButtonEvent::Speed),
        ClickOutcome::WindowExpired
    );
}

#[test]
fn drain_handles_queued_events_in_order() {
    let state = AnimationState::new();
    let lines = SharedLines::new(MockLines::new());
    let clock = MockTimeSource::new();
    let mut classifier = classifier(&state, &lines, &clock);
    let queue: EventQueue<8> = EventQueue::new();

    queue.push(ButtonEvent::Speed).unwrap();
    queue.push(ButtonEvent::Speed).unwrap();
    queue.push(ButtonEvent::Reserved(3)).unwrap();

    let mut outcomes: heapless::Vec<ClickOutcome, 8> = heapless::Vec::new();
    let handled = classifier.drain(&queue, |_, outcome| {
        let _ = outcomes.push(outcome);
    });

    assert_eq!(handled, 3);
    assert!(queue.is_empty());
    assert_eq!(
        &outcomes[..],
        &[
            ClickOutcome::AwaitingSecondClick,
            ClickOutcome::SpeedToggled(Speed::Fast),
            ClickOutcome::Reserved(3),
        ][..]
    );
}
