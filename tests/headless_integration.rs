use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use spurt::app::{App, AppState};
use spurt::runtime::{EventSource, SprintEvent, TestEvents};

fn key(code: KeyCode) -> SprintEvent {
    SprintEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

// Drives the same state machine as the binary's event loop, headlessly:
// Intro -> Typing on the first key, clock ticks only while typing,
// Typing -> Summary once input length matches the sentence.
fn drive(app: &mut App, events: &TestEvents) {
    while let Ok(ev) = events.next_event() {
        match ev {
            SprintEvent::Tick => {
                if app.state == AppState::Typing {
                    app.sprint.on_tick();
                }
            }
            SprintEvent::Resize => {}
            SprintEvent::Key(key) => match app.state {
                AppState::Intro => app.start_typing(),
                AppState::Typing => match key.code {
                    KeyCode::Backspace => app.sprint.backspace(),
                    KeyCode::Char(c) => {
                        app.sprint.write(c).unwrap();
                        if app.sprint.has_finished() {
                            app.finish();
                        }
                    }
                    _ => {}
                },
                AppState::Summary => return,
            },
        }
    }
}

#[test]
fn headless_session_produces_quantized_speeds() {
    let prompt = "How vexingly quick daft zebras jump!";
    let mut app = App::new(prompt.to_string());

    let (tx, rx) = mpsc::channel();
    let events = TestEvents::new(rx);

    // Any key leaves the intro screen.
    tx.send(key(KeyCode::Enter)).unwrap();
    // 60 ticks of idle time, then the whole sentence: 600 hundredths on the
    // clock when the last character lands.
    for _ in 0..60 {
        tx.send(SprintEvent::Tick).unwrap();
    }
    for c in prompt.chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    drop(tx);

    drive(&mut app, &events);

    assert_eq!(app.state, AppState::Summary);
    let result = app.sprint.result.expect("summary must carry results");

    // 600 hundredths-of-seconds = 10 hundredths-of-minutes; the sentence is
    // 36 chars / 5 words.
    assert_eq!(result.elapsed_seconds, 6);
    assert_eq!(result.elapsed_remainder_hundredths, 0);
    assert_eq!(result.standard_wpm, 36 * 20 / 10);
    assert_eq!(result.actual_wpm, 5 * 100 / 10);
}

#[test]
fn headless_backspace_corrections_still_complete() {
    let mut app = App::new("abc".to_string());

    let (tx, rx) = mpsc::channel();
    let events = TestEvents::new(rx);

    tx.send(key(KeyCode::Char(' '))).unwrap(); // leave intro
    tx.send(key(KeyCode::Char('a'))).unwrap();
    tx.send(key(KeyCode::Char('x'))).unwrap();
    tx.send(SprintEvent::Tick).unwrap();
    tx.send(key(KeyCode::Backspace)).unwrap();
    tx.send(key(KeyCode::Char('b'))).unwrap();
    tx.send(key(KeyCode::Char('c'))).unwrap();
    drop(tx);

    drive(&mut app, &events);

    assert_eq!(app.state, AppState::Summary);
    assert_eq!(app.sprint.input.as_string(), "abc");
}

#[test]
fn headless_backspace_on_empty_input_is_ignored() {
    let mut app = App::new("ok".to_string());

    let (tx, rx) = mpsc::channel();
    let events = TestEvents::new(rx);

    tx.send(key(KeyCode::Enter)).unwrap();
    tx.send(key(KeyCode::Backspace)).unwrap();
    tx.send(key(KeyCode::Backspace)).unwrap();
    tx.send(key(KeyCode::Char('o'))).unwrap();
    tx.send(key(KeyCode::Char('k'))).unwrap();
    drop(tx);

    drive(&mut app, &events);

    assert_eq!(app.state, AppState::Summary);
    assert_eq!(app.sprint.input.as_string(), "ok");
}

#[test]
fn headless_clock_accumulates_only_while_typing() {
    let mut app = App::new("hi".to_string());

    let (tx, rx) = mpsc::channel();
    let events = TestEvents::new(rx);

    // Ticks before the intro key must not advance the clock.
    for _ in 0..10 {
        tx.send(SprintEvent::Tick).unwrap();
    }
    tx.send(key(KeyCode::Enter)).unwrap();
    for _ in 0..3 {
        tx.send(SprintEvent::Tick).unwrap();
    }
    tx.send(key(KeyCode::Char('h'))).unwrap();
    tx.send(key(KeyCode::Char('i'))).unwrap();
    // Ticks after completion must not advance it either.
    for _ in 0..10 {
        tx.send(SprintEvent::Tick).unwrap();
    }
    drop(tx);

    drive(&mut app, &events);

    assert_eq!(app.state, AppState::Summary);
    assert_eq!(app.sprint.elapsed_hundredths(), 30);
}

#[test]
fn headless_resize_does_not_disturb_the_session() {
    let mut app = App::new("hi".to_string());

    let (tx, rx) = mpsc::channel();
    let events = TestEvents::new(rx);

    tx.send(key(KeyCode::Enter)).unwrap();
    tx.send(key(KeyCode::Char('h'))).unwrap();
    tx.send(SprintEvent::Resize).unwrap();
    tx.send(SprintEvent::Tick).unwrap();
    tx.send(key(KeyCode::Char('i'))).unwrap();
    drop(tx);

    drive(&mut app, &events);

    assert_eq!(app.state, AppState::Summary);
    assert_eq!(app.sprint.elapsed_hundredths(), 10);
}
