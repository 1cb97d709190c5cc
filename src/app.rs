use crate::session::Sprint;

/// Session state machine: Intro shows the sentence and waits for a key,
/// Typing collects input until it matches the sentence length, Summary shows
/// the speeds and waits for a key before exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Intro,
    Typing,
    Summary,
}

#[derive(Debug)]
pub struct App {
    pub sprint: Sprint,
    pub state: AppState,
}

impl App {
    pub fn new(prompt: String) -> Self {
        Self {
            sprint: Sprint::new(prompt),
            state: AppState::Intro,
        }
    }

    /// Intro -> Typing. The key that starts the session is consumed, not
    /// typed.
    pub fn start_typing(&mut self) {
        if self.state == AppState::Intro {
            self.state = AppState::Typing;
        }
    }

    /// Typing -> Summary once the sentence is fully typed; computes the
    /// speed metrics on the way.
    pub fn finish(&mut self) {
        if self.state == AppState::Typing && self.sprint.has_finished() {
            self.sprint.calc_results();
            self.state = AppState::Summary;
        }
    }
}
