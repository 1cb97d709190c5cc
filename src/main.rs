use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use spurt::{
    app::{App, AppState},
    error::Error,
    runtime::{EventSource, SprintEvent, TermEvents},
    sentences::{SentencePicker, DEFAULT_SEED, SAMPLE_SENTENCES},
    session::Sprint,
};
use std::{
    error::Error as StdError,
    io::{self, stdin, Write},
};

/// single-sentence typing sprint for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type one pangram sentence as fast and accurately as you can and get your words-per-minute, on both the 5-characters-per-word and the actual-word-count basis."
)]
pub struct Cli {
    /// selector seed; the fixed default picks the same sentence every run
    #[clap(short = 's', long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// seed the selector from OS entropy instead of the fixed default
    #[clap(long)]
    random_seed: bool,

    /// pin an explicit sentence from the pool (0..=14), bypassing the selector
    #[clap(long)]
    sentence: Option<usize>,
}

impl Cli {
    /// Resolves the sample sentence for this run.
    fn choose_prompt(&self) -> Result<String, String> {
        if let Some(idx) = self.sentence {
            return match SAMPLE_SENTENCES.get(idx) {
                Some(s) => Ok(s.to_string()),
                None => Err(format!(
                    "sentence index {idx} out of range (pool has {} entries)",
                    SAMPLE_SENTENCES.len()
                )),
            };
        }

        let mut picker = if self.random_seed {
            SentencePicker::from_entropy()
        } else {
            SentencePicker::new(self.seed)
        };
        Ok(picker.pick().to_string())
    }
}

fn main() -> Result<(), Box<dyn StdError>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let prompt = match cli.choose_prompt() {
        Ok(prompt) => prompt,
        Err(msg) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::ValueValidation, msg).exit();
        }
    };

    let mut terminal = setup_terminal().map_err(Error::BackendUnavailable)?;

    let mut app = App::new(prompt);
    let res = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn StdError>> {
    let events = TermEvents::spawn(Sprint::tick_interval());

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match events.next_event()? {
            SprintEvent::Tick => {
                // The clock only runs while typing; each tick is one fixed
                // 0.1s quantum whether or not a key arrived.
                if app.state == AppState::Typing {
                    app.sprint.on_tick();
                    terminal.draw(|f| f.render_widget(&*app, f.area()))?;
                }
            }
            SprintEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            SprintEvent::Key(key) => {
                if key.code == KeyCode::Esc
                    || (key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c'))
                {
                    break;
                }

                match app.state {
                    AppState::Intro => {
                        // Any key starts; the key itself is not typed.
                        app.start_typing();
                    }
                    AppState::Typing => match key.code {
                        KeyCode::Backspace => {
                            app.sprint.backspace();
                        }
                        KeyCode::Char(c) => {
                            app.sprint.write(c)?;
                            if app.sprint.has_finished() {
                                app.finish();
                                ring_bell();
                                let _ = app.sprint.save_results();
                            }
                        }
                        _ => {}
                    },
                    AppState::Summary => {
                        // Any key exits.
                        break;
                    }
                }

                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
        }
    }

    Ok(())
}

/// Completion beep.
fn ring_bell() {
    let mut out = io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}
