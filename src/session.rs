use crate::error::Result;
use crate::text::{count_words, InputBuffer};
use crate::{TICK_HUNDREDTHS, TICK_RATE_MS};
use chrono::prelude::*;
use directories::ProjectDirs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Speed metrics derived once, at session end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedResult {
    /// WPM on the 5-characters-per-word basis.
    pub standard_wpm: u32,
    /// WPM on the actual word count of the sentence.
    pub actual_wpm: u32,
    pub elapsed_seconds: u32,
    /// Leftover hundredths after whole seconds, for "s.hh" display.
    pub elapsed_remainder_hundredths: u32,
}

/// One typing session: the sample sentence, everything typed so far, and a
/// clock that accumulates in fixed 0.1 s ticks.
#[derive(Debug)]
pub struct Sprint {
    pub prompt: String,
    pub input: InputBuffer,
    elapsed_hundredths: u32,
    pub result: Option<SpeedResult>,
}

impl Sprint {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            input: InputBuffer::default(),
            elapsed_hundredths: 0,
            result: None,
        }
    }

    pub fn prompt_len(&self) -> usize {
        self.prompt.chars().count()
    }

    /// The expected character at `idx`. Callers stay within the prompt
    /// because input never grows past it.
    pub fn expected_char(&self, idx: usize) -> Option<char> {
        self.prompt.chars().nth(idx)
    }

    /// Appends one typed character. Ignored once the sentence is fully
    /// typed; rejected (BufferOverflow) if the buffer is somehow full.
    pub fn write(&mut self, c: char) -> Result<()> {
        if self.has_finished() {
            return Ok(());
        }
        self.input.push(c)
    }

    /// Trims one character. Silently ignored at index 0.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Advances the clock by one poll interval. Called once per tick whether
    /// or not a key arrived, so measured time is tick-quantized at 0.1 s
    /// resolution.
    pub fn on_tick(&mut self) {
        self.elapsed_hundredths += TICK_HUNDREDTHS;
    }

    pub fn elapsed_hundredths(&self) -> u32 {
        self.elapsed_hundredths
    }

    pub fn tick_interval() -> Duration {
        Duration::from_millis(TICK_RATE_MS)
    }

    pub fn has_finished(&self) -> bool {
        self.input.len() == self.prompt_len()
    }

    /// Computes both WPM metrics from the accumulated clock and the sample
    /// sentence, and remembers them for the summary view.
    pub fn calc_results(&mut self) -> SpeedResult {
        let result = compute_speed(
            self.elapsed_hundredths,
            self.prompt_len() as u32,
            count_words(&self.prompt) as u32,
        );
        self.result = Some(result);
        result
    }

    /// Appends one CSV row to the results log under the platform config
    /// dir. Best effort: callers discard the error rather than spoil the
    /// summary screen.
    pub fn save_results(&self) -> io::Result<()> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "spurt") {
            let config_dir = proj_dirs.config_dir();
            std::fs::create_dir_all(config_dir)?;
            self.write_log(&config_dir.join("log.csv"))?;
        }
        Ok(())
    }

    /// Log-writing split out so tests can point it at a temp dir.
    pub fn write_log(&self, log_path: &Path) -> io::Result<()> {
        let result = match self.result {
            Some(r) => r,
            None => return Ok(()),
        };

        // If the log doesn't exist yet, we need to emit a header
        let needs_header = !log_path.exists();

        let mut log_file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(log_path)?;

        if needs_header {
            writeln!(
                log_file,
                "date,chars,words,elapsed_secs,standard_wpm,actual_wpm"
            )?;
        }

        writeln!(
            log_file,
            "{},{},{},{}.{:02},{},{}",
            Local::now().format("%c"),
            self.prompt_len(),
            count_words(&self.prompt),
            result.elapsed_seconds,
            result.elapsed_remainder_hundredths,
            result.standard_wpm,
            result.actual_wpm,
        )?;

        Ok(())
    }
}

/// Integer floor arithmetic throughout. The denominator is hundredths of a
/// minute; clamping it to 1 keeps sub-0.6 s sessions from dividing by zero,
/// at the documented cost of inflated WPM for such sessions.
pub fn compute_speed(elapsed_hundredths: u32, char_count: u32, word_count: u32) -> SpeedResult {
    let minutes_hundredths = (elapsed_hundredths / 60).max(1);

    // 1 standard word = 5 characters, so each character is 20 word-hundredths.
    let standard_word_units = char_count * 20;
    let actual_word_units = word_count * 100;

    SpeedResult {
        standard_wpm: standard_word_units / minutes_hundredths,
        actual_wpm: actual_word_units / minutes_hundredths,
        elapsed_seconds: elapsed_hundredths / 100,
        elapsed_remainder_hundredths: elapsed_hundredths % 100,
    }
}
