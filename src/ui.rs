use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, AppState};
use crate::format::{format_int, format_time};
use crate::session::Sprint;

const HORIZONTAL_MARGIN: u16 = 5;

/// Sentence, cursor and echo rows all start at this column.
const CURSOR_HOME_COL: usize = 2;

/// Narrow-display guard: the cursor indicator is pinned at this column even
/// when the typed text extends further right. Cosmetic for sentences longer
/// than 37 characters, kept deliberately.
const CURSOR_COL_LIMIT: usize = 39;

/// Column of the cursor indicator for the given input length.
pub fn cursor_column(input_len: usize) -> usize {
    (CURSOR_HOME_COL + input_len).min(CURSOR_COL_LIMIT)
}

fn indent() -> Span<'static> {
    Span::raw(" ".repeat(CURSOR_HOME_COL))
}

fn intro_lines(prompt: &str) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let italic = Style::default().add_modifier(Modifier::ITALIC);

    vec![
        Line::from(vec![
            indent(),
            Span::styled("Typing Speed Game".to_string(), bold),
        ]),
        Line::default(),
        Line::from(vec![
            indent(),
            Span::raw("Type the following sentence as fast as you can:".to_string()),
        ]),
        Line::default(),
        Line::from(vec![indent(), Span::styled(prompt.to_string(), bold)]),
        Line::default(),
        Line::from(vec![
            indent(),
            Span::styled("Press any key to start...".to_string(), italic),
        ]),
    ]
}

fn typing_lines(sprint: &Sprint) -> Vec<Line<'static>> {
    let dim_italic = Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC);
    // Correct cells are white on green, incorrect white on red, and what is
    // still to type stays plain.
    let correct = Style::default().fg(Color::White).bg(Color::Green);
    let incorrect = Style::default().fg(Color::White).bg(Color::Red);
    let pending = Style::default().fg(Color::White);
    let cursor = Style::default().fg(Color::Black).bg(Color::Yellow);

    // Every cell is recomputed on each refresh; correctness is never stored.
    let typed = sprint.input.chars();
    let mut sentence = vec![indent()];
    for (i, sample_char) in sprint.prompt.chars().enumerate() {
        let style = match typed.get(i) {
            Some(c) if *c == sample_char => correct,
            Some(_) => incorrect,
            None => pending,
        };
        sentence.push(Span::styled(sample_char.to_string(), style));
    }

    let cursor_line = Line::from(vec![
        Span::raw(" ".repeat(cursor_column(typed.len()))),
        Span::styled(" ".to_string(), cursor),
    ]);

    vec![
        Line::from(vec![
            indent(),
            Span::styled(
                "Type the sentence below as fast and accurately as you can:".to_string(),
                dim_italic,
            ),
        ]),
        Line::default(),
        Line::from(sentence),
        Line::default(),
        cursor_line,
        Line::default(),
        Line::from(vec![
            indent(),
            Span::raw("Your typing: ".to_string()),
            Span::raw(sprint.input.as_string()),
        ]),
    ]
}

fn summary_lines(sprint: &Sprint) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let green_bold = bold.fg(Color::Green);
    let italic = Style::default().add_modifier(Modifier::ITALIC);

    let result = match sprint.result {
        Some(r) => r,
        None => {
            return vec![Line::from(vec![
                indent(),
                Span::raw("No results available.".to_string()),
            ])]
        }
    };

    let standard = format_int(i64::from(result.standard_wpm)).unwrap_or_default();
    let actual = format_int(i64::from(result.actual_wpm)).unwrap_or_default();

    vec![
        Line::from(vec![
            indent(),
            Span::styled("Sentence completed!".to_string(), green_bold),
        ]),
        Line::default(),
        Line::from(vec![
            indent(),
            Span::raw("Your typing speed is: ".to_string()),
            Span::styled(format!("{standard} WPM (standard)"), bold),
        ]),
        Line::from(vec![
            indent(),
            Span::raw("Your typing speed is: ".to_string()),
            Span::styled(format!("{actual} WPM (actual words)"), bold),
        ]),
        Line::from(vec![
            indent(),
            Span::raw("Time taken: ".to_string()),
            Span::styled(
                format_time(
                    u64::from(result.elapsed_seconds),
                    u64::from(result.elapsed_remainder_hundredths),
                ),
                bold,
            ),
        ]),
        Line::default(),
        Line::from(vec![
            indent(),
            Span::styled("Press any key to exit...".to_string(), italic),
        ]),
    ]
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.state {
            AppState::Intro => intro_lines(&self.sprint.prompt),
            AppState::Typing => typing_lines(&self.sprint),
            AppState::Summary => summary_lines(&self.sprint),
        };

        // Rough vertical centering: account for the prompt wrapping on
        // narrow terminals when sizing the top padding.
        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_rows = (self.sprint.prompt.width() as f64 / max_chars_per_line as f64).ceil();
        let content_height = lines.len() as u16 + prompt_rows as u16;
        let top_padding = area.height.saturating_sub(content_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([Constraint::Length(top_padding), Constraint::Min(1)].as_ref())
            .split(area);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(chunks[1], buf);
    }
}
