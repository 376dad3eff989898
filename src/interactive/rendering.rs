//! TUI rendering with ratatui
//!
//! Layout: header, guess history and info panels, input box, status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Clue, RoundState};
use crate::output::formatters::clue_markers;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Guess history
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 PICO - Hex Code Guessing Game")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.round.history();

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No guesses yet")]
    } else {
        history
            .iter()
            .enumerate()
            .map(|(i, (guess, clues))| {
                let clue_spans = if clues.is_bagels() {
                    vec![Span::styled("Bagels", Style::default().fg(Color::DarkGray))]
                } else {
                    clues
                        .clues()
                        .iter()
                        .map(|clue| {
                            let color = match clue {
                                Clue::Right => Color::Green,
                                Clue::Pico => Color::Yellow,
                            };
                            Span::styled(clue.as_str(), Style::default().fg(color))
                        })
                        .collect()
                };

                let mut spans = vec![
                    Span::styled(
                        format!("{:>3}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        guess.text(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}  ", clue_markers(clues))),
                ];
                spans.extend(clue_spans);
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(6), // Clue legend
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_rules(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.round.attempts();
    let max = app.round.max_guesses();
    let percent = ((used * 100) / max).min(100) as u16;

    let color = match app.round.state() {
        RoundState::Won => Color::Green,
        RoundState::Exhausted => Color::Red,
        RoundState::AwaitingGuess => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{max} used | {} left", app.round.remaining()));

    f.render_widget(gauge, area);
}

fn render_rules(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::styled("Right  ", Style::default().fg(Color::Green)),
            Span::raw("right digit, right place"),
        ]),
        Line::from(vec![
            Span::styled("Pico   ", Style::default().fg(Color::Yellow)),
            Span::raw("right digit, wrong place"),
        ]),
        Line::from(vec![
            Span::styled("Bagels ", Style::default().fg(Color::DarkGray)),
            Span::raw("no digit is correct"),
        ]),
        Line::from("Clues are sorted, not positional."),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Clues ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.input_mode {
        InputMode::RoundOver => {
            " Round over | Press 'n' for a new round or 'q' to quit ".to_string()
        }
        InputMode::Guessing => format!(
            " Guess #{} ({} hex digits) | Enter to submit ",
            app.round.attempts() + 1,
            app.round.code_length()
        ),
    };
    let color = match app.round.state() {
        RoundState::Won => Color::Green,
        RoundState::Exhausted => Color::Red,
        RoundState::AwaitingGuess => Color::Yellow,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let digits_text = format!(
        "Digits: {} | Guesses: {}",
        app.config.digits(),
        app.config.max_guesses()
    );
    f.render_widget(
        Paragraph::new(digits_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate() * 100.0
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let average_text = app
        .stats
        .average_guesses()
        .map_or_else(|| "Avg: -".to_string(), |avg| format!("Avg: {avg:.1} guesses"));
    f.render_widget(
        Paragraph::new(average_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Round",
        InputMode::Guessing => "q/Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
