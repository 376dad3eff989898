//! TUI application state and logic

use crate::commands::{SessionStats, new_round};
use crate::config::GameConfig;
use crate::core::{Guess, GuessOutcome, Round};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and deal the first secret
    ///
    /// # Errors
    ///
    /// Propagates failures from secret generation.
    pub fn new(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let round = new_round(&config, &mut rng)?;

        Ok(Self {
            config,
            round,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "I have thought up a {}-digit hex code with no repeated digits.",
                        config.digits()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Right = right digit, right place | Pico = right digit, wrong place"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: SessionStats::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        })
    }

    /// Accept a typed character if it can be part of a guess
    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < self.config.digits() && c.is_ascii_hexdigit() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = match Guess::parse(&self.input_buffer, self.config.digits()) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        let text = guess.text();
        let outcome = match self.round.submit(guess) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.stats.record(&outcome);

        match outcome {
            GuessOutcome::Scored(clues) => {
                self.add_message(&format!("{text}: {clues}"), MessageStyle::Info);
            }
            GuessOutcome::Won { attempts } => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("You got it! {text} in {attempts} guesses."),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            GuessOutcome::Exhausted(clues) => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(&format!("{text}: {clues}"), MessageStyle::Info);
                let answer = self
                    .round
                    .reveal()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                self.add_message(
                    &format!("Out of guesses. The answer was {answer}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        match new_round(&self.config, &mut self.rng) {
            Ok(round) => {
                self.round = round;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    "New round! I have thought up another code.",
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored before a
/// session error is returned.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let stats = res?;
    debug!(
        played = stats.rounds_played,
        won = stats.rounds_won,
        "session finished"
    );
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: App,
) -> Result<SessionStats> {
    run_with_events(terminal, app, event::read)
}

fn run_with_events<B, E>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut next_event: E,
) -> Result<SessionStats>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Char('q') => {
                    app.should_quit = true;
                }
                _ => match app.input_mode {
                    InputMode::RoundOver => {
                        if key.code == KeyCode::Char('n') {
                            app.new_game();
                        }
                    }
                    InputMode::Guessing => match key.code {
                        KeyCode::Char(c) => app.push_char(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_guess(),
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
