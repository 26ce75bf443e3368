use std::io;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::error::{EquationError, TransitionError};
use crate::game::{EquationDraft, Evaluation, GameState, GamePhase, GuessDraft, HiddenPart, Operator};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

use super::text::Messages;
use super::text_field::TextField;

const NAME_MAX_LEN: usize = 20;
const NUMBER_MAX_LEN: usize = 6;

/// A solve that fires once the scale has had time to tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PendingReveal {
    due: Instant,
    correct: bool,
}

pub struct App {
    pub(super) config: AppConfig,
    pub(super) game_state: GameState,
    /// Focused field on two-field forms (names, operands)
    pub(super) focus: usize,
    pub(super) name_fields: [TextField; 2],
    pub(super) operand_fields: [TextField; 2],
    pub(super) operator: Option<Operator>,
    pub(super) hidden: HiddenPart,
    pub(super) guess_field: TextField,
    pub(super) guess_operator: Option<Operator>,
    /// Guess shown on the scale, kept until the next turn
    pub(super) evaluation: Option<Evaluation>,
    pub(super) pending_reveal: Option<PendingReveal>,
    pub(super) error: Option<EquationError>,
    prefill: [String; 2],
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            game_state: GameState::initial(),
            focus: 0,
            name_fields: [TextField::text(NAME_MAX_LEN), TextField::text(NAME_MAX_LEN)],
            operand_fields: [
                TextField::numeric(NUMBER_MAX_LEN),
                TextField::numeric(NUMBER_MAX_LEN),
            ],
            operator: None,
            hidden: HiddenPart::First,
            guess_field: TextField::numeric(NUMBER_MAX_LEN),
            guess_operator: None,
            evaluation: None,
            pending_reveal: None,
            error: None,
            prefill: [String::new(), String::new()],
            should_quit: false,
        }
    }

    /// Prefill the welcome form, also after every reset
    pub fn with_player_names(mut self, name1: &str, name2: &str) -> Self {
        self.prefill = [name1.to_string(), name2.to_string()];
        self.fill_name_fields();
        self
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn messages(&self) -> &'static Messages {
        self.config.ui.locale.messages()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events(tick_rate)?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self, tick_rate: Duration) -> io::Result<()> {
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Fire the pending reveal once its delay has passed
    pub fn tick(&mut self, now: Instant) {
        let Some(reveal) = self.pending_reveal else {
            return;
        };
        if now >= reveal.due {
            self.pending_reveal = None;
            let next = self.game_state.solve(reveal.correct);
            self.apply(next);
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            self.should_quit = true;
            return;
        }

        match self.game_state.phase() {
            GamePhase::Welcome => self.handle_welcome_key(key.code),
            GamePhase::Creating => self.handle_create_key(key.code),
            GamePhase::Solving => self.handle_solve_key(key.code),
            GamePhase::ShowingResult => self.handle_result_key(key.code),
            GamePhase::GameOver => self.handle_game_over_key(key.code),
        }
    }

    fn handle_welcome_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = 1 - self.focus;
            }
            KeyCode::Enter => self.start_game(),
            other => {
                self.name_fields[self.focus].handle_key(other);
            }
        }
    }

    fn handle_create_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = 1 - self.focus;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.hidden = self.hidden.toggle();
            }
            KeyCode::Enter => self.submit_equation(),
            KeyCode::Char(c) if Operator::from_symbol(c).is_some() => {
                self.operator = Operator::from_symbol(c);
                self.error = self.equation_draft().live_error();
            }
            other => {
                if self.operand_fields[self.focus].handle_key(other) {
                    self.error = self.equation_draft().live_error();
                }
            }
        }
    }

    fn handle_solve_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Char('e') | KeyCode::Char('E')) {
            self.request_end_game();
            return;
        }
        // the scale is tilting, wait for the reveal
        if self.pending_reveal.is_some() {
            return;
        }

        match code {
            KeyCode::Enter => self.submit_guess(Instant::now()),
            KeyCode::Char(c) if Operator::from_symbol(c).is_some() => {
                self.guess_operator = Operator::from_symbol(c);
            }
            other => {
                self.guess_field.handle_key(other);
            }
        }
    }

    fn handle_result_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
                let next = self.game_state.next_turn();
                self.apply(next);
                self.clear_turn();
                if self.game_state.phase() == GamePhase::GameOver {
                    tracing::info!(round = self.game_state.round(), "game over");
                }
            }
            KeyCode::Char('e') | KeyCode::Char('E') => self.request_end_game(),
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')) {
            let next = self.game_state.reset();
            self.apply(next);
            self.focus = 0;
            self.fill_name_fields();
        }
    }

    pub(super) fn equation_draft(&self) -> EquationDraft {
        EquationDraft {
            num1: self.operand_fields[0].value().to_string(),
            num2: self.operand_fields[1].value().to_string(),
            operator: self.operator,
            hidden: self.hidden,
        }
    }

    fn guess_draft(&self) -> GuessDraft {
        GuessDraft {
            number: self.guess_field.value().to_string(),
            operator: self.guess_operator,
        }
    }

    fn start_game(&mut self) {
        let msgs = self.messages();
        let overrides = [&self.config.game.player1_name, &self.config.game.player2_name];
        let names: Vec<String> = (0..2)
            .map(|i| {
                let typed = self.name_fields[i].value().trim();
                if typed.is_empty() {
                    overrides[i].as_deref().unwrap_or(msgs.default_names[i]).to_string()
                } else {
                    typed.to_string()
                }
            })
            .collect();

        let (player1, player2) = (&names[0], &names[1]);
        let next = self.game_state.start(player1, player2);
        self.apply(next);
        self.focus = 0;
        tracing::info!(%player1, %player2, "game started");
    }

    fn submit_equation(&mut self) {
        match self.equation_draft().submit() {
            Ok(equation) => {
                tracing::debug!(
                    round = self.game_state.round(),
                    creator = self.game_state.creator_index(),
                    "equation created"
                );
                let next = self.game_state.create(equation);
                self.apply(next);
                self.clear_turn();
            }
            Err(err) => {
                tracing::debug!(error = %err, "equation rejected");
                self.error = Some(err);
            }
        }
    }

    fn submit_guess(&mut self, now: Instant) {
        let Some(equation) = self.game_state.equation() else {
            return;
        };
        match self.guess_draft().submit(equation) {
            Ok(evaluation) => {
                tracing::debug!(
                    verdict = ?evaluation.verdict,
                    candidate = %evaluation.candidate,
                    "guess evaluated"
                );
                self.error = None;
                self.evaluation = Some(evaluation);
                self.pending_reveal = Some(PendingReveal {
                    due: now + Duration::from_millis(self.config.game.reveal_delay_ms),
                    correct: evaluation.is_correct(),
                });
            }
            Err(err) => {
                tracing::debug!(error = %err, "guess rejected");
                self.error = Some(err);
            }
        }
    }

    fn request_end_game(&mut self) {
        if self.game_state.end_requested() {
            return;
        }
        let next = self.game_state.request_end_game();
        self.apply(next);
        tracing::info!(round = self.game_state.round(), "end of game requested");
    }

    /// Swap in the next snapshot; a rejected transition keeps the current one
    fn apply(&mut self, next: Result<GameState, TransitionError>) {
        match next {
            Ok(state) => {
                tracing::debug!(from = %self.game_state.phase(), to = %state.phase(), "transition");
                self.game_state = state;
            }
            Err(err) => tracing::warn!(error = %err, "transition rejected"),
        }
    }

    /// Reset the per-turn forms
    fn clear_turn(&mut self) {
        for field in &mut self.operand_fields {
            field.clear();
        }
        self.operator = None;
        self.hidden = HiddenPart::First;
        self.guess_field.clear();
        self.guess_operator = None;
        self.evaluation = None;
        self.pending_reveal = None;
        self.error = None;
        self.focus = 0;
    }

    fn fill_name_fields(&mut self) {
        for (field, name) in self.name_fields.iter_mut().zip(&self.prefill) {
            *field = TextField::text(NAME_MAX_LEN).with_value(name);
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
