use std::fmt;

use crate::error::TransitionError;

use super::player::{self, Player, DEFAULT_NAMES};
use super::Equation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Welcome,
    Creating,
    Solving,
    ShowingResult,
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Game controller. Every transition returns a new snapshot and leaves
/// `self` untouched, so a rejected transition never half-applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    phase: GamePhase,
    players: [Player; 2],
    round: u32,
    creator_index: usize,
    equation: Option<Equation>,
    last_result: Option<bool>,
    end_requested: bool,
}

impl GameState {
    /// Create the welcome state
    pub fn initial() -> Self {
        GameState {
            phase: GamePhase::Welcome,
            players: [
                Player::new("", DEFAULT_NAMES[0]),
                Player::new("", DEFAULT_NAMES[1]),
            ],
            round: 1,
            creator_index: 0,
            equation: None,
            last_result: None,
            end_requested: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn creator_index(&self) -> usize {
        self.creator_index
    }

    pub fn solver_index(&self) -> usize {
        player::other(self.creator_index)
    }

    /// Player building the equation this turn
    pub fn creator(&self) -> &Player {
        &self.players[self.creator_index]
    }

    /// Player guessing this turn
    pub fn solver(&self) -> &Player {
        &self.players[self.solver_index()]
    }

    pub fn equation(&self) -> Option<&Equation> {
        self.equation.as_ref()
    }

    /// Whether the last guess balanced the scale; set while showing the result
    pub fn last_result(&self) -> Option<bool> {
        self.last_result
    }

    pub fn end_requested(&self) -> bool {
        self.end_requested
    }

    /// Higher score wins; `None` on a tie
    pub fn winner(&self) -> Option<&Player> {
        let [a, b] = &self.players;
        match a.score().cmp(&b.score()) {
            std::cmp::Ordering::Greater => Some(a),
            std::cmp::Ordering::Less => Some(b),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn expect_phase(
        &self,
        action: &'static str,
        allowed: &[GamePhase],
    ) -> Result<(), TransitionError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(TransitionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    /// Welcome -> Creating. Blank names fall back to "Player 1"/"Player 2".
    pub fn start(&self, name1: &str, name2: &str) -> Result<GameState, TransitionError> {
        self.expect_phase("start", &[GamePhase::Welcome])?;
        Ok(GameState {
            phase: GamePhase::Creating,
            players: [
                Player::new(name1, DEFAULT_NAMES[0]),
                Player::new(name2, DEFAULT_NAMES[1]),
            ],
            ..GameState::initial()
        })
    }

    /// Creating -> Solving with the creator's equation
    pub fn create(&self, equation: Equation) -> Result<GameState, TransitionError> {
        self.expect_phase("create", &[GamePhase::Creating])?;
        Ok(GameState {
            phase: GamePhase::Solving,
            equation: Some(equation),
            ..self.clone()
        })
    }

    /// Solving -> ShowingResult; a correct guess scores for the solver
    pub fn solve(&self, is_correct: bool) -> Result<GameState, TransitionError> {
        self.expect_phase("solve", &[GamePhase::Solving])?;
        let mut next = GameState {
            phase: GamePhase::ShowingResult,
            last_result: Some(is_correct),
            ..self.clone()
        };
        if is_correct {
            next.players[self.solver_index()].award_point();
        }
        Ok(next)
    }

    /// ShowingResult -> Creating, or GameOver when a round just finished
    /// and the end of the game was requested.
    pub fn next_turn(&self) -> Result<GameState, TransitionError> {
        self.expect_phase("advance the turn", &[GamePhase::ShowingResult])?;
        let next_creator = player::other(self.creator_index);
        let round_over = next_creator == 0;

        if round_over && self.end_requested {
            return Ok(GameState {
                phase: GamePhase::GameOver,
                last_result: None,
                ..self.clone()
            });
        }

        Ok(GameState {
            phase: GamePhase::Creating,
            round: if round_over { self.round + 1 } else { self.round },
            creator_index: next_creator,
            equation: None,
            last_result: None,
            ..self.clone()
        })
    }

    /// Ask for the game to end once the current round is over. The flag is
    /// sticky until `reset`.
    pub fn request_end_game(&self) -> Result<GameState, TransitionError> {
        self.expect_phase(
            "request the end of the game",
            &[GamePhase::Solving, GamePhase::ShowingResult],
        )?;
        Ok(GameState {
            end_requested: true,
            ..self.clone()
        })
    }

    /// GameOver -> Welcome with everything reinitialized
    pub fn reset(&self) -> Result<GameState, TransitionError> {
        self.expect_phase("reset", &[GamePhase::GameOver])?;
        Ok(GameState::initial())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
