//! Core game logic: the equation engine, the creator/solver input drafts, and
//! the turn/round state machine with immutable transitions.

mod draft;
mod equation;
mod player;
mod state;

pub use draft::{EquationDraft, GuessDraft};
pub use equation::{
    build_equation, evaluate_guess, Candidate, Equation, Evaluation, HiddenPart, Operator, Verdict,
};
pub use player::{Player, DEFAULT_NAMES};
pub use state::{GamePhase, GameState};
