//! User-facing strings in every supported language.

use crate::error::{EquationError, GuessProblem, OperandProblem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Pt => &PT,
        }
    }
}

/// Message table for one locale.
pub struct Messages {
    pub title: &'static str,
    pub tagline: &'static str,
    pub welcome_heading: &'static str,
    pub welcome_body: &'static str,
    pub player_label: [&'static str; 2],
    pub default_names: [&'static str; 2],
    pub round: &'static str,
    pub points: &'static str,
    pub create_prompt: &'static str,
    pub solve_prompt: &'static str,
    pub build_heading: &'static str,
    pub hide_heading: &'static str,
    pub hidden_labels: [&'static str; 2],
    pub your_answer: &'static str,
    pub number: &'static str,
    pub operation: &'static str,
    pub checking: &'static str,
    pub balanced: &'static str,
    pub unbalanced: &'static str,
    pub end_game_pending: &'static str,
    pub game_over: &'static str,
    pub winner: &'static str,
    pub tie: &'static str,
    pub final_score: &'static str,
    pub controls_welcome: &'static str,
    pub controls_create: &'static str,
    pub controls_solve: &'static str,
    pub controls_result: &'static str,
    pub controls_game_over: &'static str,
    pub err_incomplete: &'static str,
    pub err_non_positive_operand: &'static str,
    pub err_negative_difference: &'static str,
    pub err_inexact_quotient: &'static str,
    pub err_out_of_range: &'static str,
    pub err_guess_missing: &'static str,
    pub err_guess_not_positive: &'static str,
}

impl Messages {
    /// Inline text for a validation error
    pub fn error_text(&self, err: &EquationError) -> &'static str {
        match err {
            EquationError::IncompleteInput => self.err_incomplete,
            EquationError::InvalidOperands(problem) => match problem {
                OperandProblem::NonPositive => self.err_non_positive_operand,
                OperandProblem::NegativeDifference => self.err_negative_difference,
                OperandProblem::InexactQuotient => self.err_inexact_quotient,
                OperandProblem::OutOfRange => self.err_out_of_range,
            },
            EquationError::InvalidGuess(problem) => match problem {
                GuessProblem::Missing => self.err_guess_missing,
                GuessProblem::NotPositive => self.err_guess_not_positive,
            },
        }
    }
}

static EN: Messages = Messages {
    title: "The Number Balance",
    tagline: "A game for practicing algebraic thinking.",
    welcome_heading: "Welcome, challengers!",
    welcome_body: "Get ready for a challenge of logic and math. Enter your names to start and balance the scale of knowledge!",
    player_label: ["Player 1 name", "Player 2 name"],
    default_names: ["Player 1", "Player 2"],
    round: "Round",
    points: "pts",
    create_prompt: "create a challenge!",
    solve_prompt: "balance the scale!",
    build_heading: "1. Build your equation",
    hide_heading: "2. Which number to hide?",
    hidden_labels: ["1st number", "2nd number"],
    your_answer: "Your answer",
    number: "Number",
    operation: "Operation",
    checking: "Weighing...",
    balanced: "The scale is balanced! A point for you!",
    unbalanced: "Oops! The scale did not balance. Better luck next time.",
    end_game_pending: "The game will end at the end of this round!",
    game_over: "Game over!",
    winner: "Congratulations, {}! You won!",
    tie: "Amazing! It's a tie!",
    final_score: "Final score",
    controls_welcome: "Tab: Switch field  |  Enter: Start  |  Esc: Quit",
    controls_create: "Tab: Switch number  |  + - * /: Operation  |  H: Hide other number  |  Enter: Create  |  Esc: Quit",
    controls_solve: "Digits: Number  |  + - * /: Operation  |  Enter: Check  |  E: End after this round  |  Esc: Quit",
    controls_result: "Enter/N: Next turn  |  E: End after this round  |  Esc: Quit",
    controls_game_over: "Enter/R: Play again  |  Esc: Quit",
    err_incomplete: "Every field of the equation must be filled in.",
    err_non_positive_operand: "Numbers must be greater than zero.",
    err_negative_difference: "In a subtraction the 1st number must be greater than or equal to the 2nd.",
    err_inexact_quotient: "The division must have a whole result.",
    err_out_of_range: "That number is too large.",
    err_guess_missing: "You need to choose a number and an operation.",
    err_guess_not_positive: "The number must be greater than zero.",
};

static PT: Messages = Messages {
    title: "A Balança dos Números",
    tagline: "Um jogo para praticar o pensamento algébrico.",
    welcome_heading: "Bem-vindos, desafiantes!",
    welcome_body: "Preparem-se para um desafio de lógica e matemática. Insiram seus nomes para começar a aventura e equilibrar a balança do conhecimento!",
    player_label: ["Nome do Jogador 1", "Nome do Jogador 2"],
    default_names: ["Jogador 1", "Jogador 2"],
    round: "Rodada",
    points: "pts",
    create_prompt: "crie um desafio!",
    solve_prompt: "equilibre a balança!",
    build_heading: "1. Monte a sua equação",
    hide_heading: "2. Qual número esconder?",
    hidden_labels: ["1º Número", "2º Número"],
    your_answer: "Sua resposta",
    number: "Número",
    operation: "Operação",
    checking: "Pesando...",
    balanced: "Balança equilibrada! Ponto para você!",
    unbalanced: "Ops! A balança não equilibrou. Tente na próxima.",
    end_game_pending: "O jogo terminará no final desta rodada!",
    game_over: "Fim de jogo!",
    winner: "Parabéns, {}! Você venceu!",
    tie: "Incrível! Foi um empate!",
    final_score: "Placar final",
    controls_welcome: "Tab: Trocar campo  |  Enter: Começar  |  Esc: Sair",
    controls_create: "Tab: Trocar número  |  + - * /: Operação  |  H: Esconder o outro  |  Enter: Criar  |  Esc: Sair",
    controls_solve: "Dígitos: Número  |  + - * /: Operação  |  Enter: Verificar  |  E: Acabar nesta rodada  |  Esc: Sair",
    controls_result: "Enter/N: Próximo turno  |  E: Acabar nesta rodada  |  Esc: Sair",
    controls_game_over: "Enter/R: Jogar novamente  |  Esc: Sair",
    err_incomplete: "Todos os campos da equação devem ser preenchidos.",
    err_non_positive_operand: "Os números devem ser maiores que zero.",
    err_negative_difference: "O 1º número deve ser maior ou igual ao 2º na subtração.",
    err_inexact_quotient: "A divisão deve ter um resultado inteiro.",
    err_out_of_range: "Esse número é grande demais.",
    err_guess_missing: "Você precisa escolher um número e uma operação.",
    err_guess_not_positive: "O número deve ser maior que zero.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_selects_table() {
        assert_eq!(Locale::En.messages().round, "Round");
        assert_eq!(Locale::Pt.messages().round, "Rodada");
    }

    #[test]
    fn test_error_text() {
        let msgs = Locale::Pt.messages();
        assert_eq!(
            msgs.error_text(&EquationError::InvalidOperands(
                OperandProblem::InexactQuotient
            )),
            "A divisão deve ter um resultado inteiro."
        );
        assert_eq!(
            Locale::En
                .messages()
                .error_text(&EquationError::InvalidGuess(GuessProblem::Missing)),
            "You need to choose a number and an operation."
        );
    }

    #[test]
    fn test_winner_template_has_placeholder() {
        for locale in [Locale::En, Locale::Pt] {
            assert!(locale.messages().winner.contains("{}"));
        }
    }
}
