use crate::game::{Equation, Evaluation, GamePhase, GameState, HiddenPart, Operator};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::balance_widget::{render_balance, Tilt};
use super::text::Messages;
use super::text_field::TextField;

const PLAYER_COLORS: [Color; 2] = [Color::Cyan, Color::Magenta];

pub fn render(frame: &mut Frame, app: &App) {
    let msgs = app.messages();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(16),  // Phase content
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_title(frame, msgs, chunks[0]);

    let state = app.game_state();
    let controls = match state.phase() {
        GamePhase::Welcome => {
            render_welcome(frame, app, chunks[1]);
            msgs.controls_welcome
        }
        GamePhase::Creating => {
            render_in_game(frame, app, chunks[1], render_create);
            msgs.controls_create
        }
        GamePhase::Solving => {
            render_in_game(frame, app, chunks[1], render_solve);
            msgs.controls_solve
        }
        GamePhase::ShowingResult => {
            render_in_game(frame, app, chunks[1], render_result);
            msgs.controls_result
        }
        GamePhase::GameOver => {
            render_game_over(frame, state, msgs, chunks[1]);
            msgs.controls_game_over
        }
    };

    render_message(frame, app, chunks[2]);
    render_controls(frame, app, controls, chunks[3]);
}

fn render_title(frame: &mut Frame, msgs: &Messages, area: Rect) {
    let title = Paragraph::new(msgs.tagline)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(msgs.title).centered())
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(title, area);
}

fn render_field(frame: &mut Frame, field: &TextField, label: &str, focused: bool, area: Rect) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let mut text = field.value().to_string();
    if focused {
        text.push('▏');
    }
    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(label.to_string()),
    );
    frame.render_widget(widget, area);
}

fn render_welcome(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = app.messages();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Greeting
            Constraint::Length(3), // Player 1
            Constraint::Length(3), // Player 2
            Constraint::Min(0),
        ])
        .split(centered(area, 60));

    let greeting = Paragraph::new(vec![
        Line::styled(
            msgs.welcome_heading,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(msgs.welcome_body, Style::default().fg(Color::Gray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(greeting, rows[0]);

    for i in 0..2 {
        render_field(
            frame,
            &app.name_fields[i],
            msgs.player_label[i],
            app.focus == i,
            rows[i + 1],
        );
    }
}

/// Scoreboard header plus the phase body.
fn render_in_game(frame: &mut Frame, app: &App, area: Rect, body: fn(&mut Frame, &App, Rect)) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(10)])
        .split(area);

    render_scoreboard(frame, app, rows[0]);
    body(frame, app, rows[1]);
}

fn render_scoreboard(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = app.messages();
    let state = app.game_state();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    for (i, (col, align)) in [(cols[0], Alignment::Left), (cols[2], Alignment::Right)]
        .into_iter()
        .enumerate()
    {
        let player = &state.players()[i];
        let widget = Paragraph::new(vec![
            Line::styled(
                player.name().to_string(),
                Style::default()
                    .fg(PLAYER_COLORS[i])
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("{} {}", player.score(), msgs.points)),
        ])
        .alignment(align);
        frame.render_widget(widget, col);
    }

    let prompt = match state.phase() {
        GamePhase::Creating => Some((state.creator(), msgs.create_prompt)),
        GamePhase::Solving => Some((state.solver(), msgs.solve_prompt)),
        _ => None,
    };
    let mut center = vec![Line::styled(
        format!("{} {}", msgs.round, state.round()),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some((player, text)) = prompt {
        center.push(Line::from(vec![
            Span::styled(
                player.name().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(", {text}")),
        ]));
    }
    frame.render_widget(
        Paragraph::new(center).alignment(Alignment::Center),
        cols[1],
    );
}

fn operator_line(selected: Option<Operator>) -> Line<'static> {
    let mut spans = Vec::new();
    for op in Operator::ALL {
        let color = match op {
            Operator::Add => Color::Green,
            Operator::Subtract => Color::Red,
            Operator::Multiply => Color::Blue,
            Operator::Divide => Color::Yellow,
        };
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if selected == Some(op) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {op} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_create(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = app.messages();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // 1. Equation: [num1] op [num2] = preview
    let block = Block::default()
        .borders(Borders::ALL)
        .title(msgs.build_heading);
    let inner = block.inner(cols[0]);
    frame.render_widget(block, cols[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    let eq_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(rows[0]);

    render_field(frame, &app.operand_fields[0], "", app.focus == 0, eq_cols[0]);
    let op_symbol = app.operator.map_or('?', Operator::symbol);
    frame.render_widget(
        Paragraph::new(format!("\n{op_symbol}")).alignment(Alignment::Center),
        eq_cols[1],
    );
    render_field(frame, &app.operand_fields[1], "", app.focus == 1, eq_cols[2]);
    frame.render_widget(
        Paragraph::new("\n=").alignment(Alignment::Center),
        eq_cols[3],
    );
    let preview = app
        .equation_draft()
        .preview()
        .map_or_else(|| "...".to_string(), |r| r.to_string());
    frame.render_widget(
        Paragraph::new(format!("\n{preview}")).style(Style::default().fg(Color::Gray)),
        eq_cols[4],
    );
    frame.render_widget(
        Paragraph::new(operator_line(app.operator)).alignment(Alignment::Center),
        rows[1],
    );

    // 2. Which operand to hide
    let options: Vec<Line> = [HiddenPart::First, HiddenPart::Second]
        .into_iter()
        .zip(msgs.hidden_labels)
        .map(|(part, label)| {
            if app.hidden == part {
                Line::styled(
                    format!("(•) {label}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::from(format!("( ) {label}"))
            }
        })
        .collect();
    let hide = Paragraph::new(options).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(msgs.hide_heading),
    );
    frame.render_widget(hide, cols[1]);
}

/// Left pan before a guess: the hidden operand and the operator are masked
fn masked_expression(equation: &Equation) -> String {
    match equation.hidden() {
        HiddenPart::First => format!("? ? {}", equation.num2()),
        HiddenPart::Second => format!("{} ? ?", equation.num1()),
    }
}

/// Left pan after a guess: the guessed number fills the hidden slot
fn guessed_expression(equation: &Equation, evaluation: &Evaluation) -> String {
    let op = evaluation.operator;
    match equation.hidden() {
        HiddenPart::First => format!("{} {op} {}", evaluation.number, equation.num2()),
        HiddenPart::Second => format!("{} {op} {}", equation.num1(), evaluation.number),
    }
}

fn render_scale(frame: &mut Frame, app: &App, area: Rect) {
    let Some(equation) = app.game_state().equation() else {
        return;
    };
    let (left, tilt) = match &app.evaluation {
        Some(evaluation) => (
            guessed_expression(equation, evaluation),
            Tilt::from(evaluation.verdict),
        ),
        None => (masked_expression(equation), Tilt::Level),
    };
    render_balance(frame, area, &left, &equation.result().to_string(), tilt);
}

fn render_solve(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = app.messages();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(area);

    render_scale(frame, app, rows[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(msgs.your_answer);
    let inner = block.inner(centered(rows[1], 50));
    frame.render_widget(block, centered(rows[1], 50));

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(10)])
        .split(inner);
    render_field(
        frame,
        &app.guess_field,
        msgs.number,
        app.pending_reveal.is_none(),
        cols[0],
    );

    let mut lines = vec![Line::from(msgs.operation), operator_line(app.guess_operator)];
    if app.pending_reveal.is_some() {
        lines.push(Line::styled(
            msgs.checking,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        cols[1],
    );
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = app.messages();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(2)])
        .split(area);

    render_scale(frame, app, rows[0]);

    let correct = app.game_state().last_result().unwrap_or(false);
    let (text, color) = if correct {
        (msgs.balanced, Color::Green)
    } else {
        (msgs.unbalanced, Color::Red)
    };
    let verdict = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(verdict, rows[1]);
}

fn render_game_over(frame: &mut Frame, state: &GameState, msgs: &Messages, area: Rect) {
    let mut lines = vec![
        Line::styled(
            msgs.game_over,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.push(match state.winner() {
        Some(winner) => Line::from(msgs.winner.replacen("{}", winner.name(), 1)),
        None => Line::from(msgs.tie),
    });
    lines.push(Line::from(""));
    lines.push(Line::styled(
        msgs.final_score,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    for (i, player) in state.players().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                player.name().to_string(),
                Style::default()
                    .fg(PLAYER_COLORS[i])
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {} {}", player.score(), msgs.points)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let text = app
        .error
        .as_ref()
        .map(|err| app.messages().error_text(err))
        .unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, app: &App, controls: &str, area: Rect) {
    let state = app.game_state();
    let mut lines = vec![Line::from(controls.to_string())];
    let in_round = matches!(
        state.phase(),
        GamePhase::Creating | GamePhase::Solving | GamePhase::ShowingResult
    );
    if in_round && state.end_requested() {
        lines.push(Line::styled(
            app.messages().end_game_pending,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

/// Horizontally centered slice of `area`, at most `width` columns wide
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{build_equation, evaluate_guess};

    #[test]
    fn test_masked_expression() {
        let eq = build_equation(5, 3, Operator::Subtract, HiddenPart::Second).unwrap();
        assert_eq!(masked_expression(&eq), "5 ? ?");
        let eq = build_equation(5, 3, Operator::Subtract, HiddenPart::First).unwrap();
        assert_eq!(masked_expression(&eq), "? ? 3");
    }

    #[test]
    fn test_guessed_expression_keeps_order() {
        let eq = build_equation(12, 4, Operator::Divide, HiddenPart::First).unwrap();
        let eval = evaluate_guess(&eq, 6, Operator::Add).unwrap();
        assert_eq!(guessed_expression(&eq, &eval), "6 + 4");
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 100, 10);
        let inner = centered(area, 60);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.width, 60);
        assert_eq!(centered(Rect::new(0, 0, 30, 5), 60).width, 30);
    }
}
