use crate::game::Verdict;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const WIDTH: usize = 41;
const HEIGHT: usize = 7;
const LEFT_CENTER: usize = 6;
const RIGHT_CENTER: usize = WIDTH - 7;
const PIVOT: usize = WIDTH / 2;
const BEAM_ROW: usize = 3;

/// Which side of the beam hangs low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    Level,
    LeftDown,
    RightDown,
}

impl From<Verdict> for Tilt {
    /// The left pan holds the solver's expression, the right pan the result
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Balanced => Tilt::Level,
            Verdict::TooHigh => Tilt::LeftDown,
            Verdict::TooLow => Tilt::RightDown,
        }
    }
}

struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    fn new() -> Self {
        Canvas {
            rows: vec![vec![' '; WIDTH]; HEIGHT],
        }
    }

    fn put(&mut self, row: usize, col: usize, c: char) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = c;
        }
    }

    /// Write `text` centered on `center`, clipped at the edges
    fn put_centered(&mut self, row: usize, center: usize, text: &str) {
        let len = text.chars().count();
        let start = center.saturating_sub(len / 2);
        for (i, c) in text.chars().enumerate() {
            self.put(row, start + i, c);
        }
    }

    fn into_lines(self) -> Vec<String> {
        self.rows
            .into_iter()
            .map(|r| r.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

/// Row a pan sits on: 0 raised, 1 level, 2 lowered.
fn pan_rows(tilt: Tilt) -> (usize, usize) {
    match tilt {
        Tilt::Level => (1, 1),
        Tilt::LeftDown => (2, 0),
        Tilt::RightDown => (0, 2),
    }
}

/// Draw the scale as plain text rows.
pub fn balance_lines(left: &str, right: &str, tilt: Tilt) -> Vec<String> {
    let mut canvas = Canvas::new();
    let (left_row, right_row) = pan_rows(tilt);

    canvas.put_centered(left_row, LEFT_CENTER, &format!("[ {left} ]"));
    canvas.put_centered(right_row, RIGHT_CENTER, &format!("[ {right} ]"));
    for row in left_row + 1..BEAM_ROW {
        canvas.put(row, LEFT_CENTER, '│');
    }
    for row in right_row + 1..BEAM_ROW {
        canvas.put(row, RIGHT_CENTER, '│');
    }

    // Beam: a sloped beam uses low/middle/high line glyphs across one row
    let third = (RIGHT_CENTER - LEFT_CENTER + 1) / 3;
    for col in LEFT_CENTER..=RIGHT_CENTER {
        let segment = (col - LEFT_CENTER) / third;
        let glyph = match (tilt, segment) {
            (Tilt::Level, _) => '━',
            (_, 1) => '─',
            (Tilt::LeftDown, 0) | (Tilt::RightDown, 2..) => '▁',
            _ => '▔',
        };
        canvas.put(BEAM_ROW, col, glyph);
    }

    canvas.put(BEAM_ROW + 1, PIVOT, '▲');
    canvas.put(BEAM_ROW + 2, PIVOT, '┃');
    canvas.put_centered(BEAM_ROW + 3, PIVOT, "━━━━━┻━━━━━");

    canvas.into_lines()
}

/// Render the scale centered in `area`.
pub fn render_balance(frame: &mut Frame, area: Rect, left: &str, right: &str, tilt: Tilt) {
    let color = match tilt {
        Tilt::Level => Color::Green,
        Tilt::LeftDown | Tilt::RightDown => Color::Yellow,
    };
    let lines: Vec<Line> = balance_lines(left, right, tilt)
        .into_iter()
        .enumerate()
        .map(|(row, text)| {
            let style = if row < BEAM_ROW {
                Style::default().fg(Color::Cyan)
            } else if row == BEAM_ROW {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::styled(format!("{text:<WIDTH$}"), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_pans_share_a_row() {
        let lines = balance_lines("5 - ?", "2", Tilt::Level);
        assert_eq!(lines.len(), HEIGHT);
        assert!(lines[1].contains("[ 5 - ? ]"));
        assert!(lines[1].contains("[ 2 ]"));
        assert!(lines[BEAM_ROW].chars().all(|c| c == ' ' || c == '━'));
    }

    #[test]
    fn test_left_down_lowers_left_pan() {
        let lines = balance_lines("9 + 3", "8", Tilt::LeftDown);
        assert!(lines[2].contains("[ 9 + 3 ]"));
        assert!(lines[0].contains("[ 8 ]"));
        let beam = lines[BEAM_ROW].trim();
        assert!(beam.starts_with('▁'));
        assert!(beam.ends_with('▔'));
    }

    #[test]
    fn test_right_down_lowers_right_pan() {
        let lines = balance_lines("1 + 3", "8", Tilt::RightDown);
        assert!(lines[0].contains("[ 1 + 3 ]"));
        assert!(lines[2].contains("[ 8 ]"));
        let beam = lines[BEAM_ROW].trim();
        assert!(beam.starts_with('▔'));
        assert!(beam.ends_with('▁'));
    }

    #[test]
    fn test_tilt_from_verdict() {
        assert_eq!(Tilt::from(Verdict::Balanced), Tilt::Level);
        assert_eq!(Tilt::from(Verdict::TooHigh), Tilt::LeftDown);
        assert_eq!(Tilt::from(Verdict::TooLow), Tilt::RightDown);
    }
}
