/// Names used when a player leaves the welcome form empty.
pub const DEFAULT_NAMES: [&str; 2] = ["Player 1", "Player 2"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
}

impl Player {
    /// Create a player with a zero score. A blank name falls back to `fallback`.
    pub fn new(name: &str, fallback: &str) -> Self {
        let name = name.trim();
        Player {
            name: if name.is_empty() { fallback } else { name }.to_string(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn award_point(&mut self) {
        self.score += 1;
    }
}

/// Index of the other seat (0 <-> 1)
pub fn other(index: usize) -> usize {
    (index + 1) % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(other(0), 1);
        assert_eq!(other(1), 0);
    }

    #[test]
    fn test_blank_name_falls_back() {
        assert_eq!(Player::new("   ", DEFAULT_NAMES[1]).name(), "Player 2");
        assert_eq!(Player::new(" Ana ", DEFAULT_NAMES[0]).name(), "Ana");
    }

    #[test]
    fn test_award_point() {
        let mut p = Player::new("Beto", DEFAULT_NAMES[0]);
        assert_eq!(p.score(), 0);
        p.award_point();
        assert_eq!(p.score(), 1);
    }
}
