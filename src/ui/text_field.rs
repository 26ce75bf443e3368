use crossterm::event::KeyCode;

/// Single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    max_len: usize,
    digits_only: bool,
}

impl TextField {
    pub fn text(max_len: usize) -> Self {
        TextField {
            value: String::new(),
            max_len,
            digits_only: false,
        }
    }

    /// Field that accepts ASCII digits only
    pub fn numeric(max_len: usize) -> Self {
        TextField {
            digits_only: true,
            ..TextField::text(max_len)
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        for c in value.chars() {
            self.push(c);
        }
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    fn push(&mut self, c: char) -> bool {
        let accepted = if self.digits_only {
            c.is_ascii_digit()
        } else {
            !c.is_control()
        };
        if accepted && self.value.chars().count() < self.max_len {
            self.value.push(c);
            true
        } else {
            false
        }
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => self.push(c),
            KeyCode::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_rejects_letters() {
        let mut field = TextField::numeric(4);
        assert!(field.handle_key(KeyCode::Char('4')));
        assert!(!field.handle_key(KeyCode::Char('a')));
        assert!(!field.handle_key(KeyCode::Char('-')));
        assert_eq!(field.value(), "4");
    }

    #[test]
    fn test_max_len() {
        let field = TextField::text(3).with_value("Bernardo");
        assert_eq!(field.value(), "Ber");
    }

    #[test]
    fn test_backspace() {
        let mut field = TextField::text(10).with_value("Ana");
        assert!(field.handle_key(KeyCode::Backspace));
        assert_eq!(field.value(), "An");
        field.clear();
        assert!(!field.handle_key(KeyCode::Backspace));
    }

    #[test]
    fn test_non_editing_key_ignored() {
        let mut field = TextField::text(10);
        assert!(!field.handle_key(KeyCode::Enter));
    }
}
