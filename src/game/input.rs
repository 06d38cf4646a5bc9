//! Raw answer buffer for the active turn.

use serde::{Deserialize, Serialize};

use crate::problems::InputPolicy;

/// What the player has typed (or picked) so far.
///
/// Every edit goes through the current problem's `InputPolicy`, so the buffer
/// only ever holds characters the policy accepts, up to its length limit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append one character. Returns whether the buffer changed.
    pub fn push(&mut self, policy: InputPolicy, ch: char) -> bool {
        let Some(max_len) = policy.max_len() else {
            return false;
        };
        if self.text.chars().count() >= max_len {
            return false;
        }
        match policy.accept(ch) {
            Some(ch) => {
                self.text.push(ch);
                true
            }
            None => false,
        }
    }

    /// Remove the last character. Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the contents, dropping rejected characters and anything past
    /// the length limit. Choice input stores the text as given.
    pub fn set(&mut self, policy: InputPolicy, text: &str) {
        match policy.max_len() {
            Some(max_len) => {
                self.text = text
                    .chars()
                    .filter_map(|ch| policy.accept(ch))
                    .take(max_len)
                    .collect();
            }
            None => self.text = text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_policy() {
        let policy = InputPolicy::Digits { max_len: 3 };
        let mut input = InputBuffer::new();

        assert!(input.push(policy, '1'));
        assert!(!input.push(policy, 'a'));
        assert!(input.push(policy, '2'));
        assert!(input.push(policy, '3'));
        assert!(!input.push(policy, '4'));
        assert_eq!(input.as_str(), "123");

        assert!(input.backspace());
        assert_eq!(input.as_str(), "12");
    }

    #[test]
    fn test_roman_policy_folds_case() {
        let policy = InputPolicy::RomanNumeral { max_len: 8 };
        let mut input = InputBuffer::new();

        input.push(policy, 'x');
        input.push(policy, 'i');
        input.push(policy, 'z');
        assert_eq!(input.as_str(), "XI");
    }

    #[test]
    fn test_set_filters_and_truncates() {
        let mut input = InputBuffer::new();

        input.set(InputPolicy::Fraction { max_len: 5 }, "12 / 345");
        assert_eq!(input.as_str(), "12/34");

        input.set(InputPolicy::Choice, ">");
        assert_eq!(input.as_str(), ">");
    }

    #[test]
    fn test_choice_rejects_typing() {
        let mut input = InputBuffer::new();
        assert!(!input.push(InputPolicy::Choice, '1'));
        assert!(input.is_empty());
        assert!(!input.backspace());
    }
}
