//! Confirmation prompt port.

/// A blocking yes/no question put to the user.
///
/// Front ends implement this with whatever dialog they have: a terminal
/// prompt, a modal, or a canned answer in tests.
pub trait ConfirmPrompt: Send + Sync {
    /// Ask `question`; `true` means the user agreed.
    fn confirm(&self, question: &str) -> bool;
}

/// A prompt that always gives the same answer.
///
/// Used for `--force` style flows and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}
