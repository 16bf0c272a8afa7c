//! Password gate in front of the gallery.
//!
//! The comparison is a plain exact string match. It hides content, it does
//! not protect it.

/// Message shown in the overlay after a wrong password
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect Password. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockResult {
    /// Correct secret. `first_unlock` is true only for the locked → unlocked step.
    Success { first_unlock: bool },
    Failure { message: &'static str },
}

impl UnlockResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UnlockResult::Success { .. })
    }
}

/// Gate state plus the overlay form it drives
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    secret: String,
    state: GateState,
    input: String,
    error_message: Option<&'static str>,
}

impl Gate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            state: GateState::Locked,
            input: String::new(),
            error_message: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Overlay is visible while locked
    pub fn overlay_visible(&self) -> bool {
        !self.is_unlocked()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    /// Compare `candidate` with the secret, exactly and case-sensitively.
    pub fn attempt_unlock(&mut self, candidate: &str) -> UnlockResult {
        if candidate == self.secret {
            let first_unlock = self.state == GateState::Locked;
            self.state = GateState::Unlocked;
            self.error_message = None;
            if first_unlock {
                tracing::info!("Gallery unlocked");
            }
            UnlockResult::Success { first_unlock }
        } else {
            tracing::info!("Rejected unlock attempt");
            self.input.clear();
            // The overlay is gone once unlocked; nothing would ever clear the message
            if self.state == GateState::Locked {
                self.error_message = Some(INCORRECT_PASSWORD_MESSAGE);
            }
            UnlockResult::Failure {
                message: INCORRECT_PASSWORD_MESSAGE,
            }
        }
    }

    /// Submit the current form input.
    pub fn submit(&mut self) -> UnlockResult {
        let candidate = std::mem::take(&mut self.input);
        let result = self.attempt_unlock(&candidate);
        if result.is_success() {
            self.input = candidate;
        }
        result
    }
}
