use super::choice::Choice;

/// One participant's standing in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    choice: Choice,
    active: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            choice: Choice::None,
            active: true,
        }
    }
}

impl PlayerState {
    pub fn choice(&self) -> Choice {
        self.choice
    }
    pub fn active(&self) -> bool {
        self.active
    }
    /// Records a guess. Only the first guess of a round counts, and only
    /// while the player is still in the game.
    pub fn guess(&mut self, choice: Choice) -> bool {
        match self.active && self.choice.is_none() && !choice.is_none() {
            true => {
                self.choice = choice;
                true
            }
            false => false,
        }
    }
    pub fn clear(&mut self) {
        self.choice = Choice::None;
    }
    pub fn eliminate(&mut self) {
        self.active = false;
    }
    pub fn restore(&mut self) {
        self.active = true;
    }
}
