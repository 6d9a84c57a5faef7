use crate::GUESS_WINDOW;
use crate::JOIN_WINDOW;
use std::time::Duration;

/// How long the two fixed waits of a session last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub join: Duration,
    pub guess: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            join: Duration::from_secs(JOIN_WINDOW),
            guess: Duration::from_secs(GUESS_WINDOW),
        }
    }
}

impl Timing {
    pub fn new(join: Duration, guess: Duration) -> Self {
        Self { join, guess }
    }
    pub fn from_secs(join: u64, guess: u64) -> Self {
        Self::new(Duration::from_secs(join), Duration::from_secs(guess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config() {
        let timing = Timing::default();
        assert_eq!(timing.join, Duration::from_secs(7));
        assert_eq!(timing.guess, Duration::from_secs(5));
    }
    #[test]
    fn custom_config() {
        assert_eq!(
            Timing::from_secs(1, 2),
            Timing::new(Duration::from_secs(1), Duration::from_secs(2))
        );
    }
}
