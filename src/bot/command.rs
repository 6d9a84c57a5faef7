use crate::PREFIX;

/// A chat command addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Info,
    HighOrLow,
    Draw,
    Shuffle,
    ResetCards,
    QuitGame,
    Jokers(String),
    Style(String),
}

impl Command {
    /// Text without the prefix, or naming no known command, is not for us.
    pub fn parse(content: &str) -> Option<Self> {
        let rest = content.strip_prefix(PREFIX)?;
        let mut words = rest.split_whitespace();
        let name = words.next()?;
        let arg = words.collect::<Vec<_>>().join(" ");
        match name.to_ascii_lowercase().as_str() {
            "info" => Some(Self::Info),
            "high_or_low" => Some(Self::HighOrLow),
            "draw" => Some(Self::Draw),
            "shuffle" => Some(Self::Shuffle),
            "reset_cards" => Some(Self::ResetCards),
            "quitgame" => Some(Self::QuitGame),
            "jokers" => Some(Self::Jokers(arg)),
            "style" => Some(Self::Style(arg)),
            _ => None,
        }
    }
}

/// `on` / `off` toggle argument.
pub fn toggle(arg: &str) -> Option<bool> {
    match arg.trim().to_ascii_lowercase().as_str() {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}
