use super::command;
use super::command::Command;
use crate::Channel;
use crate::DEFAULT_HOST;
use crate::DRAW_COLOR;
use crate::Guild;
use crate::ID;
use crate::INFO;
use crate::Member;
use crate::cards::Style;
use crate::guild::Refusal;
use crate::guild::Registry;
use crate::highlow::Game;
use crate::highlow::Ingested;
use crate::highlow::Reaction;
use crate::highlow::Timing;
use crate::messenger::Embed;
use crate::messenger::Messenger;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// What the bot answers a command with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command already spoke for itself (a game's join prompt).
    Silent,
    Text(String),
    Card(Embed),
}

impl From<Refusal> for Reply {
    fn from(refusal: Refusal) -> Self {
        Self::Text(refusal.to_string())
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Silent => Ok(()),
            Self::Text(text) => write!(f, "{}", text),
            Self::Card(embed) => write!(f, "{}", embed.title),
        }
    }
}

/// Entry point for platform events: chat messages and reactions.
pub struct Bot {
    me: ID<Member>,
    registry: Arc<Registry>,
    messenger: Arc<dyn Messenger>,
    timing: Timing,
    host: Arc<str>,
}

impl Bot {
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self {
            me: ID::from(0),
            registry: Arc::new(Registry::new()),
            messenger,
            timing: Timing::default(),
            host: Arc::from(DEFAULT_HOST),
        }
    }
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Arc::from(host.trim_end_matches('/'));
        self
    }
    /// The bot's own member id; its reactions and messages are ignored.
    pub fn with_id(mut self, me: ID<Member>) -> Self {
        self.me = me;
        self
    }
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

/// Command operations.
impl Bot {
    pub fn info(&self) -> Reply {
        Reply::Text(INFO.to_string())
    }
    /// Spawns a game of High-or-Low in `channel`.
    pub async fn start(
        &self,
        guild: ID<Guild>,
        channel: ID<Channel>,
    ) -> Result<JoinHandle<()>, Refusal> {
        Game::start(
            guild,
            channel,
            self.registry.get(guild).await,
            self.messenger.clone(),
            self.timing,
            self.host.clone(),
        )
        .await
    }
    pub async fn start_game(&self, guild: ID<Guild>, channel: ID<Channel>) -> Reply {
        match self.start(guild, channel).await {
            Ok(_) => Reply::Silent,
            Err(refusal) => refusal.into(),
        }
    }
    pub async fn quit_game(&self, guild: ID<Guild>) -> Reply {
        match self.registry.get(guild).await.lock().await.quit() {
            Ok(()) => Reply::Text("Stopped the game.".to_string()),
            Err(refusal) => refusal.into(),
        }
    }
    pub async fn draw(&self, guild: ID<Guild>) -> Reply {
        let state = self.registry.get(guild).await;
        let mut server = state.lock().await;
        match server.draw() {
            Ok((card, remaining)) => Reply::Card(
                Embed::new(card.to_string(), DRAW_COLOR)
                    .footer(format!("{} cards remaining.", remaining))
                    .image(server.settings.style.url(&self.host, &card)),
            ),
            Err(refusal) => refusal.into(),
        }
    }
    pub async fn shuffle(&self, guild: ID<Guild>) -> Reply {
        match self.registry.get(guild).await.lock().await.shuffle() {
            Ok(()) => Reply::Text("Cards shuffled!".to_string()),
            Err(refusal) => refusal.into(),
        }
    }
    pub async fn reset_deck(&self, guild: ID<Guild>) -> Reply {
        match self.registry.get(guild).await.lock().await.reset() {
            Ok(()) => Reply::Text("Cards have been reset.".to_string()),
            Err(refusal) => refusal.into(),
        }
    }
    pub async fn set_jokers(&self, guild: ID<Guild>, arg: &str) -> Reply {
        let Some(jokers) = command::toggle(arg) else {
            return Refusal::UnknownToggle(arg.to_string()).into();
        };
        match self.registry.get(guild).await.lock().await.set_jokers(jokers) {
            Ok(()) if jokers => Reply::Text("Jokers are now on. The deck has been reset.".into()),
            Ok(()) => Reply::Text("Jokers are now off. The deck has been reset.".into()),
            Err(refusal) => refusal.into(),
        }
    }
    pub async fn set_style(&self, guild: ID<Guild>, arg: &str) -> Reply {
        match Style::try_from(arg) {
            Ok(style) => {
                self.registry.get(guild).await.lock().await.set_style(style);
                Reply::Text(format!("Card style set to {}.", style))
            }
            Err(_) => Refusal::UnknownStyle(arg.trim().to_string()).into(),
        }
    }
}

/// Platform events.
impl Bot {
    /// Dispatches a chat message and posts the reply in the same channel.
    pub async fn handle_message(
        &self,
        guild: ID<Guild>,
        channel: ID<Channel>,
        author: ID<Member>,
        content: &str,
    ) {
        if author == self.me {
            return;
        }
        let Some(command) = Command::parse(content) else {
            return;
        };
        log::debug!("[bot] guild {} #{}: {:?}", guild, channel, command);
        let reply = match command {
            Command::Info => self.info(),
            Command::HighOrLow => self.start_game(guild, channel).await,
            Command::Draw => self.draw(guild).await,
            Command::Shuffle => self.shuffle(guild).await,
            Command::ResetCards => self.reset_deck(guild).await,
            Command::QuitGame => self.quit_game(guild).await,
            Command::Jokers(arg) => self.set_jokers(guild, &arg).await,
            Command::Style(arg) => self.set_style(guild, &arg).await,
        };
        let sent = match reply {
            Reply::Silent => return,
            Reply::Text(text) => self.messenger.text(channel, &text).await,
            Reply::Card(embed) => self.messenger.embed(channel, &embed).await,
        };
        if let Err(e) = sent {
            log::warn!("[bot] guild {} reply failed: {}", guild, e);
        }
    }
    /// Feeds a reaction to the guild's session.
    pub async fn handle_reaction(&self, reaction: &Reaction) -> Ingested {
        let state = self.registry.get(reaction.guild).await;
        let ingested = state.lock().await.session.ingest(reaction, self.me);
        if ingested != Ingested::Ignored {
            log::debug!(
                "[bot] guild {} member {}: {:?}",
                reaction.guild,
                reaction.member,
                ingested
            );
        }
        ingested
    }
}
