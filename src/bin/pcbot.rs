//! pcbot Console Driver
//!
//! Runs the bot against stdin instead of a chat gateway. Each line is a
//! platform event (`say ...` or `react ...`); everything the bot sends is
//! printed to stdout along with its message id.

use clap::Parser;
use pcbot::bot::Bot;
use pcbot::config::Config;
use pcbot::config::Input;
use pcbot::highlow::Reaction;
use pcbot::messenger::Console;
use pcbot::*;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let config = Config::parse();
    if config.token.is_none() {
        log::warn!("no BOT_TOKEN set, running on the console only");
    }
    let bot = Bot::new(Arc::new(Console::default()))
        .with_id(ID::from(config.bot_id))
        .with_timing(config.timing())
        .with_host(&config.host);
    log::info!("serving card art from {}", config.host);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "quit" => break,
            "exit" => break,
            line => match Input::try_from(line) {
                Err(e) => eprintln!("{}", e),
                Ok(Input::Say {
                    guild,
                    channel,
                    member,
                    text,
                }) => {
                    bot.handle_message(
                        ID::from(guild),
                        ID::from(channel),
                        ID::from(member),
                        &text.join(" "),
                    )
                    .await
                }
                Ok(Input::React {
                    guild,
                    channel,
                    message,
                    member,
                    emoji,
                }) => {
                    bot.handle_reaction(&Reaction {
                        guild: ID::from(guild),
                        channel: ID::from(channel),
                        message: ID::from(message),
                        member: ID::from(member),
                        emoji,
                    })
                    .await;
                }
            },
        }
    }
    bot.registry().shutdown().await;
    Ok(())
}
