use std::time::Duration;

use anyhow::{Context, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc;
use tracing::info;

use quiz_client::{
    Connection, NetEvent, PlayerAction, PlayerEffect, PlayerScreen, PlayerSession, RoundTimer,
    WsTransport,
};

mod config;
mod render;

use config::Config;

enum Outcome {
    Quit,
    ConnectionLost(Option<String>),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new();
    info!("Starting player display, connecting to {}", config.server_url);

    let transport = tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_seconds),
        WsTransport::connect(&config.server_url),
    )
    .await
    .context("timed out connecting to the game server")?
    .context("failed to connect to the game server")?;

    let (connection, mut events) = Connection::start(transport);
    let mut session = PlayerSession::new();
    let mut timer = RoundTimer::new();
    let (tick_tx, mut tick_rx) = mpsc::channel(8);
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    let outcome = loop {
        let effects = tokio::select! {
            event = events.recv() => match event {
                Some(NetEvent::Connected) => session.handle_connected(),
                Some(NetEvent::Event(event)) => session.handle_server_event(event),
                Some(NetEvent::Disconnected { reason }) => {
                    session.handle_disconnected();
                    break Outcome::ConnectionLost(reason);
                }
                None => break Outcome::ConnectionLost(None),
            },
            line = stdin.next_line() => match line.context("failed to read stdin")? {
                Some(line) => {
                    let input = line.trim();
                    if input == "/quit" {
                        break Outcome::Quit;
                    }
                    session.handle_action(action_for(input, session.screen()))
                }
                None => break Outcome::Quit,
            },
            _ = tick_rx.recv() => session.handle_tick(),
            _ = signal::ctrl_c() => break Outcome::Quit,
        };

        for effect in effects {
            match effect {
                PlayerEffect::Send(command) => connection.send(command)?,
                PlayerEffect::ArmTimer => timer.arm(tick_tx.clone()),
                PlayerEffect::DisarmTimer => timer.disarm(),
                PlayerEffect::ShowError(message) => render::show_error(&message),
            }
        }

        render::draw(&session);
    };

    timer.disarm();
    connection.shutdown().await;

    match outcome {
        Outcome::Quit => {
            info!("player display closed");
            Ok(())
        }
        Outcome::ConnectionLost(reason) => {
            render::draw(&session);
            match reason {
                Some(reason) => bail!("connection to the game server lost: {reason}"),
                None => bail!("connection to the game server closed"),
            }
        }
    }
}

/// Before the join the whole line is a nickname attempt; afterwards every
/// line is an answer submission.
fn action_for(input: &str, screen: PlayerScreen) -> PlayerAction {
    match screen {
        PlayerScreen::Join => PlayerAction::Join {
            nickname: input.to_string(),
        },
        PlayerScreen::Game => PlayerAction::SubmitAnswer {
            text: input.to_string(),
        },
    }
}
