use std::time::Duration;

use anyhow::{Context, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc;
use tracing::info;

use quiz_client::{
    Connection, HostAction, HostEffect, HostSession, NetEvent, RoundTimer, WsTransport,
};

mod config;
mod render;

use config::Config;

enum Outcome {
    Quit,
    HandOff,
    ConnectionLost(Option<String>),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new();
    info!("Starting host display, connecting to {}", config.server_url);

    let transport = tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_seconds),
        WsTransport::connect(&config.server_url),
    )
    .await
    .context("timed out connecting to the game server")?
    .context("failed to connect to the game server")?;

    let (connection, mut events) = Connection::start(transport);
    let mut session = HostSession::new();
    let mut timer = RoundTimer::new();
    let (tick_tx, mut tick_rx) = mpsc::channel(8);
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    render::print_help();

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
                    let input = line.trim().to_ascii_lowercase();
                    if input == "quit" || input == "q" {
                        break Outcome::Quit;
                    }
                    match parse_command(&input, session.is_reset_pending()) {
                        Some(action) => session.handle_action(action),
                        None => {
                            render::print_help();
                            vec![]
                        }
                    }
                }
                None => break Outcome::Quit,
            },
            _ = tick_rx.recv() => session.handle_tick(),
            _ = signal::ctrl_c() => break Outcome::Quit,
        };

        let mut hand_off = false;
        for effect in effects {
            match effect {
                HostEffect::Send(command) => connection.send(command)?,
                HostEffect::ArmTimer => timer.arm(tick_tx.clone()),
                HostEffect::DisarmTimer => timer.disarm(),
                HostEffect::SwitchToPlayerView => hand_off = true,
            }
        }
        if hand_off {
            break Outcome::HandOff;
        }

        render::draw(&session);
    };

    timer.disarm();
    connection.shutdown().await;

    match outcome {
        Outcome::Quit => {
            info!("host display closed");
            Ok(())
        }
        Outcome::HandOff => {
            bail!("another host is already connected — use the player display (quiz-player) instead")
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

fn parse_command(input: &str, reset_pending: bool) -> Option<HostAction> {
    match input {
        "start" => Some(HostAction::StartRound),
        "next" => Some(HostAction::NextRound),
        "reset" => Some(HostAction::ResetGame),
        "yes" | "y" if reset_pending => Some(HostAction::ConfirmReset),
        "no" | "n" if reset_pending => Some(HostAction::CancelReset),
        _ => None,
    }
}
