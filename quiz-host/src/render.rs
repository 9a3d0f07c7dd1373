use quiz_client::{Countdown, HostSession, HostStatus, TimerUrgency};

/// Lobby chatter shown while waiting for the server's host ack.
const LOBBY_MESSAGES: &[&str] = &[
    "gathering players...",
    "rolling the dice...",
    "setting up the game board...",
    "preparing categories...",
    "getting the show ready...",
    "setting the stage...",
    "warming up the crowd...",
];

pub fn print_help() {
    println!("commands: start | next | reset | quit");
}

/// Redraw the whole control-room view from session state.
pub fn draw(session: &HostSession) {
    println!();
    println!("== {}", status_line(session.status()));
    println!(
        "   category: {}   time: {}",
        session.category().unwrap_or("-"),
        timer_cell(session.countdown()),
    );

    let controls = session.controls();
    let mut available = Vec::new();
    if controls.start_enabled {
        available.push("start");
    }
    if controls.next_enabled {
        available.push("next");
    }
    available.push("reset");
    println!("   available: {}", available.join(" | "));

    if !session.leaderboard().is_empty() {
        println!("   leaderboard:");
        for (rank, player) in session.leaderboard().standings().iter().enumerate() {
            println!("     {}. {}: {} points", rank + 1, player.nickname, player.score);
        }
    }

    if !session.top_answers().is_empty() {
        println!("   top answers:");
        for answer in session.top_answers() {
            println!("     {} ({})", answer.word, answer.count);
        }
    }

    if session.is_reset_pending() {
        println!("   reset the game? this clears all scores — type 'yes' to confirm, 'no' to cancel");
    }
}

fn status_line(status: &HostStatus) -> String {
    match status {
        HostStatus::Connecting => "connecting to the game server...".to_string(),
        HostStatus::Lobby => pick(LOBBY_MESSAGES).to_string(),
        HostStatus::HostReady => "host connected, waiting for players".to_string(),
        HostStatus::RoundInProgress => "round in progress...".to_string(),
        HostStatus::RoundComplete => "round complete".to_string(),
        HostStatus::GameWasReset => "game reset, ready to start a new game".to_string(),
        HostStatus::PlayerJoined(nickname) => format!("{nickname} joined the game"),
        HostStatus::PlayerLeft(nickname) => format!("{nickname} left the game"),
        HostStatus::ConnectionLost => "connection to the game server lost".to_string(),
    }
}

fn timer_cell(countdown: &Countdown) -> String {
    match countdown.remaining() {
        None => "-".to_string(),
        Some(remaining) => match countdown.urgency() {
            TimerUrgency::Danger => format!("{remaining}!!"),
            TimerUrgency::Warning => format!("{remaining}!"),
            TimerUrgency::Normal => remaining.to_string(),
        },
    }
}

fn pick<'a>(messages: &'a [&'a str]) -> &'a str {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    std::time::SystemTime::now().hash(&mut hasher);
    messages[(hasher.finish() as usize) % messages.len()]
}
