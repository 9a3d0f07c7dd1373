use quiz_client::{Countdown, PlayerScreen, PlayerSession, PlayerStatus, TimerUrgency};

/// Shown right after a successful join, before the first round.
const WELCOME_MESSAGES: &[&str] = &[
    "get ready to type!",
    "show us your word power!",
    "the stage is yours!",
    "time to shine!",
    "let's get creative!",
    "your turn to dazzle!",
];

/// Redraw the player view from session state.
pub fn draw(session: &PlayerSession) {
    match session.screen() {
        PlayerScreen::Join => {
            println!();
            println!("== {}", status_line(session.status()));
            println!("   enter a nickname (2-15 characters) to join, or /quit to leave");
        }
        PlayerScreen::Game => {
            println!();
            println!("== {}", status_line(session.status()));
            println!(
                "   category: {}   time: {}",
                session.category().unwrap_or("-"),
                timer_cell(session.countdown()),
            );
            if session.is_input_enabled() {
                println!("   type an answer and press enter (as many as you like)");
            }
            if let Some(results) = session.results() {
                println!("   your total score: {}", results.player_score);
                for answer in &results.answers {
                    println!(
                        "     {}  {:+}  {} [{}]",
                        answer.word, answer.points, answer.reason, answer.status,
                    );
                }
            }
        }
    }
}

pub fn show_error(message: &str) {
    println!("   !! {message}");
}

fn status_line(status: &PlayerStatus) -> String {
    match status {
        PlayerStatus::Connecting => "connecting to the game server...".to_string(),
        PlayerStatus::Connected => "connected to game server".to_string(),
        PlayerStatus::Ready => pick(WELCOME_MESSAGES).to_string(),
        PlayerStatus::TypeYourAnswer => "type your answer!".to_string(),
        PlayerStatus::AnswerSubmitted => "answer submitted, keep going!".to_string(),
        PlayerStatus::TimeUp => "time's up! wait for the results...".to_string(),
        PlayerStatus::RoundComplete => "round complete, wait for the next round...".to_string(),
        PlayerStatus::GameWasReset => "game reset, waiting for a new game to start...".to_string(),
        PlayerStatus::ConnectionLost => "connection to the game server lost".to_string(),
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
