use quiz_types::{ClientCommand, RoundSummary, ServerEvent};

use crate::countdown::{Countdown, CountdownStep};
use crate::nickname::Nickname;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Join { nickname: String },
    SubmitAnswer { text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEffect {
    Send(ClientCommand),
    ArmTimer,
    DisarmTimer,
    /// Local validation or server rejection; shown without any network call.
    ShowError(String),
}

/// Which screen the display is on. The join → game transition is one-way;
/// only a server-side nickname rejection sends the player back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerScreen {
    Join,
    Game,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerStatus {
    Connecting,
    Connected,
    /// Joined, waiting for the next round.
    Ready,
    TypeYourAnswer,
    AnswerSubmitted,
    TimeUp,
    RoundComplete,
    GameWasReset,
    ConnectionLost,
}

/// Per-player session: every piece of state behind the player display.
#[derive(Debug)]
pub struct PlayerSession {
    screen: PlayerScreen,
    nickname: Option<Nickname>,
    status: PlayerStatus,
    category: Option<String>,
    countdown: Countdown,
    round_active: bool,
    input_enabled: bool,
    results: Option<RoundSummary>,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self {
            screen: PlayerScreen::Join,
            nickname: None,
            status: PlayerStatus::Connecting,
            category: None,
            countdown: Countdown::new(),
            round_active: false,
            input_enabled: false,
            results: None,
        }
    }

    pub fn handle_connected(&mut self) -> Vec<PlayerEffect> {
        self.status = PlayerStatus::Connected;
        vec![]
    }

    pub fn handle_action(&mut self, action: PlayerAction) -> Vec<PlayerEffect> {
        match action {
            PlayerAction::Join { nickname } => self.handle_join(&nickname),
            PlayerAction::SubmitAnswer { text } => self.handle_submit(&text),
        }
    }

    /// Validate the nickname locally; only a valid one goes on the wire.
    fn handle_join(&mut self, raw: &str) -> Vec<PlayerEffect> {
        if self.screen == PlayerScreen::Game {
            return vec![];
        }

        let nickname = match Nickname::parse(raw) {
            Ok(nickname) => nickname,
            Err(e) => return vec![PlayerEffect::ShowError(e.to_string())],
        };

        self.screen = PlayerScreen::Game;
        self.status = PlayerStatus::Ready;
        let command = ClientCommand::JoinGame {
            nickname: nickname.as_str().to_string(),
        };
        self.nickname = Some(nickname);
        vec![PlayerEffect::Send(command)]
    }

    /// Empty and out-of-round submissions are suppressed locally; the
    /// player may otherwise submit as many answers per round as they like.
    fn handle_submit(&mut self, text: &str) -> Vec<PlayerEffect> {
        if !self.round_active || !self.input_enabled {
            return vec![];
        }

        let answer = text.trim();
        if answer.is_empty() {
            return vec![];
        }

        self.status = PlayerStatus::AnswerSubmitted;
        vec![PlayerEffect::Send(ClientCommand::SubmitAnswer {
            answer: answer.to_string(),
        })]
    }

    pub fn handle_server_event(&mut self, event: ServerEvent) -> Vec<PlayerEffect> {
        match event {
            ServerEvent::RoundStart(info) => {
                self.round_active = true;
                self.category = Some(info.category);
                // Results from the previous round are gone before the new
                // countdown begins.
                self.results = None;
                self.input_enabled = true;
                self.countdown.start(info.duration);
                self.status = PlayerStatus::TypeYourAnswer;
                vec![PlayerEffect::ArmTimer]
            }
            ServerEvent::RoundEnd(summary) => {
                self.round_active = false;
                self.input_enabled = false;
                self.countdown.halt();
                self.results = Some(summary);
                self.status = PlayerStatus::RoundComplete;
                vec![PlayerEffect::DisarmTimer]
            }
            ServerEvent::GameReset => {
                self.category = None;
                self.countdown.clear();
                self.results = None;
                self.round_active = false;
                self.input_enabled = false;
                self.status = PlayerStatus::GameWasReset;
                vec![PlayerEffect::DisarmTimer]
            }
            ServerEvent::InvalidNickname => {
                self.nickname = None;
                self.screen = PlayerScreen::Join;
                vec![PlayerEffect::ShowError(
                    "this nickname is already taken, choose another one".to_string(),
                )]
            }
            // Host-side events; nothing for a player to do.
            ServerEvent::HostConnected
            | ServerEvent::HostExists
            | ServerEvent::PlayerJoined(_)
            | ServerEvent::PlayerLeft(_) => vec![],
        }
    }

    /// One second elapsed. Expiry closes the input locally; the server's
    /// `roundEnd` remains the authoritative close.
    pub fn handle_tick(&mut self) -> Vec<PlayerEffect> {
        match self.countdown.tick() {
            Some(CountdownStep::Expired) => {
                self.input_enabled = false;
                self.status = PlayerStatus::TimeUp;
                vec![PlayerEffect::DisarmTimer]
            }
            Some(CountdownStep::Running(_)) => vec![],
            None => vec![],
        }
    }

    pub fn handle_disconnected(&mut self) -> Vec<PlayerEffect> {
        self.status = PlayerStatus::ConnectionLost;
        self.input_enabled = false;
        vec![PlayerEffect::DisarmTimer]
    }

    pub fn screen(&self) -> PlayerScreen {
        self.screen
    }

    pub fn nickname(&self) -> Option<&Nickname> {
        self.nickname.as_ref()
    }

    pub fn status(&self) -> &PlayerStatus {
        &self.status
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn results(&self) -> Option<&RoundSummary> {
        self.results.as_ref()
    }
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new()
    }
}
