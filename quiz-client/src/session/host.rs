use quiz_types::{ClientCommand, ServerEvent, TopAnswer};

use crate::countdown::{Countdown, CountdownStep};
use crate::leaderboard::Leaderboard;

/// Operator input, already parsed by the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    StartRound,
    NextRound,
    /// First step of the reset flow; nothing is sent until confirmed.
    ResetGame,
    ConfirmReset,
    CancelReset,
}

/// Side effects the display loop must carry out after feeding the session.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEffect {
    Send(ClientCommand),
    ArmTimer,
    DisarmTimer,
    /// Another host is already connected; this display must hand off to
    /// the player view.
    SwitchToPlayerView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStatus {
    Connecting,
    /// Connected, host announcement sent, waiting for the server's ack.
    Lobby,
    /// Host confirmed, waiting for players.
    HostReady,
    RoundInProgress,
    RoundComplete,
    GameWasReset,
    PlayerJoined(String),
    PlayerLeft(String),
    ConnectionLost,
}

/// Enablement of the start/next controls.
///
/// Mirrors the server's round sequencing without tracking round identity:
/// start → (round runs) → next → start again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundControls {
    pub start_enabled: bool,
    pub next_enabled: bool,
}

impl RoundControls {
    fn initial() -> Self {
        Self {
            start_enabled: true,
            next_enabled: false,
        }
    }
}

/// Control-room session: every piece of state behind the host display.
///
/// Created when the connection comes up and fed three kinds of input —
/// server events, operator actions, timer ticks. Pure state machine; the
/// display loop executes the returned effects and re-renders.
#[derive(Debug)]
pub struct HostSession {
    status: HostStatus,
    category: Option<String>,
    countdown: Countdown,
    leaderboard: Leaderboard,
    top_answers: Vec<TopAnswer>,
    controls: RoundControls,
    round_active: bool,
    pending_reset: bool,
}

impl HostSession {
    pub fn new() -> Self {
        Self {
            status: HostStatus::Connecting,
            category: None,
            countdown: Countdown::new(),
            leaderboard: Leaderboard::new(),
            top_answers: Vec::new(),
            controls: RoundControls::initial(),
            round_active: false,
            pending_reset: false,
        }
    }

    /// The transport is up: announce this client as the host.
    pub fn handle_connected(&mut self) -> Vec<HostEffect> {
        self.status = HostStatus::Lobby;
        vec![HostEffect::Send(ClientCommand::HostJoin)]
    }

    pub fn handle_server_event(&mut self, event: ServerEvent) -> Vec<HostEffect> {
        match event {
            ServerEvent::HostConnected => {
                self.status = HostStatus::HostReady;
                vec![]
            }
            ServerEvent::HostExists => vec![HostEffect::SwitchToPlayerView],
            ServerEvent::RoundStart(info) => {
                self.round_active = true;
                self.category = Some(info.category);
                self.top_answers.clear();
                self.countdown.start(info.duration);
                self.controls.start_enabled = false;
                self.controls.next_enabled = false;
                self.status = HostStatus::RoundInProgress;
                vec![HostEffect::ArmTimer]
            }
            ServerEvent::RoundEnd(summary) => {
                self.round_active = false;
                self.countdown.halt();
                self.top_answers = summary.top_answers;
                self.controls.next_enabled = true;
                self.status = HostStatus::RoundComplete;
                vec![HostEffect::DisarmTimer]
            }
            ServerEvent::GameReset => {
                self.reset_display();
                self.status = HostStatus::GameWasReset;
                vec![HostEffect::DisarmTimer]
            }
            ServerEvent::PlayerJoined(update) => {
                self.status = HostStatus::PlayerJoined(update.nickname);
                self.leaderboard.replace(update.players);
                vec![]
            }
            ServerEvent::PlayerLeft(update) => {
                self.status = HostStatus::PlayerLeft(update.nickname);
                self.leaderboard.replace(update.players);
                vec![]
            }
            // Player-only event; nothing for the host to do.
            ServerEvent::InvalidNickname => vec![],
        }
    }

    pub fn handle_action(&mut self, action: HostAction) -> Vec<HostEffect> {
        match action {
            HostAction::StartRound => {
                if !self.controls.start_enabled {
                    return vec![];
                }
                self.controls.start_enabled = false;
                vec![HostEffect::Send(ClientCommand::StartRound)]
            }
            HostAction::NextRound => {
                if !self.controls.next_enabled {
                    return vec![];
                }
                self.controls.next_enabled = false;
                self.controls.start_enabled = true;
                vec![HostEffect::Send(ClientCommand::NextRound)]
            }
            HostAction::ResetGame => {
                self.pending_reset = true;
                vec![]
            }
            HostAction::ConfirmReset => {
                if !self.pending_reset {
                    return vec![];
                }
                self.pending_reset = false;
                vec![HostEffect::Send(ClientCommand::ResetGame)]
            }
            HostAction::CancelReset => {
                self.pending_reset = false;
                vec![]
            }
        }
    }

    /// One second elapsed on the local round timer.
    ///
    /// On expiry the host tells the server time is up; the server's
    /// `roundEnd` is what actually closes the round.
    pub fn handle_tick(&mut self) -> Vec<HostEffect> {
        match self.countdown.tick() {
            Some(CountdownStep::Expired) => vec![
                HostEffect::Send(ClientCommand::TimeUp),
                HostEffect::DisarmTimer,
            ],
            Some(CountdownStep::Running(_)) => vec![],
            // Stale tick from a timer that lost the race with disarm.
            None => vec![],
        }
    }

    pub fn handle_disconnected(&mut self) -> Vec<HostEffect> {
        self.status = HostStatus::ConnectionLost;
        vec![HostEffect::DisarmTimer]
    }

    fn reset_display(&mut self) {
        self.category = None;
        self.countdown.clear();
        self.leaderboard.clear();
        self.top_answers.clear();
        self.controls = RoundControls::initial();
        self.round_active = false;
        self.pending_reset = false;
    }

    pub fn status(&self) -> &HostStatus {
        &self.status
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn top_answers(&self) -> &[TopAnswer] {
        &self.top_answers
    }

    pub fn controls(&self) -> RoundControls {
        self.controls
    }

    pub fn is_round_active(&self) -> bool {
        self.round_active
    }

    pub fn is_reset_pending(&self) -> bool {
        self.pending_reset
    }
}

impl Default for HostSession {
    fn default() -> Self {
        Self::new()
    }
}
