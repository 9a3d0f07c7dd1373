use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub nickname: String,
    pub score: i32,
}

/// Round parameters pushed by the server at round start.
///
/// `duration` seeds the client-local countdown; the authoritative round
/// timer lives on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundInfo {
    pub category: String,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopAnswer {
    pub word: String,
    pub count: u32,
}

/// One scored submission in a player's round breakdown.
///
/// `status` is the server's styling vocabulary and is rendered verbatim,
/// so it stays an opaque string rather than an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredAnswer {
    pub word: String,
    pub points: i32,
    pub status: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoundSummary {
    pub top_answers: Vec<TopAnswer>,
    pub player_score: i32,
    pub answers: Vec<ScoredAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RosterUpdate {
    pub nickname: String,
    pub players: Vec<Player>,
}
