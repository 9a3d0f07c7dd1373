use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{RosterUpdate, RoundInfo, RoundSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
#[ts(export)]
pub enum ClientCommand {
    HostJoin,
    StartRound,
    NextRound,
    ResetGame,
    TimeUp,
    JoinGame { nickname: String },
    SubmitAnswer { answer: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
#[ts(export)]
pub enum ServerEvent {
    HostConnected,
    HostExists,
    RoundStart(RoundInfo),
    RoundEnd(RoundSummary),
    GameReset,
    PlayerJoined(RosterUpdate),
    PlayerLeft(RosterUpdate),
    InvalidNickname,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_use_camel_case_event_names() {
        let json = serde_json::to_string(&ClientCommand::HostJoin).unwrap();
        assert_eq!(json, r#"{"event":"hostJoin"}"#);

        let json = serde_json::to_string(&ClientCommand::JoinGame {
            nickname: "Al".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"event":"joinGame","data":{"nickname":"Al"}}"#);

        let json = serde_json::to_string(&ClientCommand::TimeUp).unwrap();
        assert_eq!(json, r#"{"event":"timeUp"}"#);
    }

    #[test]
    fn round_start_parses_wire_payload() {
        let event: ServerEvent = serde_json::from_str(
            r#"{"event":"roundStart","data":{"category":"Animals","duration":30}}"#,
        )
        .unwrap();

        assert_eq!(
            event,
            ServerEvent::RoundStart(RoundInfo {
                category: "Animals".to_string(),
                duration: 30,
            })
        );
    }

    #[test]
    fn round_end_payload_keys_are_camel_case() {
        let event: ServerEvent = serde_json::from_str(
            r#"{"event":"roundEnd","data":{
                "topAnswers":[{"word":"cat","count":4}],
                "playerScore":12,
                "answers":[{"word":"cat","points":3,"status":"accepted","reason":"popular answer"}]
            }}"#,
        )
        .unwrap();

        let ServerEvent::RoundEnd(summary) = event else {
            panic!("expected roundEnd");
        };
        assert_eq!(summary.player_score, 12);
        assert_eq!(summary.top_answers[0].count, 4);
        assert_eq!(summary.answers[0].points, 3);
    }

    #[test]
    fn unit_events_parse_without_data() {
        let event: ServerEvent =
            serde_json::from_str(r#"{"event":"gameReset"}"#).unwrap();
        assert_eq!(event, ServerEvent::GameReset);

        let event: ServerEvent =
            serde_json::from_str(r#"{"event":"invalidNickname"}"#).unwrap();
        assert_eq!(event, ServerEvent::InvalidNickname);
    }
}
