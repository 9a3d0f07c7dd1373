use quiz_client::{NetError, Transport};
use quiz_types::{ClientCommand, Player, RosterUpdate, RoundInfo, RoundSummary, ServerEvent};
use tokio::sync::mpsc;

/// Channel-backed [`Transport`] so client logic runs against a scripted
/// server instead of a real websocket.
pub struct MockTransport {
    inbound_rx: mpsc::UnboundedReceiver<Result<String, NetError>>,
    outbound_tx: mpsc::UnboundedSender<String>,
}

/// The test's side of a [`MockTransport`]: push server frames, observe
/// client commands.
pub struct ScriptedServer {
    inbound_tx: Option<mpsc::UnboundedSender<Result<String, NetError>>>,
    outbound_rx: mpsc::UnboundedReceiver<String>,
}

pub fn scripted_server() -> (MockTransport, ScriptedServer) {
    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

    (
        MockTransport {
            inbound_rx,
            outbound_tx,
        },
        ScriptedServer {
            inbound_tx: Some(inbound_tx),
            outbound_rx,
        },
    )
}

impl ScriptedServer {
    pub fn push(&self, event: &ServerEvent) {
        let json = serde_json::to_string(event).expect("serializable event");
        self.push_raw(&json);
    }

    pub fn push_raw(&self, raw: &str) {
        self.inbound_tx
            .as_ref()
            .expect("server still open")
            .send(Ok(raw.to_string()))
            .expect("transport still open");
    }

    /// Drop the server side; the client sees a clean EOF.
    pub fn close(&mut self) {
        self.inbound_tx = None;
    }

    pub async fn next_raw(&mut self) -> Option<String> {
        self.outbound_rx.recv().await
    }

    pub async fn next_command(&mut self) -> Option<ClientCommand> {
        let raw = self.outbound_rx.recv().await?;
        Some(serde_json::from_str(&raw).expect("well-formed client command"))
    }

    /// Assert nothing was sent within a short grace period.
    pub async fn assert_silent(&mut self) {
        let outcome =
            tokio::time::timeout(std::time::Duration::from_millis(50), self.outbound_rx.recv())
                .await;
        assert!(outcome.is_err(), "unexpected outbound command: {outcome:?}");
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, text: String) -> Result<(), NetError> {
        self.outbound_tx
            .send(text)
            .map_err(|_| NetError::NotConnected)
    }

    async fn recv(&mut self) -> Option<Result<String, NetError>> {
        self.inbound_rx.recv().await
    }

    async fn close(&mut self) -> Result<(), NetError> {
        Ok(())
    }
}

pub fn round_start(category: &str, duration: u32) -> ServerEvent {
    ServerEvent::RoundStart(RoundInfo {
        category: category.to_string(),
        duration,
    })
}

pub fn round_end(summary: RoundSummary) -> ServerEvent {
    ServerEvent::RoundEnd(summary)
}

pub fn roster(nickname: &str, players: &[(&str, i32)]) -> RosterUpdate {
    RosterUpdate {
        nickname: nickname.to_string(),
        players: players
            .iter()
            .map(|(nickname, score)| Player {
                nickname: nickname.to_string(),
                score: *score,
            })
            .collect(),
    }
}
