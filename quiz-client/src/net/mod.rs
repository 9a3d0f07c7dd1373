use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use quiz_types::{ClientCommand, ServerEvent};

pub mod ws;

pub use ws::WsTransport;

/// Capacity of the event channel handed to the display loop.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// How long `shutdown` waits for the connection loop before aborting it.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum NetError {
    #[error("not connected to the game server")]
    NotConnected,
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}

/// Bidirectional text channel to the game server.
///
/// The production implementation is [`WsTransport`]; tests substitute a
/// channel-backed mock so client logic runs against a scripted server.
#[async_trait::async_trait]
pub trait Transport: Send + 'static {
    async fn send(&mut self, text: String) -> Result<(), NetError>;

    /// Next inbound text frame. `None` means the server closed the
    /// connection.
    async fn recv(&mut self) -> Option<Result<String, NetError>>;

    async fn close(&mut self) -> Result<(), NetError>;
}

/// What the connection loop reports to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum NetEvent {
    /// The transport is up. Fired once, before any server event.
    Connected,
    Event(ServerEvent),
    /// The connection is gone, for whatever reason. Always delivered last.
    Disconnected { reason: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to the background connection loop.
///
/// `send` queues a command and returns once it is handed to the loop; the
/// loop serializes it and writes it to the transport. Server events arrive
/// on the receiver returned by [`Connection::start`].
pub struct Connection {
    id: ConnectionId,
    cmd_tx: mpsc::UnboundedSender<ClientCommand>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Connection {
    pub fn start(transport: impl Transport) -> (Self, mpsc::Receiver<NetEvent>) {
        let id = ConnectionId::new();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(connection_loop(
            id,
            transport,
            cmd_rx,
            event_tx,
            shutdown_rx,
        ));

        let connection = Self {
            id,
            cmd_tx,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        };

        (connection, event_rx)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queue a command for the server.
    pub fn send(&self, command: ClientCommand) -> Result<(), NetError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| NetError::NotConnected)
    }

    /// Close the transport and stop the connection loop.
    pub async fn shutdown(mut self) {
        debug!(connection = %self.id, "shutdown requested");

        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        if let Some(mut task) = self.task.take() {
            match tokio::time::timeout(SHUTDOWN_TIMEOUT, &mut task).await {
                Ok(Ok(())) => {}
                Ok(Err(join_err)) => {
                    warn!(connection = %self.id, "connection loop join error: {join_err}");
                }
                Err(_) => {
                    warn!(connection = %self.id, "connection loop did not exit in time, aborting");
                    task.abort();
                }
            }
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // No executor to drive a graceful close from here; aborting drops
        // the loop future and the transport with it.
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Background loop multiplexing outgoing commands and inbound frames.
///
/// Exits when the command channel closes, the shutdown signal fires, the
/// server closes the connection, or the transport errors. A `Disconnected`
/// event is emitted on every exit path.
async fn connection_loop(
    id: ConnectionId,
    mut transport: impl Transport,
    mut cmd_rx: mpsc::UnboundedReceiver<ClientCommand>,
    event_tx: mpsc::Sender<NetEvent>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    info!(connection = %id, "connection loop started");

    if event_tx.send(NetEvent::Connected).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(command) => {
                        let json = match serde_json::to_string(&command) {
                            Ok(json) => json,
                            Err(e) => {
                                // A command that cannot serialize is a bug,
                                // not a reason to drop the connection.
                                error!(connection = %id, "failed to serialize command: {e}");
                                continue;
                            }
                        };
                        if let Err(e) = transport.send(json).await {
                            warn!(connection = %id, "send failed: {e}");
                            emit_disconnected(&event_tx, Some(format!("send failed: {e}"))).await;
                            break;
                        }
                    }
                    None => {
                        debug!(connection = %id, "command channel closed");
                        let _ = transport.close().await;
                        emit_disconnected(&event_tx, Some("client shut down".into())).await;
                        break;
                    }
                }
            }

            _ = &mut shutdown_rx => {
                debug!(connection = %id, "shutdown signal received");
                let _ = transport.close().await;
                emit_disconnected(&event_tx, Some("client shut down".into())).await;
                break;
            }

            incoming = transport.recv() => {
                match incoming {
                    Some(Ok(text)) => {
                        match serde_json::from_str::<ServerEvent>(&text) {
                            Ok(event) => {
                                if event_tx.send(NetEvent::Event(event)).await.is_err() {
                                    debug!(connection = %id, "event receiver dropped");
                                    let _ = transport.close().await;
                                    break;
                                }
                            }
                            Err(e) => {
                                warn!(connection = %id, "ignoring malformed frame: {e} — raw: {text}");
                            }
                        }
                    }
                    Some(Err(e)) => {
                        warn!(connection = %id, "receive failed: {e}");
                        emit_disconnected(&event_tx, Some(format!("receive failed: {e}"))).await;
                        break;
                    }
                    None => {
                        info!(connection = %id, "connection closed by server");
                        emit_disconnected(&event_tx, None).await;
                        break;
                    }
                }
            }
        }
    }

    debug!(connection = %id, "connection loop exited");
}

async fn emit_disconnected(event_tx: &mpsc::Sender<NetEvent>, reason: Option<String>) {
    let _ = event_tx.send(NetEvent::Disconnected { reason }).await;
}
