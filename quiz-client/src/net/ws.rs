use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

use crate::net::{NetError, Transport};

/// Websocket-backed [`Transport`].
pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsTransport {
    /// Connect to the game server at the given `ws://` / `wss://` URL.
    pub async fn connect(url: &str) -> Result<Self, NetError> {
        let (stream, response) = connect_async(url).await?;
        debug!(status = %response.status(), "websocket handshake complete");
        Ok(Self { stream })
    }
}

#[async_trait::async_trait]
impl Transport for WsTransport {
    async fn send(&mut self, text: String) -> Result<(), NetError> {
        self.stream.send(Message::text(text)).await?;
        Ok(())
    }

    async fn recv(&mut self) -> Option<Result<String, NetError>> {
        while let Some(item) = self.stream.next().await {
            match item {
                Ok(Message::Text(text)) => return Some(Ok(text.to_string())),
                Ok(Message::Close(_)) => return None,
                // Pings are answered by tungstenite itself; nothing else
                // carries protocol frames.
                Ok(_) => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
        None
    }

    async fn close(&mut self) -> Result<(), NetError> {
        self.stream.close(None).await?;
        Ok(())
    }
}
