//! Test fixtures: an in-process relay server on an ephemeral port and
//! WebSocket client helpers.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use futures_util::{SinkExt, StreamExt};
use tokio::{net::TcpListener, net::TcpStream, sync::oneshot, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

/// How long a test waits for an expected frame
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a test waits to be sure no frame arrives
const SILENCE_TIMEOUT: Duration = Duration::from_millis(200);

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Relay server running inside the test's runtime
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<Result<(), hibiki_server::ServerError>>,
}

impl TestServer {
    pub async fn start(history_capacity: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(hibiki_server::serve(
            listener,
            history_capacity,
            std::future::pending(),
        ));
        Self { addr, handle }
    }

    /// Start a server that shuts down when the returned sender fires
    pub async fn start_with_shutdown(history_capacity: usize) -> (Self, oneshot::Sender<()>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(hibiki_server::serve(listener, history_capacity, async {
            let _ = rx.await;
        }));
        (Self { addr, handle }, tx)
    }

    /// Wait for the server task to finish
    pub async fn wait_stopped(&mut self) -> Result<(), hibiki_server::ServerError> {
        tokio::time::timeout(RECV_TIMEOUT, &mut self.handle)
            .await
            .expect("Timed out waiting for the server to stop")
            .expect("Server task panicked")
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/api/ws", self.addr)
    }

    pub async fn connect(&self) -> WsClient {
        let (ws, _response) = connect_async(self.ws_url())
            .await
            .expect("Failed to connect WebSocket");
        ws
    }

    pub async fn history(&self) -> Vec<String> {
        reqwest::get(format!("{}/api/info_list", self.base_url()))
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn send_text(ws: &mut WsClient, text: &str) {
    ws.send(Message::text(text.to_string()))
        .await
        .expect("Failed to send text frame");
}

/// Next text frame, skipping control frames
pub async fn recv_text(ws: &mut WsClient) -> String {
    tokio::time::timeout(RECV_TIMEOUT, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => return text.to_string(),
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
                other => panic!("Expected a text frame, got {other:?}"),
            }
        }
    })
    .await
    .expect("Timed out waiting for a text frame")
}

/// Wait until the server closes the connection
pub async fn wait_closed(ws: &mut WsClient) {
    tokio::time::timeout(RECV_TIMEOUT, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Close(_))) | None | Some(Err(_)) => return,
                Some(Ok(_)) => continue,
            }
        }
    })
    .await
    .expect("Timed out waiting for the connection to close")
}

/// Assert that no text frame arrives for a short while
pub async fn assert_silent(ws: &mut WsClient) {
    let result = tokio::time::timeout(SILENCE_TIMEOUT, ws.next()).await;
    if let Ok(Some(Ok(Message::Text(text)))) = result {
        panic!("Expected no message, got {text:?}");
    }
}
