//! WebSocket connection handlers.
//!
//! Each connection runs two workers: the read loop (this task) submits
//! inbound frames to the registry, and a spawned write loop drains the
//! client's outbound queue onto the socket. Teardown is driven by the
//! client's [`DisconnectGuard`](crate::usecase::DisconnectGuard):
//!
//! 1. dropping the guard unregisters the client,
//! 2. the registry drops its queue sender, which closes the outbound queue,
//! 3. the write loop drains what is left, then closes the connection.

use std::{error::Error as StdError, fmt, io, sync::Arc, time::Duration};

use axum::{
    extract::{
        State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade, close_code},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite::{self, error::ProtocolError};

use crate::{
    domain::{ClientId, MessagePayload},
    ui::state::AppState,
    usecase::{ConnectClientUseCase, ConnectedClient, SendMessageUseCase},
};

/// How long the write loop may keep draining after the read side closed
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Close codes that are part of a normal disconnect
const EXPECTED_CLOSE_CODES: [u16; 4] = [
    close_code::NORMAL,
    close_code::AWAY,
    close_code::STATUS,
    close_code::ABNORMAL,
];

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connect_usecase = ConnectClientUseCase::new(state.registry.clone());
    let ConnectedClient {
        id: client_id,
        outbound,
        guard,
    } = match connect_usecase.execute(state.outbound_queue_capacity) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Rejecting connection: {}", e);
            return;
        }
    };
    tracing::info!("Client '{}' connected", client_id);

    let (sink, stream) = socket.split();
    let mut send_task = tokio::spawn(write_loop(sink, outbound, client_id));

    let send_usecase = SendMessageUseCase::new(state.registry.clone());
    let (reason, writer_finished) = tokio::select! {
        reason = read_loop(stream, &send_usecase, state.shutdown.clone(), client_id) => (reason, false),
        _ = &mut send_task => (CloseReason::WriterStopped, true),
    };

    if reason.is_anomaly() {
        tracing::warn!("Client '{}' closed unexpectedly: {}", client_id, reason);
    } else {
        tracing::info!("Client '{}' disconnected: {}", client_id, reason);
    }

    drop(guard);

    if !writer_finished
        && tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut send_task)
            .await
            .is_err()
    {
        tracing::warn!(
            "Writer for client '{}' did not finish within {:?}, aborting",
            client_id,
            WRITER_DRAIN_TIMEOUT
        );
        send_task.abort();
    }
}

/// Consume inbound frames until the connection ends or the server shuts down
async fn read_loop(
    mut stream: SplitStream<WebSocket>,
    send_usecase: &SendMessageUseCase,
    mut shutdown: watch::Receiver<bool>,
    client_id: ClientId,
) -> CloseReason {
    if *shutdown.borrow_and_update() {
        return CloseReason::Shutdown;
    }

    loop {
        let frame = tokio::select! {
            frame = stream.next() => frame,
            _ = shutdown.changed() => return CloseReason::Shutdown,
        };

        let message = match frame {
            Some(Ok(message)) => message,
            Some(Err(e)) => return CloseReason::from_read_error(e),
            None => return CloseReason::StreamEnded,
        };

        let payload = match message {
            Message::Text(text) => MessagePayload::from(text),
            Message::Binary(bytes) => match MessagePayload::try_from(&bytes[..]) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!("Dropping binary frame from '{}': {}", client_id, e);
                    continue;
                }
            },
            Message::Close(frame) => return CloseReason::from_close_frame(frame),
            // Ping/pong is handled automatically by the WebSocket protocol
            Message::Ping(_) | Message::Pong(_) => continue,
        };

        tracing::debug!("Received {} bytes from '{}'", payload.len(), client_id);
        if let Err(e) = send_usecase.execute(payload) {
            tracing::error!("Failed to broadcast message from '{}': {}", client_id, e);
            return CloseReason::RegistryUnavailable;
        }
    }
}

/// Drain the outbound queue onto the socket, then close the connection
async fn write_loop(
    mut sink: SplitSink<WebSocket, Message>,
    mut outbound: mpsc::Receiver<MessagePayload>,
    client_id: ClientId,
) {
    while let Some(payload) = outbound.recv().await {
        if let Err(e) = sink.send(Message::Text(payload.to_frame_text())).await {
            tracing::debug!("Failed to write to client '{}': {}", client_id, e);
            return;
        }
    }

    // Queue closed: the client has been unregistered.
    if let Err(e) = sink.close().await {
        tracing::debug!("Failed to close connection of '{}': {}", client_id, e);
    }
}

/// Why a client's read loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
enum CloseReason {
    /// Peer sent a close frame, with its close code if any
    PeerClosed(Option<u16>),
    /// Stream ended without a close frame
    StreamEnded,
    ReadError { expected: bool, message: String },
    /// The write loop stopped first (write error)
    WriterStopped,
    Shutdown,
    RegistryUnavailable,
}

impl CloseReason {
    fn from_close_frame(frame: Option<CloseFrame>) -> Self {
        Self::PeerClosed(frame.map(|frame| frame.code))
    }

    fn from_read_error(err: axum::Error) -> Self {
        let inner = err.into_inner();
        Self::ReadError {
            expected: is_expected_read_error(&*inner),
            message: inner.to_string(),
        }
    }

    /// Whether this close deserves a diagnostic log
    fn is_anomaly(&self) -> bool {
        match self {
            Self::PeerClosed(Some(code)) => !EXPECTED_CLOSE_CODES.contains(code),
            Self::ReadError { expected, .. } => !expected,
            Self::RegistryUnavailable => true,
            Self::PeerClosed(None) | Self::StreamEnded | Self::WriterStopped | Self::Shutdown => {
                false
            }
        }
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeerClosed(Some(code)) => write!(f, "peer closed (code {code})"),
            Self::PeerClosed(None) => write!(f, "peer closed"),
            Self::StreamEnded => write!(f, "connection ended"),
            Self::ReadError { message, .. } => write!(f, "read error: {message}"),
            Self::WriterStopped => write!(f, "write failed"),
            Self::Shutdown => write!(f, "server shutting down"),
            Self::RegistryUnavailable => write!(f, "registry unavailable"),
        }
    }
}

/// Peer going away or the connection dropping is not an anomaly.
fn is_expected_read_error(err: &(dyn StdError + 'static)) -> bool {
    if let Some(ws_err) = err.downcast_ref::<tungstenite::Error>() {
        return match ws_err {
            tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed => true,
            tungstenite::Error::Protocol(ProtocolError::ResetWithoutClosingHandshake) => true,
            tungstenite::Error::Io(io_err) => is_expected_io_error(io_err),
            _ => false,
        };
    }

    let mut source = Some(err);
    while let Some(current) = source {
        if let Some(io_err) = current.downcast_ref::<io::Error>() {
            return is_expected_io_error(io_err);
        }
        source = current.source();
    }
    false
}

fn is_expected_io_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::TimedOut
    )
}
