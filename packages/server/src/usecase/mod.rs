//! UseCase 層
//!
//! アプリケーションの操作を実装するレイヤー。
//! UI 層から呼び出され、Domain 層の ClientRegistry を操作します。

pub mod clear_history;
pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod get_history;
pub mod send_message;

pub use clear_history::ClearHistoryUseCase;
pub use connect_client::{ConnectClientUseCase, ConnectedClient};
pub use disconnect_client::{DisconnectClientUseCase, DisconnectGuard};
pub use error::{ConnectError, SendMessageError};
pub use get_history::GetHistoryUseCase;
pub use send_message::SendMessageUseCase;
