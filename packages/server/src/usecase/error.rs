//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RegistryError;

/// クライアント接続時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// Registry のループが停止している
    #[error("failed to register client: {0}")]
    RegistryUnavailable(#[from] RegistryError),
}

/// メッセージ送信時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Registry のループが停止している
    #[error("failed to broadcast message: {0}")]
    RegistryUnavailable(#[from] RegistryError),
}
