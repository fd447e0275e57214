//! Cloneable handle to the registry's processing loop.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{Client, ClientId, ClientRegistry, MessagePayload, RegistryError};

use super::{RegistryActor, RegistryCommand};

/// Mailbox sender for the registry actor.
///
/// Implements the [`ClientRegistry`] port. Submissions never block, so they
/// are safe to call from `Drop`.
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    sender: mpsc::UnboundedSender<RegistryCommand>,
}

impl RegistryHandle {
    /// Spawn the registry loop on the current tokio runtime.
    pub fn spawn(history_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = RegistryActor::new(history_capacity, receiver);
        tokio::spawn(actor.run());
        Self { sender }
    }

    fn submit(&self, command: RegistryCommand) -> Result<(), RegistryError> {
        self.sender
            .send(command)
            .map_err(|_| RegistryError::Closed)
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> RegistryCommand,
    ) -> Result<T, RegistryError> {
        let (tx, rx) = oneshot::channel();
        self.submit(command(tx))?;
        rx.await.map_err(|_| RegistryError::Closed)
    }
}

#[async_trait]
impl ClientRegistry for RegistryHandle {
    fn register(&self, client: Client) -> Result<(), RegistryError> {
        self.submit(RegistryCommand::Register(client))
    }

    fn unregister(&self, client_id: ClientId) {
        if self.submit(RegistryCommand::Unregister(client_id)).is_err() {
            tracing::debug!(
                "Registry is not running, skipping unregister of '{}'",
                client_id
            );
        }
    }

    fn broadcast(&self, payload: MessagePayload) -> Result<(), RegistryError> {
        self.submit(RegistryCommand::Broadcast(payload))
    }

    async fn history(&self) -> Result<Vec<String>, RegistryError> {
        self.request(|respond_to| RegistryCommand::History { respond_to })
            .await
    }

    async fn clear_history(&self) -> Result<(), RegistryError> {
        self.request(|respond_to| RegistryCommand::ClearHistory { respond_to })
            .await
    }

    async fn client_count(&self) -> Result<usize, RegistryError> {
        self.request(|respond_to| RegistryCommand::ClientCount { respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_is_visible_in_history() {
        // テスト項目: ブロードキャストしたメッセージが順序通り履歴に残る
        // given (前提条件):
        let registry = RegistryHandle::spawn(10);

        // when (操作):
        registry.broadcast(MessagePayload::from("first")).unwrap();
        registry.broadcast(MessagePayload::from("second")).unwrap();

        // then (期待する結果): メールボックスは到着順に処理される
        assert_eq!(registry.history().await.unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_register_then_broadcast_delivers() {
        // テスト項目: 登録後のブロードキャストが送信キューに届く
        // given (前提条件):
        let registry = RegistryHandle::spawn(10);
        let (client, mut rx) = Client::new(8);
        registry.register(client).unwrap();

        // when (操作):
        registry.broadcast(MessagePayload::from("hello")).unwrap();

        // then (期待する結果):
        assert_eq!(rx.recv().await.unwrap().as_str(), "hello");
        assert_eq!(registry.client_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unregister_closes_queue() {
        // テスト項目: 解除するとクライアントの送信キューが閉じる
        // given (前提条件):
        let registry = RegistryHandle::spawn(10);
        let (client, mut rx) = Client::new(8);
        let client_id = client.id;
        registry.register(client).unwrap();

        // when (操作):
        registry.unregister(client_id);

        // then (期待する結果):
        assert!(rx.recv().await.is_none());
        assert_eq!(registry.client_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clear_history() {
        // テスト項目: clear_history の完了後は履歴が空
        // given (前提条件):
        let registry = RegistryHandle::spawn(10);
        registry.broadcast(MessagePayload::from("a")).unwrap();

        // when (操作):
        registry.clear_history().await.unwrap();

        // then (期待する結果):
        assert!(registry.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_registry_reports_error() {
        // テスト項目: ループが存在しない場合は Closed エラーになる
        // given (前提条件):
        let (sender, receiver) = mpsc::unbounded_channel();
        drop(receiver);
        let registry = RegistryHandle { sender };

        // when (操作):
        let broadcast = registry.broadcast(MessagePayload::from("lost"));
        let history = registry.history().await;

        // then (期待する結果):
        assert_eq!(broadcast, Err(RegistryError::Closed));
        assert_eq!(history, Err(RegistryError::Closed));

        // unregister は失敗しても panic しない
        registry.unregister(crate::domain::ClientIdFactory::generate());
    }
}
