//! UseCase: クライアント切断処理
//!
//! 切断時の解除は [`DisconnectGuard`] の drop で 1 回だけ実行される。
//! 正常終了・エラー・panic・タスクのキャンセルのいずれでも同じ経路を通る。

use std::sync::Arc;

use crate::domain::{ClientId, ClientRegistry};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    registry: Arc<dyn ClientRegistry>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(registry: Arc<dyn ClientRegistry>) -> Self {
        Self { registry }
    }

    /// クライアントを Registry から解除する
    ///
    /// 未登録・解除済みのクライアントでもエラーにはならない。
    /// 解除されると Registry が送信キューの送信側を破棄し、キューが閉じる。
    pub fn execute(&self, client_id: ClientId) {
        self.registry.unregister(client_id);
    }
}

/// drop 時にクライアントを解除するガード
pub struct DisconnectGuard {
    usecase: DisconnectClientUseCase,
    client_id: ClientId,
}

impl DisconnectGuard {
    pub fn new(registry: Arc<dyn ClientRegistry>, client_id: ClientId) -> Self {
        Self {
            usecase: DisconnectClientUseCase::new(registry),
            client_id,
        }
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }
}

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        tracing::debug!("Tearing down client '{}'", self.client_id);
        self.usecase.execute(self.client_id);
    }
}
