//! UseCase: クライアント接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 登録に成功したクライアントだけが解除ガードを持つことを保証する
//! - ガードが drop されたときに必ず 1 回だけ解除されることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録成功
//! - 異常系：Registry 停止中の接続

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{Client, ClientId, ClientRegistry, MessagePayload};

use super::{DisconnectGuard, error::ConnectError};

/// 登録済みクライアント
///
/// `guard` が drop されると Registry から解除される。
pub struct ConnectedClient {
    pub id: ClientId,
    /// 送信キューの受信側（writer タスクが所有する）
    pub outbound: mpsc::Receiver<MessagePayload>,
    pub guard: DisconnectGuard,
}

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    registry: Arc<dyn ClientRegistry>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(registry: Arc<dyn ClientRegistry>) -> Self {
        Self { registry }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `queue_capacity` - 送信キューの容量
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectedClient)` - 登録成功
    /// * `Err(ConnectError)` - 登録失敗
    pub fn execute(&self, queue_capacity: usize) -> Result<ConnectedClient, ConnectError> {
        let (client, outbound) = Client::new(queue_capacity);
        let id = client.id;

        self.registry.register(client)?;

        Ok(ConnectedClient {
            id,
            outbound,
            guard: DisconnectGuard::new(self.registry.clone(), id),
        })
    }
}
