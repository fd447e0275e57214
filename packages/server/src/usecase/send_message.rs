//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 受信したペイロードがそのまま Registry のブロードキャストに渡ることを確認
//! - Registry 停止時のエラーハンドリングを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：ブロードキャスト成功
//! - 異常系：Registry 停止中

use std::sync::Arc;

use crate::domain::{ClientRegistry, MessagePayload};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    registry: Arc<dyn ClientRegistry>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(registry: Arc<dyn ClientRegistry>) -> Self {
        Self { registry }
    }

    /// メッセージ送信を実行
    ///
    /// 履歴への追加と接続中の全クライアント（送信者を含む）への配信は
    /// Registry のループ内で行われる。
    pub fn execute(&self, payload: MessagePayload) -> Result<(), SendMessageError> {
        self.registry.broadcast(payload)?;
        Ok(())
    }
}
