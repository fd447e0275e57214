//! UseCase: 履歴削除処理

use std::sync::Arc;

use crate::domain::ClientRegistry;

/// 履歴削除のユースケース
pub struct ClearHistoryUseCase {
    registry: Arc<dyn ClientRegistry>,
}

impl ClearHistoryUseCase {
    /// 新しい ClearHistoryUseCase を作成
    pub fn new(registry: Arc<dyn ClientRegistry>) -> Self {
        Self { registry }
    }

    /// 履歴を削除する
    ///
    /// Registry のループ経由で実行されるため、ブロードキャストと競合しない。
    /// Registry が停止している場合は警告ログのみ出力する。
    pub async fn execute(&self) {
        if let Err(e) = self.registry.clear_history().await {
            tracing::warn!("Failed to clear history: {}", e);
        }
    }
}
