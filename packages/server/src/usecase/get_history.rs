//! UseCase: 履歴取得処理
//!
//! 履歴の取得は失敗しない。Registry が応答しない場合は空の履歴として扱う。

use std::sync::Arc;

use crate::domain::ClientRegistry;

/// 履歴取得のユースケース
pub struct GetHistoryUseCase {
    registry: Arc<dyn ClientRegistry>,
}

impl GetHistoryUseCase {
    /// 新しい GetHistoryUseCase を作成
    pub fn new(registry: Arc<dyn ClientRegistry>) -> Self {
        Self { registry }
    }

    /// 履歴のスナップショット（古い順）を取得
    pub async fn execute(&self) -> Vec<String> {
        match self.registry.history().await {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!("Failed to read history: {}", e);
                Vec::new()
            }
        }
    }
}
