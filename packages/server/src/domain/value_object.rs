//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use axum::extract::ws::Utf8Bytes;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Client identifier value object.
///
/// Opaque handle for one connection. Unique for the lifetime of the
/// connection and used as the registry's map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID value.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message payload value object.
///
/// The text of one broadcast message. Backed by the same reference-counted
/// buffer a text frame uses, so handing it to every client's outbound queue
/// and onto the wire never copies the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePayload(Utf8Bytes);

impl MessagePayload {
    /// Get the payload as text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Frame-ready text sharing this payload's buffer.
    pub fn to_frame_text(&self) -> Utf8Bytes {
        self.0.clone()
    }

    /// Length of the payload in bytes.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<Utf8Bytes> for MessagePayload {
    fn from(text: Utf8Bytes) -> Self {
        Self(text)
    }
}

impl From<String> for MessagePayload {
    fn from(text: String) -> Self {
        Self(Utf8Bytes::from(text))
    }
}

impl From<&str> for MessagePayload {
    fn from(text: &str) -> Self {
        Self::from(text.to_owned())
    }
}

impl TryFrom<Vec<u8>> for MessagePayload {
    type Error = ValueObjectError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        String::from_utf8(bytes)
            .map(Self::from)
            .map_err(|e| ValueObjectError::PayloadNotUtf8 {
                valid_up_to: e.utf8_error().valid_up_to(),
            })
    }
}

impl TryFrom<&[u8]> for MessagePayload {
    type Error = ValueObjectError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        std::str::from_utf8(bytes)
            .map(Self::from)
            .map_err(|e| ValueObjectError::PayloadNotUtf8 {
                valid_up_to: e.valid_up_to(),
            })
    }
}

impl fmt::Display for MessagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_display_matches_uuid() {
        // テスト項目: ClientId の表示形式が UUID と一致する
        // given (前提条件):
        let uuid = Uuid::new_v4();

        // when (操作):
        let client_id = ClientId::from_uuid(uuid);

        // then (期待する結果):
        assert_eq!(client_id.to_string(), uuid.to_string());
        assert_eq!(client_id.as_uuid(), &uuid);
    }

    #[test]
    fn test_payload_from_string() {
        // テスト項目: String から MessagePayload を作成できる
        // when (操作):
        let payload = MessagePayload::from("hello".to_string());

        // then (期待する結果):
        assert_eq!(payload.as_str(), "hello");
        assert_eq!(payload.len(), 5);
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_payload_empty_is_allowed() {
        // テスト項目: 空のペイロードも許容される（そのまま中継する）
        // when (操作):
        let payload = MessagePayload::from("");

        // then (期待する結果):
        assert!(payload.is_empty());
    }

    #[test]
    fn test_payload_from_utf8_bytes() {
        // テスト項目: UTF-8 のバイト列から MessagePayload を作成できる
        // when (操作):
        let result = MessagePayload::try_from("こんにちは".as_bytes().to_vec());

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "こんにちは");
    }

    #[test]
    fn test_payload_from_invalid_utf8_bytes() {
        // テスト項目: 不正な UTF-8 のバイト列はエラーになる
        // when (操作):
        let result = MessagePayload::try_from(&[b'o', b'k', 0xff, 0xfe][..]);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::PayloadNotUtf8 { valid_up_to: 2 })
        );
    }

    #[test]
    fn test_payload_clone_shares_text() {
        // テスト項目: clone したペイロードは同じ内容を持つ
        // given (前提条件):
        let payload = MessagePayload::from("shared");

        // when (操作):
        let cloned = payload.clone();

        // then (期待する結果):
        assert_eq!(payload, cloned);
        assert_eq!(cloned.to_string(), "shared");
    }

    #[test]
    fn test_frame_text_shares_payload_buffer() {
        // テスト項目: 送信用テキストはペイロードのバッファをコピーせず共有する
        // given (前提条件):
        let payload = MessagePayload::from(Utf8Bytes::from("fan-out".to_string()));

        // when (操作):
        let first = payload.to_frame_text();
        let second = payload.clone().to_frame_text();

        // then (期待する結果):
        assert_eq!(first.as_str(), "fan-out");
        assert_eq!(first.as_str().as_ptr(), payload.as_str().as_ptr());
        assert_eq!(second.as_str().as_ptr(), payload.as_str().as_ptr());
    }
}
