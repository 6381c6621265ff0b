//! アップロードAPIレスポンスパーサー
//!
//! curl が標準出力に書いたレスポンス本文をJSONとして解釈し、
//! secure_url の有無で分類する

use crate::error::{Error, Result};
use serde_json::Value;

/// 成功時にレスポンスに含まれるフィールド名
pub const SECURE_URL_FIELD: &str = "secure_url";

/// レスポンスの分類結果
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseKind {
    /// secure_url を含む（アップロード成功）
    SecureUrl(String),
    /// JSONとしては正しいが secure_url を含まない
    Unexpected(Value),
}

/// レスポンス本文を分類
///
/// # Arguments
/// * `response` - curl の標準出力
///
/// # Returns
/// * `Ok(ResponseKind::SecureUrl)` - 文字列の secure_url を含むオブジェクト
/// * `Ok(ResponseKind::Unexpected)` - それ以外のJSON
/// * `Err` - 空のレスポンス、またはJSONとして不正
///
/// # Examples
/// ```
/// use cloudinary_upload_common::{classify_response, ResponseKind};
///
/// let kind = classify_response(r#"{"secure_url": "https://res.cloudinary.com/a.png"}"#).unwrap();
/// assert_eq!(kind, ResponseKind::SecureUrl("https://res.cloudinary.com/a.png".into()));
/// ```
pub fn classify_response(response: &str) -> Result<ResponseKind> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(Error::Parse("レスポンスが空です".into()));
    }

    let value: Value = serde_json::from_str(trimmed)?;

    // secure_url が文字列の場合のみ成功扱い
    match value.get(SECURE_URL_FIELD).and_then(Value::as_str) {
        Some(url) => Ok(ResponseKind::SecureUrl(url.to_string())),
        None => Ok(ResponseKind::Unexpected(value)),
    }
}
