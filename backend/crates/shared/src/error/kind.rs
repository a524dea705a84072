//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum. Each kind is one of the canonical RPC
//! status classes, with a fixed HTTP status mapping for the JSON transport.

use serde::Serialize;

/// エラー種別の列挙体
///
/// RPC の正規ステータスコードに対応するエラー分類を定義します。
/// JSON トランスポートでは各バリアントを HTTP ステータスコードにマッピングします。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::InvalidArgument;
/// assert_eq!(kind.code(), 3);
/// assert_eq!(kind.status_code(), 400);
/// assert_eq!(kind.as_str(), "INVALID_ARGUMENT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 3 - 引数が不正
    InvalidArgument,
    /// 5 - リソースが見つからない
    NotFound,
    /// 7 - 権限なし（検証に失敗した証明など）
    PermissionDenied,
    /// 8 - リソース枯渇
    ResourceExhausted,
    /// 9 - 前提条件を満たしていない
    FailedPrecondition,
    /// 13 - サーバー内部エラー
    Internal,
    /// 14 - サービス利用不可
    Unavailable,
    /// 16 - 認証が必要
    Unauthenticated,
}

impl ErrorKind {
    /// 正規ステータスコード（数値）を取得
    #[inline]
    pub const fn code(&self) -> u8 {
        match self {
            ErrorKind::InvalidArgument => 3,
            ErrorKind::NotFound => 5,
            ErrorKind::PermissionDenied => 7,
            ErrorKind::ResourceExhausted => 8,
            ErrorKind::FailedPrecondition => 9,
            ErrorKind::Internal => 13,
            ErrorKind::Unavailable => 14,
            ErrorKind::Unauthenticated => 16,
        }
    }

    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::PermissionDenied.status_code(), 403);
    /// assert_eq!(ErrorKind::Internal.status_code(), 500);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidArgument | ErrorKind::FailedPrecondition => 400,
            ErrorKind::Unauthenticated => 401,
            ErrorKind::PermissionDenied => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::ResourceExhausted => 429,
            ErrorKind::Internal => 500,
            ErrorKind::Unavailable => 503,
        }
    }

    /// 正規ステータス名を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::PermissionDenied => "PERMISSION_DENIED",
            ErrorKind::ResourceExhausted => "RESOURCE_EXHAUSTED",
            ErrorKind::FailedPrecondition => "FAILED_PRECONDITION",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::Unavailable => "UNAVAILABLE",
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 呼び出し側の入力に起因するエラーかどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
