//! Futures API Request/Response Types
//!
//! Serialization types for the USDT-M futures REST API that are not
//! part of the port boundary.

use serde::Deserialize;

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
  /// Exchange error code (negative, e.g. -2019).
  pub code: i64,
  /// Error message.
  pub msg: String,
}

impl std::fmt::Display for ApiErrorResponse {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Binance API error {}: {}", self.code, self.msg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_display() {
    let err: ApiErrorResponse =
      serde_json::from_str(r#"{"code": -2019, "msg": "Margin is insufficient."}"#).unwrap();
    assert_eq!(err.to_string(), "Binance API error -2019: Margin is insufficient.");
  }
}
