//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("reveal_threshold は 0.0〜1.0 の範囲で指定してください".to_string());
        let display = format!("{}", error);
        assert_eq!(
            display,
            "Config error: reveal_threshold は 0.0〜1.0 の範囲で指定してください"
        );
    }

    #[test]
    fn test_error_display_dom() {
        let error = Error::Dom("#sliderTrack が見つかりません".to_string());
        assert_eq!(format!("{}", error), "DOM error: #sliderTrack が見つかりません");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("テスト"));
    }
}
