//! UI設定
//!
//! ページスクリプトで固定されていた数値をまとめたもの。
//! ページ側のJSONブロックで上書きできる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// テーマ設定を保存するlocalStorageキー
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme_storage_key: String,
    /// セクション判定時に offsetTop から差し引く値（固定ヘッダー分）
    pub section_offset_px: f64,
    /// アンカーリンクのスクロール先から差し引く値
    pub anchor_offset_px: f64,
    /// スキルバー表示判定の交差率
    pub reveal_threshold: f64,
    /// 送信シミュレーションの待ち時間
    pub submit_delay_ms: u32,
    /// 送信完了メッセージを隠すまでの時間
    pub success_hide_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY.into(),
            section_offset_px: 100.0,
            anchor_offset_px: 70.0,
            reveal_threshold: 0.2,
            submit_delay_ms: 2000,
            success_hide_ms: 5000,
        }
    }
}

impl UiConfig {
    /// JSON文字列から読み込み（省略したキーはデフォルト値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(Error::Config(format!(
                "reveal_threshold は 0.0〜1.0 の範囲で指定してください: {}",
                self.reveal_threshold
            )));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(Error::Config("theme_storage_key が空です".into()));
        }
        Ok(())
    }
}
