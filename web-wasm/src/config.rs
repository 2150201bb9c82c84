//! ページ埋め込みの設定ブロック読み込み
//!
//! `<script type="application/json" id="portfolio-ui-config">` があれば上書き設定として使う。

use crate::dom;
use portfolio_ui_common::{Result, UiConfig};

pub const CONFIG_ELEMENT_ID: &str = "portfolio-ui-config";

/// 設定を読み込む。ブロックがない・壊れている場合はデフォルト値。
pub fn load() -> UiConfig {
    match read_inline() {
        Ok(Some(config)) => config,
        Ok(None) => UiConfig::default(),
        Err(err) => {
            gloo::console::warn!(format!("設定ブロックを無視します: {}", err));
            UiConfig::default()
        }
    }
}

fn read_inline() -> Result<Option<UiConfig>> {
    let Some(element) = dom::by_id(CONFIG_ELEMENT_ID)? else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    UiConfig::from_json(&json).map(Some)
}
