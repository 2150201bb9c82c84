//! テーマ設定の保存（localStorage）とOS設定の参照

use crate::dom::{self, js_err};
use portfolio_ui_common::{Error, Result};
use web_sys::Storage;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn local_storage() -> Result<Storage> {
    dom::window()?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| Error::Dom("localStorage が利用できません".into()))
}

/// 保存済みのテーマ値（未保存・ストレージ不可なら `None`）
pub fn load_theme(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn save_theme(key: &str, value: &str) -> Result<()> {
    local_storage()?.set_item(key, value).map_err(js_err)
}

pub fn prefers_dark() -> bool {
    dom::window()
        .ok()
        .and_then(|window| window.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map_or(false, |query| query.matches())
}
