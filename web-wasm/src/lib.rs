//! Portfolio UI (WASM)
//!
//! 静的ポートフォリオページに挙動を追加する。各コントローラは独立しており、
//! 対象要素がページに存在する場合だけ初期化される。

pub mod config;
pub mod controllers;
mod dom;
mod storage;

use controllers::{
    carousel, contact_form, expandable, filter, modal, navigation, reading_progress, skill_reveal,
    smooth_scroll, theme,
};
use gloo::events::EventListener;
use portfolio_ui_common::{Result, UiConfig};
use wasm_bindgen::prelude::*;

type InitFn = fn(&UiConfig) -> Result<bool>;

const CONTROLLERS: [(&str, InitFn); 10] = [
    ("reading-progress", reading_progress::init),
    ("theme", theme::init),
    ("navigation", navigation::init),
    ("filter", filter::init),
    ("expandable", expandable::init),
    ("skill-reveal", skill_reveal::init),
    ("contact-form", contact_form::init),
    ("smooth-scroll", smooth_scroll::init),
    ("carousel", carousel::init),
    ("image-modal", modal::init),
];

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    match dom::document() {
        Ok(document) if document.ready_state() == "loading" => {
            EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
        }
        Ok(_) => boot(),
        Err(err) => gloo::console::warn!(format!("portfolio-ui: 起動できません: {}", err)),
    }
}

/// 全コントローラを初期化する
///
/// 1つが失敗しても残りの初期化は続ける。
pub fn boot() {
    let config = config::load();

    let mut active = 0;
    for (name, init) in CONTROLLERS {
        match init(&config) {
            Ok(true) => active += 1,
            Ok(false) => gloo::console::log!(format!("{}: 対象要素なし", name)),
            Err(err) => gloo::console::warn!(format!("{}: 初期化失敗: {}", name, err)),
        }
    }

    gloo::console::log!(format!(
        "portfolio-ui: {}/{} controllers ready",
        active,
        CONTROLLERS.len()
    ));
}
