//! テーマ切替ボタン
//!
//! 保存値 → OS設定 → ライト の順で初期テーマを決め、クリックで切り替える。
//! クラス・アイコン・ARIA属性・保存値は同じ `ThemeView` から反映する。

use crate::dom::{self, js_err};
use crate::storage;
use gloo::events::EventListener;
use portfolio_ui_common::theme::DARK_MODE_CLASS;
use portfolio_ui_common::{Result, Theme, ThemeState, ThemeView, UiConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

pub fn init(config: &UiConfig) -> Result<bool> {
    let Some(toggle) = dom::query(".theme-toggle")? else {
        return Ok(false);
    };

    let key = config.theme_storage_key.clone();
    let stored = storage::load_theme(&key);
    let initial = Theme::resolve(stored.as_deref(), storage::prefers_dark());
    render(&toggle, &initial.view())?;

    let state = Rc::new(RefCell::new(ThemeState::new(initial)));
    let target = toggle.clone();
    EventListener::new(&toggle, "click", move |_| {
        dom::warn_on_err("theme", switch(&state, &target, &key));
    })
    .forget();

    Ok(true)
}

/// 保存に成功した場合だけ状態とDOMを切り替える
fn switch(state: &RefCell<ThemeState>, toggle: &Element, key: &str) -> Result<()> {
    let next = state.borrow().next_view();
    storage::save_theme(key, next.storage_value)?;
    let view = state.borrow_mut().toggle();
    render(toggle, &view)
}

fn render(toggle: &Element, view: &ThemeView) -> Result<()> {
    let body = dom::body()?;
    dom::set_class(&body, DARK_MODE_CLASS, view.dark_class)?;

    if let Some(icon) = toggle.query_selector("svg").map_err(js_err)? {
        icon.set_inner_html(view.icon_markup);
    }
    dom::set_attr(toggle, "aria-label", view.aria_label)?;
    dom::set_attr(toggle, "aria-pressed", view.aria_pressed)?;
    Ok(())
}
