//! プロジェクトフィルタ
//!
//! `.filter-btn[data-filter]` のクリックで `.project-card[data-tags]` の表示を切り替える。

use crate::dom;
use gloo::events::EventListener;
use portfolio_ui_common::{FilterState, Result, UiConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

struct FilterView {
    buttons: Vec<Element>,
    cards: Vec<Element>,
    state: RefCell<FilterState>,
}

impl FilterView {
    fn select(&self, clicked: usize) -> Result<()> {
        let filter = self.buttons[clicked]
            .get_attribute("data-filter")
            .unwrap_or_default();

        // クリックしたボタンだけをアクティブにする
        for (index, button) in self.buttons.iter().enumerate() {
            dom::set_class(button, "active", index == clicked)?;
        }

        let tags: Vec<String> = self
            .cards
            .iter()
            .map(|card| card.get_attribute("data-tags").unwrap_or_default())
            .collect();
        let visibility = self
            .state
            .borrow_mut()
            .select(&filter, tags.iter().map(String::as_str));

        for (card, visible) in self.cards.iter().zip(visibility) {
            dom::set_class(card, "hidden", !visible)?;
        }
        Ok(())
    }
}

pub fn init(_config: &UiConfig) -> Result<bool> {
    let buttons = dom::query_all(".filter-btn[data-filter]")?;
    if buttons.is_empty() {
        return Ok(false);
    }

    let view = Rc::new(FilterView {
        buttons,
        cards: dom::query_all(".project-card")?,
        state: RefCell::new(FilterState::default()),
    });

    for (index, button) in view.buttons.iter().enumerate() {
        let on_click = view.clone();
        EventListener::new(button, "click", move |_| {
            dom::warn_on_err("filter", on_click.select(index));
        })
        .forget();
    }

    Ok(true)
}
