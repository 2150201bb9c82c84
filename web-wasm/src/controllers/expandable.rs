//! 「続きを読む」ボタン
//!
//! `.project-description` 内の `.description-short` / `.description-full` を切り替える。

use crate::dom;
use gloo::events::EventListener;
use portfolio_ui_common::{Error, ExpandState, Result, UiConfig};
use std::cell::Cell;
use web_sys::{Element, HtmlElement};

struct Description {
    button: Element,
    short: HtmlElement,
    full: HtmlElement,
    state: Cell<ExpandState>,
}

impl Description {
    fn find(button: Element) -> Result<Self> {
        let container = button
            .closest(".project-description")
            .map_err(dom::js_err)?
            .ok_or_else(|| Error::Dom(".project-description が見つかりません".into()))?;
        let short = dom::query_in(&container, ".description-short")?
            .ok_or_else(|| Error::Dom(".description-short が見つかりません".into()))?;
        let full = dom::query_in(&container, ".description-full")?
            .ok_or_else(|| Error::Dom(".description-full が見つかりません".into()))?;
        let full = dom::as_html(&full)?;

        let display = full.style().get_property_value("display").unwrap_or_default();
        Ok(Self {
            button,
            short: dom::as_html(&short)?,
            state: Cell::new(ExpandState::from_full_display(&display)),
            full,
        })
    }

    fn toggle(&self) -> Result<()> {
        let next = self.state.get().toggled();
        self.state.set(next);

        let (short_display, full_display) = next.displays();
        dom::set_style(&self.short, "display", short_display)?;
        dom::set_style(&self.full, "display", full_display)?;
        self.button.set_text_content(Some(next.button_text()));
        dom::set_attr(&self.button, "aria-label", next.aria_label())?;
        Ok(())
    }
}

pub fn init(_config: &UiConfig) -> Result<bool> {
    let buttons = dom::query_all(".read-more-btn")?;
    if buttons.is_empty() {
        return Ok(false);
    }

    for button in buttons {
        let description = match Description::find(button) {
            Ok(description) => description,
            Err(err) => {
                gloo::console::warn!(format!("expandable: {}", err));
                continue;
            }
        };
        let target = description.button.clone();
        EventListener::new(&target, "click", move |_| {
            dom::warn_on_err("expandable", description.toggle());
        })
        .forget();
    }

    Ok(true)
}
