//! ページ内リンクのスムーススクロール

use crate::dom;
use gloo::events::{EventListener, EventListenerOptions};
use portfolio_ui_common::navigation::{anchor_scroll_top, anchor_target};
use portfolio_ui_common::{Result, UiConfig};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

pub fn init(config: &UiConfig) -> Result<bool> {
    let anchors = dom::query_all("a[href^=\"#\"]")?;
    if anchors.is_empty() {
        return Ok(false);
    }

    let offset = config.anchor_offset_px;
    for anchor in anchors {
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                dom::warn_on_err("smooth-scroll", scroll_to(&href, offset));
            },
        )
        .forget();
    }

    Ok(true)
}

fn scroll_to(href: &str, offset: f64) -> Result<()> {
    let Some(selector) = anchor_target(href) else {
        return Ok(());
    };
    let Some(target) = dom::query(selector)? else {
        return Ok(());
    };
    let offset_top = target
        .dyn_ref::<HtmlElement>()
        .map(|html| html.offset_top() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(offset_top, offset));
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
