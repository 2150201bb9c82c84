//! スキルバーのアニメーション開始
//!
//! 要素がビューポートに入った最初の一度だけ `animation-play-state` を running にする。

use crate::dom::{self, js_err};
use portfolio_ui_common::reveal::{ANIMATION_PAUSED, ANIMATION_RUNNING};
use portfolio_ui_common::{Result, RevealTracker, UiConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub fn init(config: &UiConfig) -> Result<bool> {
    let elements = dom::query_all(".skill-level")?;
    if elements.is_empty() {
        return Ok(false);
    }

    let bars: Vec<HtmlElement> = elements
        .iter()
        .map(dom::as_html)
        .collect::<Result<_>>()?;
    for bar in &bars {
        dom::set_style(bar, "animation-play-state", ANIMATION_PAUSED)?;
    }

    let tracker = RefCell::new(RevealTracker::new(elements.len()));
    let targets = elements.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = targets.iter().position(|element| *element == target) else {
                    continue;
                };
                if tracker
                    .borrow_mut()
                    .on_intersection(index, entry.is_intersecting())
                {
                    dom::warn_on_err("skill-reveal", release(&target));
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }

    Ok(true)
}

fn release(target: &Element) -> Result<()> {
    dom::set_style(&dom::as_html(target)?, "animation-play-state", ANIMATION_RUNNING)
}
