//! 読了プログレスバー

use crate::dom::{self, js_err};
use gloo::events::EventListener;
use portfolio_ui_common::progress::{aria_value, reading_progress, width_style};
use portfolio_ui_common::{Result, UiConfig};
use web_sys::{HtmlElement, Window};

pub fn init(_config: &UiConfig) -> Result<bool> {
    let Some(fill) = dom::query(".reading-progress-fill")? else {
        return Ok(false);
    };
    let fill = dom::as_html(&fill)?;
    let window = dom::window()?;

    render(&window, &fill)?;

    let scroll_window = window.clone();
    EventListener::new(&window, "scroll", move |_| {
        dom::warn_on_err("reading-progress", render(&scroll_window, &fill));
    })
    .forget();

    Ok(true)
}

fn render(window: &Window, fill: &HtmlElement) -> Result<()> {
    let viewport_height = window.inner_height().map_err(js_err)?.as_f64().unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().map_err(js_err)?;

    let progress = reading_progress(scroll_y, document_height, viewport_height);
    dom::set_style(fill, "width", &width_style(progress))?;

    if let Some(bar) = fill.parent_element() {
        dom::set_attr(&bar, "aria-valuenow", &aria_value(progress).to_string())?;
    }
    Ok(())
}
