//! ナビゲーションメニュー
//!
//! - `.menu-toggle` でモバイルメニューを開閉、`.menu a` 選択で閉じる
//! - スクロール位置に応じて `.menu a` の `active` を切り替える

use crate::dom;
use gloo::events::EventListener;
use portfolio_ui_common::navigation::{active_section, link_targets};
use portfolio_ui_common::{MenuState, Result, SectionBounds, UiConfig};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub fn init(config: &UiConfig) -> Result<bool> {
    let links = dom::query_all(".menu a")?;

    let menu_bound = match (dom::query(".menu-toggle")?, dom::query(".menu")?) {
        (Some(toggle), Some(menu)) => {
            bind_menu(toggle, menu, &links)?;
            true
        }
        _ => false,
    };

    let highlight_bound = bind_highlight(links, config.section_offset_px)?;

    Ok(menu_bound || highlight_bound)
}

// ============================================
// モバイルメニュー
// ============================================

struct MenuView {
    toggle: Element,
    menu: Element,
    state: Cell<MenuState>,
}

impl MenuView {
    fn update<F: FnOnce(&mut MenuState)>(&self, change: F) -> Result<()> {
        let mut state = self.state.get();
        change(&mut state);
        self.state.set(state);
        self.render(state)
    }

    fn render(&self, state: MenuState) -> Result<()> {
        dom::set_class(&self.menu, "open", state.is_open())?;
        dom::set_class(&self.toggle, "active", state.is_open())?;
        dom::set_attr(&self.toggle, "aria-expanded", state.aria_expanded())?;
        dom::set_attr(&self.toggle, "aria-label", state.aria_label())?;
        Ok(())
    }
}

fn bind_menu(toggle: Element, menu: Element, links: &[Element]) -> Result<()> {
    let view = Rc::new(MenuView {
        toggle,
        menu,
        state: Cell::new(MenuState::default()),
    });

    let on_toggle = view.clone();
    EventListener::new(&view.toggle, "click", move |_| {
        dom::warn_on_err(
            "navigation",
            on_toggle.update(|state| {
                state.toggle();
            }),
        );
    })
    .forget();

    for link in links {
        let on_link = view.clone();
        EventListener::new(link, "click", move |_| {
            dom::warn_on_err("navigation", on_link.update(MenuState::close));
        })
        .forget();
    }

    Ok(())
}

// ============================================
// アクティブリンク
// ============================================

fn bind_highlight(links: Vec<Element>, offset: f64) -> Result<bool> {
    let sections = dom::query_all("section")?;
    if sections.is_empty() || links.is_empty() {
        return Ok(false);
    }

    let window = dom::window()?;
    let scroll_window = window.clone();
    let update = move || {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        dom::warn_on_err("navigation", highlight(&sections, &links, scroll_y, offset));
    };

    update();
    EventListener::new(&window, "scroll", move |_| update()).forget();

    Ok(true)
}

fn section_bounds(sections: &[Element]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|section| {
            let offset_top = section
                .dyn_ref::<HtmlElement>()
                .map(|html| html.offset_top() as f64)
                .unwrap_or(0.0);
            SectionBounds::new(
                section.id(),
                offset_top,
                section.client_height() as f64,
            )
        })
        .collect()
}

fn highlight(sections: &[Element], links: &[Element], scroll_y: f64, offset: f64) -> Result<()> {
    let bounds = section_bounds(sections);
    let Some(active_id) = active_section(&bounds, scroll_y, offset) else {
        return Ok(());
    };

    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        dom::set_class(link, "active", link_targets(&href, active_id))?;
    }
    Ok(())
}
