//! 画像スライダー
//!
//! `#sliderTrack` / `#prevBtn` / `#nextBtn` / `#sliderDots` が全て揃っている場合のみ動作する。
//! 左右キーはスライダーの表示位置に関係なくドキュメント全体で受け付ける。

use crate::dom::{self, js_err};
use gloo::events::EventListener;
use portfolio_ui_common::labels::slide_dot_label;
use portfolio_ui_common::{Carousel, CarouselInput, Result, UiConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent};

struct Slider {
    track: HtmlElement,
    dots: Vec<Element>,
    state: RefCell<Carousel>,
}

impl Slider {
    fn apply(&self, input: CarouselInput) -> Result<()> {
        self.state.borrow_mut().apply(input);
        self.render()
    }

    fn render(&self) -> Result<()> {
        let state = self.state.borrow();
        dom::set_style(&self.track, "transform", &state.transform())?;
        for (index, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, "active", state.is_dot_active(index))?;
        }
        Ok(())
    }
}

fn bind(target: &EventTarget, slider: &Rc<Slider>, input: CarouselInput) {
    let slider = slider.clone();
    EventListener::new(target, "click", move |_| {
        dom::warn_on_err("carousel", slider.apply(input));
    })
    .forget();
}

pub fn init(_config: &UiConfig) -> Result<bool> {
    let (Some(track), Some(prev), Some(next), Some(dot_box)) = (
        dom::by_id("sliderTrack")?,
        dom::by_id("prevBtn")?,
        dom::by_id("nextBtn")?,
        dom::by_id("sliderDots")?,
    ) else {
        return Ok(false);
    };

    let slides = dom::query_all_in(&track, ".slide")?;
    let Some(carousel) = Carousel::new(slides.len()) else {
        return Ok(false);
    };

    let document = dom::document()?;
    let mut dots = Vec::with_capacity(slides.len());
    for index in 0..slides.len() {
        let dot = document.create_element("button").map_err(js_err)?;
        dot.class_list().add_1("slider-dot").map_err(js_err)?;
        dom::set_attr(&dot, "aria-label", &slide_dot_label(index))?;
        dot_box.append_child(&dot).map_err(js_err)?;
        dots.push(dot);
    }

    let slider = Rc::new(Slider {
        track: dom::as_html(&track)?,
        dots,
        state: RefCell::new(carousel),
    });
    slider.render()?;

    for (index, dot) in slider.dots.iter().enumerate() {
        bind(dot, &slider, CarouselInput::GoTo(index));
    }
    bind(&prev, &slider, CarouselInput::Prev);
    bind(&next, &slider, CarouselInput::Next);

    // スライド自体のクリックで次へ
    for slide in &slides {
        dom::set_style(&dom::as_html(slide)?, "cursor", "pointer")?;
        bind(slide, &slider, CarouselInput::Next);
    }

    let on_key = slider.clone();
    EventListener::new(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(input) = CarouselInput::from_key(&event.key()) {
            dom::warn_on_err("carousel", on_key.apply(input));
        }
    })
    .forget();

    Ok(true)
}
