//! ギャラリー画像のモーダル表示
//!
//! モーダル要素はページに1つだけ作成し、全サムネイルで共有する。
//! Escape キーでは閉じない（オーバーレイのクリックのみ）。

use crate::dom::{self, js_err};
use gloo::events::EventListener;
use portfolio_ui_common::{Error, ModalState, Result, UiConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

pub const MODAL_CLASS: &str = "image-modal";

struct Lightbox {
    overlay: Element,
    image: HtmlImageElement,
    state: RefCell<ModalState>,
}

impl Lightbox {
    fn create() -> Result<Self> {
        let document = dom::document()?;
        let overlay = document.create_element("div").map_err(js_err)?;
        overlay.set_class_name(MODAL_CLASS);

        let image = document
            .create_element("img")
            .map_err(js_err)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| Error::Dom("img 要素を作成できません".into()))?;
        image.set_alt("");

        overlay.append_child(&image).map_err(js_err)?;
        dom::body()?.append_child(&overlay).map_err(js_err)?;

        Ok(Self {
            overlay,
            image,
            state: RefCell::new(ModalState::default()),
        })
    }

    fn open(&self, src: String, alt: String) -> Result<()> {
        self.state.borrow_mut().open(src, alt);
        self.render()
    }

    fn close(&self) -> Result<()> {
        self.state.borrow_mut().close();
        self.render()
    }

    fn render(&self) -> Result<()> {
        let state = self.state.borrow();
        if let Some(image) = state.image() {
            self.image.set_src(&image.src);
            self.image.set_alt(&image.alt);
        }
        dom::set_class(&self.overlay, "active", state.is_open())
    }
}

/// サムネイルの src / alt（img 要素でなければ属性値）
fn thumbnail_source(thumbnail: &Element) -> (String, String) {
    match thumbnail.dyn_ref::<HtmlImageElement>() {
        Some(image) => (image.src(), image.alt()),
        None => (
            thumbnail.get_attribute("src").unwrap_or_default(),
            thumbnail.get_attribute("alt").unwrap_or_default(),
        ),
    }
}

pub fn init(_config: &UiConfig) -> Result<bool> {
    let thumbnails = dom::query_all(".galeria-item img")?;
    if thumbnails.is_empty() {
        return Ok(false);
    }

    let lightbox = Rc::new(Lightbox::create()?);

    for thumbnail in thumbnails {
        let on_open = lightbox.clone();
        let source = thumbnail.clone();
        EventListener::new(&thumbnail, "click", move |event| {
            event.stop_propagation();
            let (src, alt) = thumbnail_source(&source);
            dom::warn_on_err("image-modal", on_open.open(src, alt));
        })
        .forget();
    }

    let on_close = lightbox.clone();
    EventListener::new(&lightbox.overlay, "click", move |_| {
        dom::warn_on_err("image-modal", on_close.close());
    })
    .forget();

    Ok(true)
}
