//! DOM操作ヘルパー
//!
//! web-sys の `JsValue` エラーを共通エラー型へ変換して扱う。

use portfolio_ui_common::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn js_err(value: JsValue) -> Error {
    Error::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Dom("window が取得できません".into()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::Dom("document が取得できません".into()))
}

pub fn body() -> Result<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| Error::Dom("body が取得できません".into()))
}

pub fn by_id(id: &str) -> Result<Option<Element>> {
    Ok(document()?.get_element_by_id(id))
}

pub fn query(selector: &str) -> Result<Option<Element>> {
    document()?.query_selector(selector).map_err(js_err)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?.query_selector_all(selector).map_err(js_err)?;
    Ok(elements(&list))
}

pub fn query_in(root: &Element, selector: &str) -> Result<Option<Element>> {
    root.query_selector(selector).map_err(js_err)
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector).map_err(js_err)?;
    Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: &Element) -> Result<HtmlElement> {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::Dom(format!("<{}> は HTMLElement ではありません", element.tag_name())))
}

/// クラスの付与/除去を `on` で指定
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(js_err)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element.style().set_property(property, value).map_err(js_err)
}

pub fn set_attr(element: &Element, name: &str, value: &str) -> Result<()> {
    element.set_attribute(name, value).map_err(js_err)
}

/// イベントハンドラ内のエラーはコンソールに出して処理を続ける
pub fn warn_on_err(context: &str, result: Result<()>) {
    if let Err(err) = result {
        gloo::console::warn!(format!("{}: {}", context, err));
    }
}
