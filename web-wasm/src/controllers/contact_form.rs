//! お問い合わせフォーム
//!
//! - blur / input でフィールド単位の検証
//! - 送信時に全件検証し、無効なら先頭の無効フィールドへフォーカス
//! - 有効なら一定時間の送信シミュレーション後に完了メッセージを表示してリセット

use crate::dom::{self, js_err};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::future::TimeoutFuture;
use portfolio_ui_common::{
    ContactForm, Error, Field, FieldEvent, FieldState, Result, SubmitOutcome, UiConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

pub const FORM_ID: &str = "contact-form";

#[derive(Clone)]
struct BoundField {
    field: Field,
    input: Element,
}

impl BoundField {
    fn value(&self) -> String {
        if let Some(input) = self.input.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = self.input.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    /// クラスとエラー表示欄（直後の兄弟要素）を状態に合わせる
    fn render(&self, state: &FieldState) -> Result<()> {
        let (error, success) = state.classes();
        dom::set_class(&self.input, "error", error)?;
        dom::set_class(&self.input, "success", success)?;
        if let Some(message) = self.input.next_element_sibling() {
            message.set_text_content(Some(state.message()));
        }
        Ok(())
    }
}

fn optional(root: &Element, selector: &str) -> Result<Option<HtmlElement>> {
    dom::query_in(root, selector)?
        .map(|element| dom::as_html(&element))
        .transpose()
}

#[derive(Clone, Copy)]
struct Timing {
    submit_delay_ms: u32,
    success_hide_ms: u32,
}

struct FormView {
    form: HtmlFormElement,
    fields: Vec<BoundField>,
    submit: HtmlButtonElement,
    idle_label: Option<HtmlElement>,
    loading_label: Option<HtmlElement>,
    success: Option<HtmlElement>,
}

impl FormView {
    fn find(form: HtmlFormElement) -> Result<Self> {
        let fields = dom::query_all_in(&form, "input, textarea")?
            .into_iter()
            .filter_map(|input| {
                let name = input.get_attribute("name").unwrap_or_default();
                Field::from_name(&name).map(|field| BoundField { field, input })
            })
            .collect();

        let submit = dom::query_in(&form, "button[type=\"submit\"]")?
            .ok_or_else(|| Error::Dom("送信ボタンが見つかりません".into()))?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| Error::Dom("送信ボタンが button 要素ではありません".into()))?;

        Ok(Self {
            idle_label: optional(&submit, ".btn-text")?,
            loading_label: optional(&submit, ".btn-loading")?,
            success: optional(&form, ".form-success")?,
            fields,
            submit,
            form,
        })
    }

    fn value_of(&self, field: Field) -> String {
        self.fields
            .iter()
            .find(|bound| bound.field == field)
            .map(BoundField::value)
            .unwrap_or_default()
    }

    fn render_fields(&self, state: &ContactForm) -> Result<()> {
        for bound in &self.fields {
            if let Some(field_state) = state.state(bound.field) {
                bound.render(field_state)?;
            }
        }
        Ok(())
    }

    fn focus(&self, field: Field) -> Result<()> {
        let Some(bound) = self.fields.iter().find(|bound| bound.field == field) else {
            return Ok(());
        };
        dom::as_html(&bound.input)?.focus().map_err(js_err)
    }

    fn set_loading(&self, loading: bool) -> Result<()> {
        if let Some(label) = &self.idle_label {
            dom::set_style(label, "display", if loading { "none" } else { "inline" })?;
        }
        if let Some(label) = &self.loading_label {
            dom::set_style(label, "display", if loading { "flex" } else { "none" })?;
        }
        self.submit.set_disabled(loading);
        Ok(())
    }

    fn set_success_visible(&self, visible: bool) -> Result<()> {
        match &self.success {
            Some(banner) => dom::set_style(banner, "display", if visible { "flex" } else { "none" }),
            None => Ok(()),
        }
    }

    fn finish(&self, state: &ContactForm) -> Result<()> {
        self.set_loading(false)?;
        self.set_success_visible(true)?;
        self.form.reset();
        self.render_fields(state)
    }
}

pub fn init(config: &UiConfig) -> Result<bool> {
    let Some(form) = dom::by_id(FORM_ID)? else {
        return Ok(false);
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| Error::Dom(format!("#{} が form 要素ではありません", FORM_ID)))?;

    let view = Rc::new(FormView::find(form)?);
    let state = Rc::new(RefCell::new(ContactForm::new(
        view.fields.iter().map(|bound| bound.field),
    )));
    let timing = Timing {
        submit_delay_ms: config.submit_delay_ms,
        success_hide_ms: config.success_hide_ms,
    };

    for bound in &view.fields {
        for (name, event) in [("blur", FieldEvent::Blur), ("input", FieldEvent::Input)] {
            let state = state.clone();
            let target = bound.clone();
            EventListener::new(&bound.input, name, move |_| {
                let value = target.value();
                let mut form = state.borrow_mut();
                if let Some(field_state) = form.handle(target.field, event, &value) {
                    dom::warn_on_err("contact-form", target.render(field_state));
                }
            })
            .forget();
        }
    }

    let on_submit_view = view.clone();
    EventListener::new_with_options(
        &view.form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            dom::warn_on_err("contact-form", submit(&on_submit_view, &state, timing));
        },
    )
    .forget();

    Ok(true)
}

fn submit(view: &Rc<FormView>, state: &Rc<RefCell<ContactForm>>, timing: Timing) -> Result<()> {
    let outcome = state.borrow_mut().submit(|field| view.value_of(field));

    match outcome {
        SubmitOutcome::Busy => Ok(()),
        SubmitOutcome::Blocked { first_invalid } => {
            view.render_fields(&state.borrow())?;
            view.focus(first_invalid)
        }
        SubmitOutcome::Accepted { submission } => {
            view.render_fields(&state.borrow())?;
            view.set_loading(true)?;
            spawn_local(simulate_send(view.clone(), state.clone(), submission, timing));
            Ok(())
        }
    }
}

/// バックエンドの代わりに一定時間待ってから完了扱いにする
async fn simulate_send(
    view: Rc<FormView>,
    state: Rc<RefCell<ContactForm>>,
    submission: u32,
    timing: Timing,
) {
    TimeoutFuture::new(timing.submit_delay_ms).await;
    state.borrow_mut().finish_sending();
    dom::warn_on_err("contact-form", view.finish(&state.borrow()));
    gloo::console::log!("contact-form: sent");

    TimeoutFuture::new(timing.success_hide_ms).await;
    let hide = state.borrow_mut().hide_success(submission);
    if hide {
        dom::warn_on_err("contact-form", view.set_success_visible(false));
    }
}
