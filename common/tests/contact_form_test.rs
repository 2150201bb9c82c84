//! お問い合わせフォームのテスト
//!
//! 送信時の一括検証と、送信シミュレーションの状態遷移を検証

use portfolio_ui_common::form::validate;
use portfolio_ui_common::labels;
use portfolio_ui_common::{ContactForm, Field, FieldEvent, FieldState, SubmitOutcome, SubmitPhase};

fn values(name: &str, email: &str, subject: &str, message: &str) -> impl Fn(Field) -> String {
    let (name, email, subject, message) = (
        name.to_string(),
        email.to_string(),
        subject.to_string(),
        message.to_string(),
    );
    move |field| match field {
        Field::Name => name.clone(),
        Field::Email => email.clone(),
        Field::Subject => subject.clone(),
        Field::Message => message.clone(),
    }
}

/// 不正な入力では送信されず、先頭の無効フィールドにフォーカスする
#[test]
fn test_submit_blocked_focuses_first_invalid() {
    let mut form = ContactForm::new(Field::ALL);
    let outcome = form.submit(values("A", "bad", "Hi", "short"));

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            first_invalid: Field::Name
        }
    );
    assert_eq!(form.phase(), SubmitPhase::Idle);

    assert_eq!(
        form.state(Field::Name),
        Some(&FieldState::Invalid(labels::NAME_TOO_SHORT.to_string()))
    );
    assert_eq!(
        form.state(Field::Email),
        Some(&FieldState::Invalid(labels::EMAIL_INVALID.to_string()))
    );
    // "Hi" は2文字なので件名の最小文字数(3)を満たさない
    assert_eq!(
        form.state(Field::Subject),
        Some(&FieldState::Invalid(labels::SUBJECT_TOO_SHORT.to_string()))
    );
    assert_eq!(
        form.state(Field::Message),
        Some(&FieldState::Invalid(labels::MESSAGE_TOO_SHORT.to_string()))
    );
}

/// 件名だけ有効な場合でもフォーカス先は文書順で最初の無効フィールド
#[test]
fn test_submit_blocked_subject_valid() {
    let mut form = ContactForm::new(Field::ALL);
    let outcome = form.submit(values("A", "bad", "Hey", "short"));

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            first_invalid: Field::Name
        }
    );
    assert_eq!(form.state(Field::Subject), Some(&FieldState::Valid));
}

/// フォーカス先はフィールドの登録順に従う
#[test]
fn test_submit_blocked_respects_document_order() {
    let mut form = ContactForm::new([Field::Email, Field::Name]);
    let outcome = form.submit(values("A", "bad", "", ""));

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            first_invalid: Field::Email
        }
    );
}

/// 正しい入力では送信 → 完了 → メッセージ非表示と遷移し、全フィールドが初期化される
#[test]
fn test_submit_success_flow() {
    let mut form = ContactForm::new(Field::ALL);
    let outcome = form.submit(values(
        "Jane Doe",
        "jane@x.com",
        "Hello",
        "This is a long enough message.",
    ));

    let submission = match outcome {
        SubmitOutcome::Accepted { submission } => submission,
        other => panic!("送信が受け付けられていない: {:?}", other),
    };
    assert_eq!(form.phase(), SubmitPhase::Sending);
    for field in Field::ALL {
        assert_eq!(form.state(field), Some(&FieldState::Valid));
    }

    form.finish_sending();
    assert_eq!(form.phase(), SubmitPhase::Sent);
    for field in Field::ALL {
        assert_eq!(form.state(field), Some(&FieldState::Untouched));
    }

    assert!(form.hide_success(submission));
    assert_eq!(form.phase(), SubmitPhase::Idle);
}

/// 送信完了後の再入力は blur から検証が始まる
#[test]
fn test_after_reset_input_is_quiet_again() {
    let mut form = ContactForm::new(Field::ALL);
    form.submit(values("Jane", "jane@x.com", "Hola", "Mensaje suficientemente largo"));
    form.finish_sending();

    assert!(form.handle(Field::Name, FieldEvent::Input, "J").is_none());
    assert_eq!(form.state(Field::Name), Some(&FieldState::Untouched));
}

/// 送信シミュレーション外で finish_sending を呼んでも何も起きない
#[test]
fn test_finish_sending_without_submit() {
    let mut form = ContactForm::new(Field::ALL);
    form.handle(Field::Name, FieldEvent::Blur, "Jane");
    form.finish_sending();

    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert_eq!(form.state(Field::Name), Some(&FieldState::Valid));
}

/// ルール評価順: 必須 → 最小文字数 → パターン
#[test]
fn test_rule_order_short_circuits() {
    assert_eq!(validate(Field::Message, "").message(), labels::FIELD_REQUIRED);
    assert_eq!(validate(Field::Message, "corto").message(), labels::MESSAGE_TOO_SHORT);
    assert_eq!(validate(Field::Email, "@").message(), labels::EMAIL_INVALID);
}
