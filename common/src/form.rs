//! お問い合わせフォームのバリデーションと送信状態
//!
//! 各フィールドの状態遷移:
//! - 未入力(Untouched) → 有効(Valid) / 無効(Invalid)
//! - blur では常に再検証、input では無効状態のときだけ再検証
//!
//! ルールは required → minLength → pattern の順に評価し、最初に失敗したもので確定する。

use crate::labels;
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

// ============================================
// フィールド定義
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// input の name 属性から対応するフィールドを取得
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "subject" => Some(Field::Subject),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn rule(&self) -> FieldRule {
        match self {
            Field::Name => FieldRule {
                required: true,
                min_length: Some(2),
                pattern: None,
                message: labels::NAME_TOO_SHORT,
            },
            Field::Email => FieldRule {
                required: true,
                min_length: None,
                pattern: Some(&*EMAIL_RE),
                message: labels::EMAIL_INVALID,
            },
            Field::Subject => FieldRule {
                required: true,
                min_length: Some(3),
                pattern: None,
                message: labels::SUBJECT_TOO_SHORT,
            },
            Field::Message => FieldRule {
                required: true,
                min_length: Some(10),
                pattern: None,
                message: labels::MESSAGE_TOO_SHORT,
            },
        }
    }
}

/// フィールドの検証ルール
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<&'static Regex>,
    pub message: &'static str,
}

impl FieldRule {
    /// 値を検証する（前後の空白は除いて判定）
    pub fn check(&self, value: &str) -> FieldState {
        let value = value.trim();

        if self.required && value.is_empty() {
            return FieldState::Invalid(labels::FIELD_REQUIRED.to_string());
        }

        // 長さはブラウザの文字列長と同じく UTF-16 単位で数える
        if let Some(min) = self.min_length {
            if value.encode_utf16().count() < min {
                return FieldState::Invalid(self.message.to_string());
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.is_match(value) {
                return FieldState::Invalid(self.message.to_string());
            }
        }

        FieldState::Valid
    }
}

pub fn validate(field: Field, value: &str) -> FieldState {
    field.rule().check(value)
}

// ============================================
// フィールド状態
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    /// エラー表示欄に出す文言（有効・未入力は空）
    pub fn message(&self) -> &str {
        match self {
            FieldState::Invalid(message) => message,
            _ => "",
        }
    }

    /// (`error` クラスの有無, `success` クラスの有無)
    pub fn classes(&self) -> (bool, bool) {
        match self {
            FieldState::Untouched => (false, false),
            FieldState::Valid => (false, true),
            FieldState::Invalid(_) => (true, false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Blur,
    Input,
}

// ============================================
// 送信状態
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// 送信シミュレーション中（ボタン無効・ローディング表示）
    Sending,
    /// 完了メッセージ表示中
    Sent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 無効なフィールドがあり送信中止。先頭の無効フィールドにフォーカスする。
    Blocked { first_invalid: Field },
    /// 送信開始。番号は完了メッセージを隠すときの照合に使う。
    Accepted { submission: u32 },
    /// 送信中のため無視
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: Vec<(Field, FieldState)>,
    phase: SubmitPhase,
    submission: u32,
}

impl ContactForm {
    /// 文書順のフィールド一覧から作成
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field, FieldState::Untouched))
                .collect(),
            phase: SubmitPhase::Idle,
            submission: 0,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    pub fn state(&self, field: Field) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, state)| state)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// blur / input イベントを処理する
    ///
    /// 再検証した場合は新しい状態を返す。input で有効・未入力のときは `None`。
    pub fn handle(&mut self, field: Field, event: FieldEvent, value: &str) -> Option<&FieldState> {
        let slot = self.fields.iter_mut().find(|(f, _)| *f == field)?;
        if event == FieldEvent::Input && !slot.1.is_invalid() {
            return None;
        }
        slot.1 = validate(field, value);
        Some(&slot.1)
    }

    /// 全フィールドを再検証して送信可否を判定する
    pub fn submit<F>(&mut self, value_of: F) -> SubmitOutcome
    where
        F: Fn(Field) -> String,
    {
        if self.phase == SubmitPhase::Sending {
            return SubmitOutcome::Busy;
        }

        let mut first_invalid = None;
        for (field, state) in self.fields.iter_mut() {
            *state = validate(*field, &value_of(*field));
            if state.is_invalid() && first_invalid.is_none() {
                first_invalid = Some(*field);
            }
        }

        if let Some(field) = first_invalid {
            return SubmitOutcome::Blocked {
                first_invalid: field,
            };
        }

        self.submission += 1;
        self.phase = SubmitPhase::Sending;
        SubmitOutcome::Accepted {
            submission: self.submission,
        }
    }

    /// 送信完了。全フィールドを未入力状態に戻す。
    pub fn finish_sending(&mut self) {
        if self.phase != SubmitPhase::Sending {
            return;
        }
        self.phase = SubmitPhase::Sent;
        for (_, state) in self.fields.iter_mut() {
            *state = FieldState::Untouched;
        }
    }

    /// 完了メッセージを隠す
    ///
    /// 後から別の送信が始まっている場合は何もせず `false`。
    pub fn hide_success(&mut self, submission: u32) -> bool {
        if self.phase != SubmitPhase::Sent || submission != self.submission {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_checked_first() {
        assert_eq!(
            validate(Field::Email, "   "),
            FieldState::Invalid("Este campo es obligatorio".into())
        );
    }

    #[test]
    fn test_min_length() {
        assert!(validate(Field::Name, "A").is_invalid());
        assert_eq!(validate(Field::Name, "Al"), FieldState::Valid);
        assert_eq!(validate(Field::Name, " A ").message(), labels::NAME_TOO_SHORT);
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        // BMP内のマルチバイト文字は1単位
        assert_eq!(validate(Field::Name, "Jó"), FieldState::Valid);
        assert_eq!(validate(Field::Subject, "¿Sí"), FieldState::Valid);
        // サロゲートペアは2単位
        assert_eq!(validate(Field::Name, "😀"), FieldState::Valid);
        assert!(validate(Field::Subject, "😀").is_invalid());
    }

    #[test]
    fn test_email_pattern() {
        assert_eq!(validate(Field::Email, "jane@x.com"), FieldState::Valid);
        assert!(validate(Field::Email, "bad").is_invalid());
        assert!(validate(Field::Email, "jane@x").is_invalid());
        assert!(validate(Field::Email, "ja ne@x.com").is_invalid());
        assert_eq!(validate(Field::Email, "bad").message(), labels::EMAIL_INVALID);
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(Field::from_name("subject"), Some(Field::Subject));
        assert_eq!(Field::from_name("phone"), None);
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_classes_mirror_state() {
        assert_eq!(FieldState::Untouched.classes(), (false, false));
        assert_eq!(FieldState::Valid.classes(), (false, true));
        assert_eq!(FieldState::Invalid("x".into()).classes(), (true, false));
    }

    #[test]
    fn test_input_only_revalidates_invalid() {
        let mut form = ContactForm::new(Field::ALL);

        // 未入力状態での input は検証しない
        assert!(form.handle(Field::Name, FieldEvent::Input, "J").is_none());
        assert_eq!(form.state(Field::Name), Some(&FieldState::Untouched));

        // blur で無効になった後は input ごとに検証
        assert!(form.handle(Field::Name, FieldEvent::Blur, "J").unwrap().is_invalid());
        assert_eq!(
            form.handle(Field::Name, FieldEvent::Input, "Jo"),
            Some(&FieldState::Valid)
        );

        // 有効状態での input は検証しない
        assert!(form.handle(Field::Name, FieldEvent::Input, "").is_none());
        assert_eq!(form.state(Field::Name), Some(&FieldState::Valid));
    }

    #[test]
    fn test_submit_busy_while_sending() {
        let mut form = ContactForm::new([Field::Name]);
        let outcome = form.submit(|_| "Jane".to_string());
        assert_eq!(outcome, SubmitOutcome::Accepted { submission: 1 });
        assert_eq!(form.submit(|_| "Jane".to_string()), SubmitOutcome::Busy);
    }

    #[test]
    fn test_stale_hide_is_ignored() {
        let mut form = ContactForm::new([Field::Name]);
        form.submit(|_| "Jane".to_string());
        form.finish_sending();
        form.submit(|_| "Jane".to_string());
        form.finish_sending();

        assert!(!form.hide_success(1));
        assert_eq!(form.phase(), SubmitPhase::Sent);
        assert!(form.hide_success(2));
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }
}
