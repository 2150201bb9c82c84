//! 「続きを読む」の開閉状態

use crate::labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandState {
    #[default]
    Short,
    Full,
}

impl ExpandState {
    /// DOM上の表示状態から現在の状態を判定する
    ///
    /// 全文ブロックが明示的に非表示なら Short。それ以外は Full とみなす。
    pub fn from_full_display(full_display: &str) -> Self {
        if full_display == "none" {
            ExpandState::Short
        } else {
            ExpandState::Full
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ExpandState::Short => ExpandState::Full,
            ExpandState::Full => ExpandState::Short,
        }
    }

    /// (短文の display, 全文の display)
    pub fn displays(&self) -> (&'static str, &'static str) {
        match self {
            ExpandState::Short => ("block", "none"),
            ExpandState::Full => ("none", "block"),
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            ExpandState::Short => labels::READ_MORE,
            ExpandState::Full => labels::READ_LESS,
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            ExpandState::Short => labels::READ_MORE_ARIA,
            ExpandState::Full => labels::READ_LESS_ARIA,
        }
    }
}
