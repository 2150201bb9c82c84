//! テーマ（ライト/ダーク）の状態管理
//!
//! 優先順位: 保存済み設定 → OSのダークモード設定 → ライト

use crate::labels;
use std::fmt;
use std::str::FromStr;

/// ダークモード時に body に付与するクラス
pub const DARK_MODE_CLASS: &str = "dark-mode";

const SUN_ICON: &str = concat!(
    r#"<circle cx="12" cy="12" r="5"></circle>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#,
);

const MOON_ICON: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 初期テーマを決定する
    ///
    /// 保存値が `"dark"` ならダーク、それ以外の保存値はライト。
    /// 保存値がなければ（空文字も含む）OS設定に従う。
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.filter(|value| !value.is_empty()) {
            Some(value) => value.parse().unwrap_or(Theme::Light),
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// ダーク時は太陽（ライトへ戻す）、ライト時は月のアイコン
    pub fn icon_markup(&self) -> &'static str {
        match self {
            Theme::Light => MOON_ICON,
            Theme::Dark => SUN_ICON,
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            Theme::Light => labels::THEME_TO_DARK,
            Theme::Dark => labels::THEME_TO_LIGHT,
        }
    }

    pub fn aria_pressed(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// DOMへ反映する内容をまとめて取得
    pub fn view(&self) -> ThemeView {
        ThemeView {
            storage_value: self.as_str(),
            dark_class: self.is_dark(),
            icon_markup: self.icon_markup(),
            aria_label: self.aria_label(),
            aria_pressed: self.aria_pressed(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// 1つのテーマ状態から導出されるDOM反映内容
///
/// クラス・保存値・アイコン・ARIA属性が食い違わないよう、常にこれ経由で反映する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeView {
    pub storage_value: &'static str,
    pub dark_class: bool,
    pub icon_markup: &'static str,
    pub aria_label: &'static str,
    pub aria_pressed: &'static str,
}

/// テーマ切替コントローラの状態
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// 切り替えた場合の反映内容（状態は変えない）
    pub fn next_view(&self) -> ThemeView {
        self.current.toggled().view()
    }

    /// 切り替えて新しい反映内容を返す
    pub fn toggle(&mut self) -> ThemeView {
        self.current = self.current.toggled();
        self.current.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stored_wins() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_resolve_os_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    }

    #[test]
    fn test_resolve_unknown_stored_value() {
        // 不明な保存値はライト扱い（OS設定は見ない）
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn test_view_dark() {
        let view = Theme::Dark.view();
        assert_eq!(view.storage_value, "dark");
        assert!(view.dark_class);
        assert_eq!(view.aria_pressed, "true");
        assert_eq!(view.aria_label, "Cambiar a modo claro");
        assert!(view.icon_markup.starts_with("<circle"));
    }

    #[test]
    fn test_view_light() {
        let view = Theme::Light.view();
        assert_eq!(view.storage_value, "light");
        assert!(!view.dark_class);
        assert_eq!(view.aria_pressed, "false");
        assert_eq!(view.aria_label, "Cambiar a modo oscuro");
        assert!(view.icon_markup.starts_with("<path"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = ThemeState::new(Theme::Light);
        let before = state.current().view();
        state.toggle();
        let after = state.toggle();
        assert_eq!(before, after);
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn test_from_str_roundtrip() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_next_view_does_not_toggle() {
        let mut state = ThemeState::new(Theme::Light);
        let next = state.next_view();
        assert_eq!(next.storage_value, "dark");
        assert_eq!(state.current(), Theme::Light);
        assert_eq!(state.toggle(), next);
    }
}
