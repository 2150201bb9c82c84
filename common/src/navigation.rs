//! ナビゲーションメニュー
//!
//! - モバイルメニューの開閉
//! - スクロール位置に応じたアクティブリンクの判定
//! - ページ内アンカーのスクロール先計算

use crate::labels;

/// メニューの開閉状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 開閉を切り替え、切替後の状態を返す
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// リンク選択時に強制的に閉じる
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_label(&self) -> &'static str {
        if self.open {
            labels::MENU_CLOSE
        } else {
            labels::MENU_OPEN
        }
    }
}

/// セクションの位置情報（DOMから取得した値）
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }

    /// `[offsetTop - offset, offsetTop - offset + height)` に含まれるか
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let top = self.offset_top - offset;
        scroll_y >= top && scroll_y < top + self.height
    }
}

/// 現在のスクロール位置に該当するセクションID
///
/// 文書順に評価し、範囲が重なる場合は最後に一致したものを採用する。
/// どれにも該当しなければ `None`（リンク状態は変更しない）。
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(scroll_y, offset))
        .last()
        .map(|section| section.id.as_str())
}

/// リンクの href がセクションIDを指しているか（`#id` 完全一致）
///
/// IDのないセクションはどのリンクにも対応しない（`#` だけのリンクも含む）。
pub fn link_targets(href: &str, section_id: &str) -> bool {
    !section_id.is_empty() && href.strip_prefix('#') == Some(section_id)
}

/// アンカーリンクのスクロール先セレクタ
///
/// `#` のみのリンクは対象外。
pub fn anchor_target(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// アンカースクロールの到達位置（固定ヘッダー分を差し引く）
pub fn anchor_scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("inicio", 0.0, 600.0),
            SectionBounds::new("proyectos", 600.0, 800.0),
            SectionBounds::new("contacto", 1400.0, 500.0),
        ]
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.aria_label(), "Cerrar menú de navegación");
        assert!(!menu.toggle());
        assert_eq!(menu.aria_label(), "Abrir menú de navegación");
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_active_section_with_offset() {
        let sections = sample_sections();
        // 500 は proyectos の判定開始位置（600 - 100）
        assert_eq!(active_section(&sections, 499.0, 100.0), Some("inicio"));
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("proyectos"));
        assert_eq!(active_section(&sections, 1300.0, 100.0), Some("contacto"));
    }

    #[test]
    fn test_active_section_none() {
        let sections = sample_sections();
        assert_eq!(active_section(&sections, -200.0, 100.0), None);
        assert_eq!(active_section(&sections, 5000.0, 100.0), None);
    }

    #[test]
    fn test_active_section_overlap_last_wins() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 200.0, 1000.0),
        ];
        assert_eq!(active_section(&sections, 300.0, 100.0), Some("b"));
    }

    #[test]
    fn test_link_targets() {
        assert!(link_targets("#contacto", "contacto"));
        assert!(!link_targets("contacto", "contacto"));
        assert!(!link_targets("#contact", "contacto"));
    }

    #[test]
    fn test_section_without_id_matches_no_link() {
        let sections = vec![SectionBounds::new("", 0.0, 600.0)];
        let active = active_section(&sections, 10.0, 100.0).unwrap();
        // 該当セクションはあるので全リンクの active が外れる
        for href in ["#", "#inicio", ""] {
            assert!(!link_targets(href, active), "{} が選択された", href);
        }
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#sobre-mi"), Some("#sobre-mi"));
        assert_eq!(anchor_target("/blog"), None);
        assert_eq!(anchor_scroll_top(900.0, 70.0), 830.0);
    }
}
