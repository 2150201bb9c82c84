//! ページ上の各コントローラ
//!
//! それぞれ `init` で対象要素を探してイベントを登録する。
//! 対象要素がない場合は `Ok(false)` を返し、初期化をスキップする。

pub mod carousel;
pub mod contact_form;
pub mod expandable;
pub mod filter;
pub mod modal;
pub mod navigation;
pub mod reading_progress;
pub mod skill_reveal;
pub mod smooth_scroll;
pub mod theme;
