//! プロジェクトフィルタ
//!
//! タグ判定は部分文字列一致（"js" は "js2000" にも一致する）。
//! タグ完全一致ではないが既存ページの挙動として維持している。

/// 全件表示のフィルタ値
pub const FILTER_ALL: &str = "all";

/// カードを表示するかどうか
pub fn is_visible(filter: &str, tags: &str) -> bool {
    filter == FILTER_ALL || tags.contains(filter)
}

/// 現在のフィルタ状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
        }
    }
}

impl FilterState {
    /// フィルタを選択し、各カードの表示可否を返す（入力順）
    pub fn select<'a, I>(&mut self, filter: &str, card_tags: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.active = filter.to_string();
        card_tags
            .into_iter()
            .map(|tags| is_visible(&self.active, tags))
            .collect()
    }
}
