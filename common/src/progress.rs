//! 読了プログレス計算

/// スクロール量から読了率（0〜100）を計算する
///
/// ドキュメントがビューポート以下の高さの場合はスクロール余地がないため 0 を返す。
pub fn reading_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// `aria-valuenow` 用の整数値
pub fn aria_value(progress: f64) -> i32 {
    progress.round() as i32
}

/// プログレスバーの幅指定
pub fn width_style(progress: f64) -> String {
    format!("{}%", progress)
}
