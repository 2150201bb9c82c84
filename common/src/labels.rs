//! 表示文言（スペイン語）
//!
//! ページの言語に合わせた固定文言。ARIAラベルとバリデーションメッセージを含む。

// ============================================
// テーマ切替
// ============================================

pub const THEME_TO_LIGHT: &str = "Cambiar a modo claro";
pub const THEME_TO_DARK: &str = "Cambiar a modo oscuro";

// ============================================
// メニュー
// ============================================

pub const MENU_OPEN: &str = "Abrir menú de navegación";
pub const MENU_CLOSE: &str = "Cerrar menú de navegación";

// ============================================
// 続きを読む
// ============================================

pub const READ_MORE: &str = "Leer más";
pub const READ_LESS: &str = "Leer menos";
pub const READ_MORE_ARIA: &str = "Leer más sobre este proyecto";
pub const READ_LESS_ARIA: &str = "Leer menos sobre este proyecto";

// ============================================
// お問い合わせフォーム
// ============================================

pub const FIELD_REQUIRED: &str = "Este campo es obligatorio";
pub const NAME_TOO_SHORT: &str = "El nombre debe tener al menos 2 caracteres";
pub const EMAIL_INVALID: &str = "Por favor ingresa un email válido";
pub const SUBJECT_TOO_SHORT: &str = "El asunto debe tener al menos 3 caracteres";
pub const MESSAGE_TOO_SHORT: &str = "El mensaje debe tener al menos 10 caracteres";

// ============================================
// スライダー
// ============================================

/// ドットボタンのARIAラベル（1始まり）
pub fn slide_dot_label(index: usize) -> String {
    format!("Ir a imagen {}", index + 1)
}
